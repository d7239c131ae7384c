// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::compose::{self, PageParts};
use crate::config::settings::{ProductJob, Settings};
use crate::engines::fetch_engine::FetchEngine;
use crate::extraction::{fragments, gallery};
use crate::styling::transformer::StyleTransformer;
use crate::utils::errors::PipelineError;
use tracing::info;

/// 执行单个产品任务
///
/// 抓取、提取、样式化、组装、写出依次进行；任一步失败即中止
/// 当前任务，不产生输出文件（组装后写入中途失败除外）
pub async fn run(
    engine: &FetchEngine,
    settings: &Settings,
    job: &ProductJob,
) -> Result<(), PipelineError> {
    info!("Processing product page: {}", job.product_url);

    let body = engine.fetch_product_page(&job.product_url).await?;
    let page = fragments::extract(&body, &settings.profile)?;

    let transformer = StyleTransformer::new(&settings.profile);
    let description_html = transformer.style_description(&page.description_html);
    let sys_req_html = transformer.style_sys_req(&page.sys_req_html);

    let source = gallery::GallerySource::parse(&settings.gallery_url)?;
    let image_urls = gallery::fetch_gallery(engine, &source, &settings.profile).await?;

    let parts = PageParts {
        trailer_url: page.trailer_url,
        description_html,
        sys_req_html,
        image_urls,
        store_info: page.store_info,
    };
    let document = compose::compose_document(&parts, &settings.profile);
    compose::write_page(&job.output_path, &document).await?;

    info!("Finished product page: {}", job.output_path.display());
    Ok(())
}
