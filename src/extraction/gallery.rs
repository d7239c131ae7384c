// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::RenderProfile;
use crate::engines::fetch_engine::FetchEngine;
use crate::utils::errors::PipelineError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use tracing::{debug, info};
use url::Url;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// 识别为图片的文件扩展名（区分大小写）
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif"];

/// 图库目录来源
///
/// 从GitHub目录页地址拆出仓库与分支路径，用于拼接原始文件地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySource {
    /// 目录页地址
    pub listing_url: String,
    /// 所有者/仓库名
    pub owner_repo: String,
    /// 分支名及其下的目录路径
    pub branch_path: String,
}

impl GallerySource {
    /// 解析GitHub目录页地址
    ///
    /// 地址需为合法的绝对URL，路径需含仓库段与`/tree/`定界串；
    /// 主机名非`github.com`时路径中必须出现`github.com/`定界串
    pub fn parse(listing_url: &str) -> Result<Self, PipelineError> {
        let invalid = || PipelineError::InvalidGalleryUrl(listing_url.to_string());

        let url = Url::parse(listing_url).map_err(|_| invalid())?;
        let path = url.path();
        let tail = if url.host_str() == Some("github.com") {
            path.trim_start_matches('/')
        } else {
            path.split_once("github.com/")
                .map(|(_, tail)| tail)
                .ok_or_else(invalid)?
        };
        let (owner_repo, branch_path) = tail.split_once("/tree/").ok_or_else(invalid)?;
        if owner_repo.is_empty() || branch_path.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            listing_url: listing_url.to_string(),
            owner_repo: owner_repo.to_string(),
            branch_path: branch_path.to_string(),
        })
    }

    /// 拼接文件的原始内容地址
    pub fn raw_content_url(&self, filename: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            self.owner_repo, self.branch_path, filename
        )
    }
}

/// 抓取图库目录页并收集图片原始地址
///
/// 返回去重后按字典序排列的地址列表。逐条地址的播报
/// 仅在渲染配置开启时输出
pub async fn fetch_gallery(
    engine: &FetchEngine,
    source: &GallerySource,
    profile: &RenderProfile,
) -> Result<Vec<String>, PipelineError> {
    let body = engine.fetch(&source.listing_url).await?;
    let urls = collect_image_urls(&body, source);
    if profile.announce_gallery_urls {
        for url in &urls {
            info!("Discovered gallery image: {}", url);
        }
    }
    debug!("Gallery yielded {} image(s)", urls.len());
    Ok(urls)
}

/// 从目录页标记中收集图片地址
///
/// 过滤以图片扩展名结尾的锚点，取href末段作为文件名
pub fn collect_image_urls(listing_html: &str, source: &GallerySource) -> Vec<String> {
    let document = Html::parse_document(listing_html);
    let mut urls = BTreeSet::new();
    for anchor in document.select(&ANCHOR) {
        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => continue,
        };
        if !IMAGE_EXTENSIONS.iter().any(|ext| href.ends_with(ext)) {
            continue;
        }
        let filename = match href.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };
        urls.insert(source.raw_content_url(filename));
    }
    urls.into_iter().collect()
}
