// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use detailrs::config::settings::Settings;
use detailrs::engines::fetch_engine::FetchEngine;
use detailrs::pipeline;
use detailrs::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 按固定任务清单依次生成产品详情页，任一任务失败即退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting detailrs...");

    // 2. Load fixed settings
    let settings = Settings::new();
    let engine = FetchEngine::new(&settings.locale, settings.request_timeout())?;

    // 3. Run jobs sequentially
    for job in &settings.jobs {
        pipeline::run(&engine, &settings, job).await?;
    }

    info!("All detail pages generated");
    Ok(())
}
