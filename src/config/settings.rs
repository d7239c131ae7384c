// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// 应用程序配置设置
///
/// 固定的输入清单与渲染配置，作为显式结构传入流水线。
/// 不读取命令行参数、环境变量或配置文件
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 商店页面语言参数值
    pub locale: String,
    /// 请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 图库目录页地址
    pub gallery_url: String,
    /// 渲染配置
    pub profile: RenderProfile,
    /// 产品任务清单
    pub jobs: Vec<ProductJob>,
}

/// 单个产品任务
#[derive(Debug, Clone, Deserialize)]
pub struct ProductJob {
    /// 产品页面地址
    pub product_url: String,
    /// 输出文件路径
    pub output_path: PathBuf,
}

/// 预告片选取序号
///
/// 两个来源变体分别选取第一条与第二条预告片，意图（主预告片
/// 还是次预告片）未经确认，故保留为显式配置项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TrailerPick {
    /// 第一条预告片
    Primary,
    /// 第二条预告片
    Secondary,
}

impl TrailerPick {
    /// 对应的序号（从0开始）
    pub fn ordinal(self) -> usize {
        match self {
            TrailerPick::Primary => 0,
            TrailerPick::Secondary => 1,
        }
    }
}

/// 渲染配置
///
/// 保留两个来源变体的差异项，作为显式配置而非统一行为
#[derive(Debug, Clone, Deserialize)]
pub struct RenderProfile {
    /// 预告片选取
    pub trailer: TrailerPick,
    /// 是否解包描述区块中的bb_ul列表包装
    pub unwrap_description_lists: bool,
    /// 是否提取并渲染页面头部元数据区块
    pub include_store_info: bool,
    /// 系统需求容器宽度（百分比）
    pub sys_req_width_pct: u8,
    /// 是否为生成的OS子标题应用样式
    pub style_os_headings: bool,
    /// 预告片视频是否静音
    pub video_muted: bool,
    /// 预告片视频是否循环播放
    pub video_loop: bool,
    /// 是否逐条播报发现的图库图片地址
    pub announce_gallery_urls: bool,
}

impl RenderProfile {
    /// 完整变体
    ///
    /// 首条预告片、60%宽度、解包描述列表、含头部元数据与OS子标题样式
    pub fn full() -> Self {
        Self {
            trailer: TrailerPick::Primary,
            unwrap_description_lists: true,
            include_store_info: true,
            sys_req_width_pct: 60,
            style_os_headings: true,
            video_muted: true,
            video_loop: false,
            announce_gallery_urls: true,
        }
    }

    /// 精简变体
    ///
    /// 次条预告片、40%宽度、描述区块原样保留、不含头部元数据
    pub fn compact() -> Self {
        Self {
            trailer: TrailerPick::Secondary,
            unwrap_description_lists: false,
            include_store_info: false,
            sys_req_width_pct: 40,
            style_os_headings: false,
            video_muted: false,
            video_loop: true,
            announce_gallery_urls: false,
        }
    }
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::full()
    }
}

impl Settings {
    /// 创建默认配置
    ///
    /// 产品清单与图库地址为固定输入
    pub fn new() -> Self {
        Self {
            locale: "koreana".to_string(),
            request_timeout_secs: 30,
            gallery_url:
                "https://github.com/cper0309/detail-page-common/tree/main/detail-page-v1-240707"
                    .to_string(),
            profile: RenderProfile::full(),
            jobs: vec![
                ProductJob {
                    product_url: "https://store.steampowered.com/app/1623730/Palworld/"
                        .to_string(),
                    output_path: PathBuf::from("palworld.html"),
                },
                ProductJob {
                    product_url: "https://store.steampowered.com/app/413150/Stardew_Valley/"
                        .to_string(),
                    output_path: PathBuf::from("stardew_valley.html"),
                },
                ProductJob {
                    product_url: "https://store.steampowered.com/app/108600/Project_Zomboid/"
                        .to_string(),
                    output_path: PathBuf::from("zomboid.html"),
                },
            ],
        }
    }

    /// 请求超时时间
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
