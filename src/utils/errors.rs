// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 非200状态码
    #[error("Failed to load page {url}: status code {status}")]
    BadStatus {
        /// 请求的地址
        url: String,
        /// 观察到的状态码
        status: u16,
    },
    /// 请求失败
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// 提取错误类型
#[derive(Error, Debug)]
pub enum ExtractError {
    /// 必需的区块未匹配
    #[error("Required section not found: {0}")]
    MissingSection(String),
    /// 元素缺少必需属性
    #[error("Missing attribute `{attribute}` on `{selector}`")]
    MissingAttribute {
        /// 命中的选择器
        selector: String,
        /// 缺失的属性名
        attribute: String,
    },
}

/// 流水线错误类型
///
/// 任一错误都会中止当前任务，且多任务运行中不再继续后续任务
#[derive(Error, Debug)]
pub enum PipelineError {
    /// 抓取错误
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// 提取错误
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// 图库目录页地址无效
    #[error("Invalid gallery listing URL: {0}")]
    InvalidGalleryUrl(String),
    /// IO错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
