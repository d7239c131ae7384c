// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod fragments;
pub mod gallery;
pub mod store_info;

/// 从产品页面提取出的片段集合
///
/// 片段以序列化的标记字符串承载，样式化之前保持未解析状态
#[derive(Debug, Clone)]
pub struct ProductPage {
    /// 描述区块标记
    pub description_html: String,
    /// 系统需求区块标记（含生成的标题）
    pub sys_req_html: String,
    /// 预告片视频地址；页面无匹配条目时为空
    pub trailer_url: Option<String>,
    /// 页面头部元数据；仅完整变体提取
    pub store_info: Option<StoreInfo>,
}

/// 页面头部元数据记录
///
/// 所有字段均为必填，任一选择器未命中都会使整个提取失败
#[derive(Debug, Clone)]
pub struct StoreInfo {
    /// 头部图片地址
    pub header_image: String,
    /// 产品名称
    pub name: String,
    /// 开发商
    pub developers: String,
    /// 发行商
    pub publishers: String,
    /// 출시일（发售日期）
    pub release_date: String,
}
