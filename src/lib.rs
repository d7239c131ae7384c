// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 组装模块
///
/// 将样式化片段、图片列表与元数据组装为最终HTML文档并写出
pub mod compose;

/// 配置模块
///
/// 处理产品任务清单与渲染配置
pub mod config;

/// 引擎模块
///
/// 实现商店页面与图库目录页的抓取引擎
pub mod engines;

/// 提取模块
///
/// 从商店页面HTML中提取片段、元数据与图片地址列表
pub mod extraction;

/// 流水线模块
///
/// 按任务串联抓取、提取、样式化与组装
pub mod pipeline;

/// 样式模块
///
/// 基于声明式规则表为片段附加内联样式
pub mod styling;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
