// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::RenderProfile;
use crate::extraction::StoreInfo;
use crate::utils::errors::PipelineError;
use std::path::Path;
use tracing::info;

/// 组成最终文档的全部素材
#[derive(Debug, Clone)]
pub struct PageParts {
    /// 预告片视频地址
    pub trailer_url: Option<String>,
    /// 样式化后的描述标记
    pub description_html: String,
    /// 样式化后的系统需求标记
    pub sys_req_html: String,
    /// 图库图片地址（已排序）
    pub image_urls: Vec<String>,
    /// 页面头部元数据
    pub store_info: Option<StoreInfo>,
}

/// 文档头部，含固定配色的嵌入式样式表
const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Game Detail Page</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 20px;
            background-color: #1b2838;
            color: #c6d4df;
            text-align: center;
            font-size: 12pt;
        }
        .content {
            width: 85%;
            margin: 0 auto;
        }
        img {
            max-width: 90%;
            height: auto;
            display: block;
            margin: 20px auto;
        }
        h2 {
            color: #66c0f4;
            font-size: 20pt;
            font-weight: bold;
            text-align: center;
            width: 90%;
            margin: 10pt auto;
        }
        u {
            text-decoration: underline;
            font-size: 15pt;
            display: block;
            text-align: center;
            width: 90%;
            margin: 10pt auto;
        }
    </style>
</head>
<body>
"#;

/// 组装完整的静态HTML文档
///
/// 区块顺序固定：图片、头部元数据、预告片、描述、系统需求。
/// 两个样式化片段原样嵌入，其余属性与文本插值均经转义
pub fn compose_document(parts: &PageParts, profile: &RenderProfile) -> String {
    let mut out = String::from(DOCUMENT_HEAD);
    out.push_str(&render_images(&parts.image_urls));
    if let Some(info) = &parts.store_info {
        out.push_str(&render_store_info(info));
    }
    if let Some(url) = &parts.trailer_url {
        out.push_str(&render_trailer(url, profile));
    }
    out.push_str("<div class=\"content\">\n");
    out.push_str(&parts.description_html);
    out.push_str("\n</div>\n<div class=\"content\">\n");
    out.push_str(&parts.sys_req_html);
    out.push_str("\n</div>\n</body>\n</html>\n");
    out
}

/// 将文档写入目标路径
///
/// 直接覆盖既有文件，不做原子写入或备份
pub async fn write_page(path: &Path, document: &str) -> Result<(), PipelineError> {
    tokio::fs::write(path, document).await?;
    info!("Wrote detail page: {}", path.display());
    Ok(())
}

fn render_images(urls: &[String]) -> String {
    let mut out = String::new();
    for url in urls {
        out.push_str(&format!(
            "<div style=\"text-align: center;\"><img src=\"{}\" style=\"width: 90%;\"></div>\n",
            html_escape::encode_double_quoted_attribute(url)
        ));
    }
    out
}

fn render_trailer(url: &str, profile: &RenderProfile) -> String {
    let mut attrs = String::from("controls autoplay");
    if profile.video_muted {
        attrs.push_str(" muted");
    }
    if profile.video_loop {
        attrs.push_str(" loop");
    }
    format!(
        concat!(
            "<div style=\"width: 90%; margin: 20px auto; text-align: center;\">\n",
            "    <video {} style=\"width: 100%;\">\n",
            "        <source src=\"{}\" type=\"video/mp4\">\n",
            "        Your browser does not support the video tag.\n",
            "    </video>\n",
            "</div>\n"
        ),
        attrs,
        html_escape::encode_double_quoted_attribute(url)
    )
}

fn render_store_info(info: &StoreInfo) -> String {
    format!(
        concat!(
            "<div style=\"text-align: center; margin: 20px auto;\">\n",
            "    <img src=\"{}\" style=\"width: 90%; margin: 0;\"><br>\n",
            "    <h2 style=\"font-size: 30pt;\"><br><strong>{}</strong></h2><br>\n",
            "    <p style=\"font-size: 14pt;\"><strong>개발자</strong>: {}</p><br>\n",
            "    <p style=\"font-size: 14pt;\"><strong>배급사</strong>: {}</p><br>\n",
            "    <p style=\"font-size: 14pt;\"><strong>출시일</strong>: {}</p><br>\n",
            "</div>\n"
        ),
        html_escape::encode_double_quoted_attribute(&info.header_image),
        html_escape::encode_text(&info.name),
        html_escape::encode_text(&info.developers),
        html_escape::encode_text(&info.publishers),
        html_escape::encode_text(&info.release_date)
    )
}
