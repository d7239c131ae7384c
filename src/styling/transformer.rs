// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::RenderProfile;
use crate::styling::rules::{RuleTable, LABEL_MARKERS, LABEL_STYLE};
use crate::utils::markup::{self, MarkupVisitor};
use scraper::node::Element;
use scraper::Html;
use std::borrow::Cow;

/// 样式转换器
///
/// 以规则表驱动的访问器改写两个片段树。两个片段各自独立解析，
/// 同一输入标记与规则表总产生相同输出
pub struct StyleTransformer {
    description_rules: RuleTable,
    sys_req_rules: RuleTable,
}

impl StyleTransformer {
    /// 按渲染配置构建转换器
    pub fn new(profile: &RenderProfile) -> Self {
        Self {
            description_rules: RuleTable::description(),
            sys_req_rules: RuleTable::sys_req(profile),
        }
    }

    /// 为描述片段套用样式
    pub fn style_description(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        markup::serialize_fragment(
            &fragment,
            &RuleVisitor {
                table: &self.description_rules,
                rewrite_labels: false,
            },
        )
    }

    /// 为系统需求片段套用样式并改写配置标签文本
    pub fn style_sys_req(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        markup::serialize_fragment(
            &fragment,
            &RuleVisitor {
                table: &self.sys_req_rules,
                rewrite_labels: true,
            },
        )
    }
}

struct RuleVisitor<'a> {
    table: &'a RuleTable,
    rewrite_labels: bool,
}

impl MarkupVisitor for RuleVisitor<'_> {
    fn style_for(&self, element: &Element) -> Option<Cow<'static, str>> {
        self.table.style_for(element)
    }

    fn rewrite_text(&self, text: &str) -> Option<String> {
        if self.rewrite_labels {
            rewrite_label(text)
        } else {
            None
        }
    }
}

/// 改写含最低/推荐配置标记的文本节点
///
/// 标记冒号之前的文本去除首尾空白后放入加粗标签，
/// 冒号之后的内容作为后续文本原位保留
fn rewrite_label(text: &str) -> Option<String> {
    let (index, marker) = LABEL_MARKERS
        .iter()
        .filter_map(|marker| text.find(marker).map(|index| (index, *marker)))
        .min_by_key(|(index, _)| *index)?;
    // 标记串以单字节冒号结尾
    let colon = index + marker.len() - 1;
    let label = text[..colon].trim();
    let remainder = &text[colon + 1..];

    let mut out = String::new();
    out.push_str("<span style=\"");
    out.push_str(LABEL_STYLE);
    out.push_str("\">");
    out.push_str(&html_escape::encode_text(label));
    out.push_str("</span>");
    out.push_str(&html_escape::encode_text(remainder));
    Some(out)
}
