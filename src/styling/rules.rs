// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::RenderProfile;
use scraper::node::Element;
use std::borrow::Cow;

/// 二级标题样式
pub const H2_STYLE: &str =
    "font-size: 20pt; font-weight: bold; text-align: center; width: 90%; margin: 10pt auto;";

/// 下划线元素样式
pub const U_STYLE: &str = "font-size: 15pt; text-align: center; width: 90%; margin: 10pt auto;";

/// 图片样式
pub const IMG_STYLE: &str = "width: 90%; height: auto; margin: 20px auto;";

/// 描述区块默认样式
pub const DESCRIPTION_FALLBACK_STYLE: &str =
    "font-size: 12pt; text-align: center; width: 90%; margin: 20pt auto;";

/// 系统需求区块默认样式
pub const SYS_REQ_FALLBACK_STYLE: &str = "font-size: 12pt;";

/// 最低/推荐配置标签元素样式
pub const LABEL_STYLE: &str =
    "font-size: 14pt; font-weight: bold; display: block; margin-top: 15px; margin-bottom: -15px;";

/// 最低/推荐配置标签标记串
pub const LABEL_MARKERS: &[&str] = &["최소:", "권장:"];

/// 单条样式规则
///
/// 按标签名与class匹配元素；排除列表仅用于兜底规则，
/// 使特定标签不落入兜底样式
#[derive(Debug, Clone)]
pub struct StyleRule {
    /// 匹配的标签名；`None`匹配任意标签
    pub tag: Option<&'static str>,
    /// 必须携带的class；`None`不限
    pub class: Option<&'static str>,
    /// 排除的标签名
    pub exclude_tags: &'static [&'static str],
    /// 应用的内联样式声明
    pub style: Cow<'static, str>,
}

impl StyleRule {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = self.tag {
            if element.name() != tag {
                return false;
            }
        }
        if let Some(class) = self.class {
            if !element.classes().any(|c| c == class) {
                return false;
            }
        }
        !self.exclude_tags.contains(&element.name())
    }
}

/// 样式规则表
///
/// 规则按声明顺序求值，首条命中者生效，后续规则不再覆盖
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<StyleRule>,
}

impl RuleTable {
    /// 描述区块的规则表
    pub fn description() -> Self {
        Self {
            rules: vec![
                fixed_tag("h2", H2_STYLE),
                fixed_tag("u", U_STYLE),
                fixed_tag("img", IMG_STYLE),
                StyleRule {
                    tag: None,
                    class: None,
                    exclude_tags: &["h2", "u", "img"],
                    style: Cow::Borrowed(DESCRIPTION_FALLBACK_STYLE),
                },
            ],
        }
    }

    /// 系统需求区块的规则表
    ///
    /// 容器宽度与OS子标题样式随渲染配置变化
    pub fn sys_req(profile: &RenderProfile) -> Self {
        let width = profile.sys_req_width_pct;
        let mut rules = vec![
            fixed_tag("h2", H2_STYLE),
            fixed_tag("u", U_STYLE),
            fixed_tag("img", IMG_STYLE),
            StyleRule {
                tag: Some("div"),
                class: Some("game_area_sys_req"),
                exclude_tags: &[],
                style: Cow::Owned(format!(
                    "width: {}%; margin: 20pt auto; text-align: justify;",
                    width
                )),
            },
        ];
        if profile.style_os_headings {
            rules.push(StyleRule {
                tag: Some("h3"),
                class: None,
                exclude_tags: &[],
                style: Cow::Owned(format!(
                    "width: {}%; margin: 20pt auto; text-align: center; font-size: 16pt; font-weight: bold;",
                    width
                )),
            });
        }
        rules.push(StyleRule {
            tag: None,
            class: None,
            exclude_tags: &["h2", "u", "img", "div"],
            style: Cow::Borrowed(SYS_REQ_FALLBACK_STYLE),
        });
        Self { rules }
    }

    /// 为元素求取样式声明
    pub fn style_for(&self, element: &Element) -> Option<Cow<'static, str>> {
        self.rules
            .iter()
            .find(|rule| rule.matches(element))
            .map(|rule| rule.style.clone())
    }
}

fn fixed_tag(tag: &'static str, style: &'static str) -> StyleRule {
    StyleRule {
        tag: Some(tag),
        class: None,
        exclude_tags: &[],
        style: Cow::Borrowed(style),
    }
}
