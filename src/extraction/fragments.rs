// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{RenderProfile, TrailerPick};
use crate::extraction::{store_info, ProductPage};
use crate::utils::errors::ExtractError;
use crate::utils::markup::{self, Identity, MarkupVisitor};
use once_cell::sync::Lazy;
use scraper::node::Element;
use scraper::{Html, Selector};
use tracing::debug;

static DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#game_area_description").unwrap());
static SYS_REQ_SECTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.game_page_autocollapse.sys_req").unwrap());
static SYS_REQ_TABS: Lazy<Selector> = Lazy::new(|| Selector::parse("div.sysreq_tabs").unwrap());
static SYS_REQ_TAB: Lazy<Selector> = Lazy::new(|| Selector::parse("div.sysreq_tab").unwrap());
static SYS_REQ_CONTENT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.sysreq_content").unwrap());
static SYS_REQ_CONTENTS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.sysreq_contents").unwrap());
static HIGHLIGHT_AREA: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#highlight_player_area").unwrap());
static HIGHLIGHT_MOVIE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.highlight_player_item.highlight_movie").unwrap());

/// 列表解包访问器
///
/// 序列化时去掉bb_ul列表包装标签，保留其子节点原序
struct ListUnwrapper;

impl MarkupVisitor for ListUnwrapper {
    fn unwrap_element(&self, element: &Element) -> bool {
        element.name() == "ul" && element.classes().any(|c| c == "bb_ul")
    }
}

/// 从产品页面HTML中提取全部片段
///
/// 源文档只读，提取不修改解析树；每次调用构造全新的中间结构
pub fn extract(html: &str, profile: &RenderProfile) -> Result<ProductPage, ExtractError> {
    let document = Html::parse_document(html);

    let description_html = extract_description(&document, profile.unwrap_description_lists)?;
    let sys_req_html = extract_sys_req(&document)?;
    let trailer_url = extract_trailer(&document, profile.trailer);
    let store_info = if profile.include_store_info {
        Some(store_info::extract(&document)?)
    } else {
        None
    };

    Ok(ProductPage {
        description_html,
        sys_req_html,
        trailer_url,
        store_info,
    })
}

/// 提取描述区块
fn extract_description(document: &Html, unwrap_lists: bool) -> Result<String, ExtractError> {
    let section = document
        .select(&DESCRIPTION)
        .next()
        .ok_or_else(|| missing("div#game_area_description"))?;
    debug!("Located description section");
    Ok(if unwrap_lists {
        markup::serialize_element(section, &ListUnwrapper)
    } else {
        markup::serialize_element(section, &Identity)
    })
}

/// 提取系统需求区块
///
/// 存在sysreq_tabs子容器时按OS选项卡逐个拼接，否则取单一内容面板
fn extract_sys_req(document: &Html) -> Result<String, ExtractError> {
    let section = document
        .select(&SYS_REQ_SECTION)
        .next()
        .ok_or_else(|| missing("div.game_page_autocollapse.sys_req"))?;

    let mut out = String::from("<h2>시스템 요구 사항</h2>");

    if section.select(&SYS_REQ_TABS).next().is_some() {
        for tab in section.select(&SYS_REQ_TAB) {
            let os = tab
                .value()
                .attr("data-os")
                .ok_or_else(|| ExtractError::MissingAttribute {
                    selector: "div.sysreq_tab".to_string(),
                    attribute: "data-os".to_string(),
                })?;
            let panel = section
                .select(&SYS_REQ_CONTENT)
                .find(|content| content.value().attr("data-os") == Some(os))
                .ok_or_else(|| missing(&format!("div.sysreq_content[data-os={}]", os)))?;
            debug!("Located requirements panel for {}", os);
            let label = tab.text().collect::<String>();
            out.push_str("<h3>");
            out.push_str(&html_escape::encode_text(label.trim()));
            out.push_str(" 요구사항</h3>");
            out.push_str(&markup::serialize_element(panel, &ListUnwrapper));
        }
    } else {
        let panel = section
            .select(&SYS_REQ_CONTENTS)
            .next()
            .ok_or_else(|| missing("div.sysreq_contents"))?;
        out.push_str(&markup::serialize_element(panel, &ListUnwrapper));
    }

    Ok(out)
}

/// 按序号选取预告片视频地址
///
/// 区块、序号条目或视频源属性缺失时视为无预告片，不报错
fn extract_trailer(document: &Html, pick: TrailerPick) -> Option<String> {
    let area = document.select(&HIGHLIGHT_AREA).next()?;
    let movie = area.select(&HIGHLIGHT_MOVIE).nth(pick.ordinal())?;
    movie.value().attr("data-mp4-source").map(str::to_string)
}

fn missing(selector: &str) -> ExtractError {
    ExtractError::MissingSection(selector.to_string())
}
