// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::extraction::StoreInfo;
use crate::utils::errors::ExtractError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static HEADER_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img.game_header_image_full").unwrap());
static APP_NAME: Lazy<Selector> = Lazy::new(|| Selector::parse("div.apphub_AppName").unwrap());
static GRID_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#appHeaderGridContainer").unwrap());
static GRID_LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("div.grid_label").unwrap());

/// 提取页面头部元数据
///
/// 所有字段均为必填，任一选择器未命中都会使提取失败
pub fn extract(document: &Html) -> Result<StoreInfo, ExtractError> {
    let header_image = document
        .select(&HEADER_IMAGE)
        .next()
        .ok_or_else(|| missing("img.game_header_image_full"))?
        .value()
        .attr("src")
        .ok_or_else(|| ExtractError::MissingAttribute {
            selector: "img.game_header_image_full".to_string(),
            attribute: "src".to_string(),
        })?
        .to_string();

    let name = document
        .select(&APP_NAME)
        .next()
        .ok_or_else(|| missing("div.apphub_AppName"))?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    let grid = document
        .select(&GRID_CONTAINER)
        .next()
        .ok_or_else(|| missing("div#appHeaderGridContainer"))?;

    Ok(StoreInfo {
        header_image,
        name,
        developers: grid_content_after_label(grid, "개발자")?,
        publishers: grid_content_after_label(grid, "배급사")?,
        release_date: grid_content_after_label(grid, "출시일")?,
    })
}

/// 从表格容器中取出指定标签后面的内容单元格
///
/// 标签与内容以兄弟节点成对出现，按标签文本定位后取其后第一个
/// grid_content元素的文本
fn grid_content_after_label(grid: ElementRef<'_>, label: &str) -> Result<String, ExtractError> {
    let label_cell = grid
        .select(&GRID_LABEL)
        .find(|cell| cell.text().collect::<String>().trim() == label)
        .ok_or_else(|| missing(&format!("div.grid_label({})", label)))?;

    let content = label_cell
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().classes().any(|c| c == "grid_content"))
        .ok_or_else(|| missing(&format!("div.grid_content({})", label)))?;

    Ok(content.text().collect::<String>().trim().to_string())
}

fn missing(selector: &str) -> ExtractError {
    ExtractError::MissingSection(selector.to_string())
}
