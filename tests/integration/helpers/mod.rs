// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use detailrs::config::settings::{ProductJob, RenderProfile, Settings};
use detailrs::engines::fetch_engine::FetchEngine;
use std::path::PathBuf;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 构造测试用抓取引擎
pub fn test_engine() -> FetchEngine {
    FetchEngine::new("koreana", Duration::from_secs(5)).unwrap()
}

/// 针对单个任务与模拟服务器构造配置
///
/// 图库目录页地址嵌入GitHub路径定界串，使解析逻辑可以
/// 直接作用于模拟服务器的地址
pub fn test_settings(server: &MockServer, profile: RenderProfile, output: PathBuf) -> Settings {
    Settings {
        locale: "koreana".to_string(),
        request_timeout_secs: 5,
        gallery_url: format!("{}/github.com/owner/repo/tree/main/assets", server.uri()),
        profile,
        jobs: vec![ProductJob {
            product_url: format!("{}/app/1", server.uri()),
            output_path: output,
        }],
    }
}

/// 精简变体足以通过提取的商店页面
pub fn product_page_body() -> String {
    format!("<html><body>{}{}{}</body></html>", DESCRIPTION, SYS_REQ, TRAILERS)
}

/// 无预告片区块的商店页面
pub fn product_page_body_without_trailers() -> String {
    format!("<html><body>{}{}</body></html>", DESCRIPTION, SYS_REQ)
}

/// 完整变体所需的商店页面（含头部元数据与选项卡需求区块)
pub fn full_product_page_body() -> String {
    format!(
        "<html><body>{}{}{}{}</body></html>",
        STORE_HEADER, DESCRIPTION, TABBED_SYS_REQ, TRAILERS
    )
}

const DESCRIPTION: &str = r#"
    <div id="game_area_description" class="game_area_description">
        <h2>게임 정보</h2>
        <ul class="bb_ul"><li>오픈 월드</li><li>생존</li></ul>
        <p>몬스터와 함께하는 모험</p>
    </div>"#;

const SYS_REQ: &str = r#"
    <div class="game_page_autocollapse sys_req">
        <div class="sysreq_contents">
            <div class="game_area_sys_req">
                <ul class="bb_ul"><li><strong>최소:</strong> 8GB RAM</li></ul>
            </div>
        </div>
    </div>"#;

const TABBED_SYS_REQ: &str = r#"
    <div class="game_page_autocollapse sys_req">
        <div class="sysreq_tabs">
            <div class="sysreq_tab" data-os="win">Windows</div>
            <div class="sysreq_tab" data-os="mac">macOS</div>
        </div>
        <div class="sysreq_content" data-os="win">
            <div class="game_area_sys_req">
                <ul class="bb_ul"><li><strong>최소:</strong> 8GB RAM</li></ul>
            </div>
        </div>
        <div class="sysreq_content" data-os="mac">
            <div class="game_area_sys_req">
                <ul class="bb_ul"><li><strong>권장:</strong> 16GB RAM</li></ul>
            </div>
        </div>
    </div>"#;

const TRAILERS: &str = r#"
    <div id="highlight_player_area">
        <div class="highlight_player_item highlight_movie"
             data-mp4-source="https://cdn.example.com/trailer1.mp4"></div>
        <div class="highlight_player_item highlight_movie"
             data-mp4-source="https://cdn.example.com/trailer2.mp4"></div>
    </div>"#;

const STORE_HEADER: &str = r#"
    <img class="game_header_image_full" src="https://cdn.example.com/header.jpg">
    <div class="apphub_AppName">Palworld</div>
    <div id="appHeaderGridContainer">
        <div class="grid_label">개발자</div>
        <div class="grid_content">Pocketpair</div>
        <div class="grid_label">배급사</div>
        <div class="grid_content">Pocketpair, Inc.</div>
        <div class="grid_label">출시일</div>
        <div class="grid_content">2024년 1월 19일</div>
    </div>"#;

const GALLERY_LISTING: &str = r#"
    <html><body>
        <a href="/owner/repo/blob/main/assets/banner.png">banner.png</a>
        <a href="/owner/repo/blob/main/assets/shot2.jpg">shot2.jpg</a>
        <a href="/owner/repo/blob/main/assets/shot1.jpg">shot1.jpg</a>
        <a href="/owner/repo/blob/main/assets/shot1.jpg">shot1.jpg</a>
        <a href="/owner/repo/blob/main/assets/notes.md">notes.md</a>
    </body></html>"#;

/// 挂载商店页面模拟响应
pub async fn mount_product_page(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/app/1"))
        .and(query_param("l", "koreana"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// 挂载图库目录页模拟响应
pub async fn mount_gallery_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/github.com/owner/repo/tree/main/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(GALLERY_LISTING))
        .mount(server)
        .await;
}
