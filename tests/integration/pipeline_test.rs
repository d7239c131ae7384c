// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers;
use detailrs::config::settings::RenderProfile;
use detailrs::pipeline;
use detailrs::utils::errors::{FetchError, PipelineError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_compact_profile_generates_complete_page() {
    let server = MockServer::start().await;
    helpers::mount_product_page(&server, helpers::product_page_body()).await;
    helpers::mount_gallery_listing(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");
    let settings = helpers::test_settings(&server, RenderProfile::compact(), output.clone());
    let engine = helpers::test_engine();

    pipeline::run(&engine, &settings, &settings.jobs[0])
        .await
        .unwrap();

    let document = tokio::fs::read_to_string(&output).await.unwrap();
    assert!(document.starts_with("<!DOCTYPE html>"));

    // 图片去重后按字典序排列
    let banner = document
        .find("https://raw.githubusercontent.com/owner/repo/main/assets/banner.png")
        .unwrap();
    let shot1 = document
        .find("https://raw.githubusercontent.com/owner/repo/main/assets/shot1.jpg")
        .unwrap();
    let shot2 = document
        .find("https://raw.githubusercontent.com/owner/repo/main/assets/shot2.jpg")
        .unwrap();
    assert!(banner < shot1 && shot1 < shot2);
    assert_eq!(document.matches("shot1.jpg").count(), 1);
    assert!(!document.contains("notes.md"));

    // 精简变体：取第二条预告片、循环播放、不静音
    assert!(document.contains("<video controls autoplay loop style=\"width: 100%;\">"));
    assert!(document.contains("https://cdn.example.com/trailer2.mp4"));
    assert!(!document.contains("muted"));

    // 描述区块原样保留列表包装并套用居中样式
    assert!(document.contains("bb_ul"));
    assert!(document
        .contains("font-size: 12pt; text-align: center; width: 90%; margin: 20pt auto;"));

    // 系统需求：40%宽度容器与标签改写
    assert!(document.contains("width: 40%; margin: 20pt auto; text-align: justify;"));
    assert!(document.contains(">최소</span>"));
    assert!(!document.contains("최소:"));

    // 精简变体不渲染头部元数据
    assert!(!document.contains("개발자"));
}

#[tokio::test]
async fn test_full_profile_generates_store_info_and_os_headings() {
    let server = MockServer::start().await;
    helpers::mount_product_page(&server, helpers::full_product_page_body()).await;
    helpers::mount_gallery_listing(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");
    let settings = helpers::test_settings(&server, RenderProfile::full(), output.clone());
    let engine = helpers::test_engine();

    pipeline::run(&engine, &settings, &settings.jobs[0])
        .await
        .unwrap();

    let document = tokio::fs::read_to_string(&output).await.unwrap();

    // 完整变体：首条预告片、静音播放
    assert!(document.contains("<video controls autoplay muted style=\"width: 100%;\">"));
    assert!(document.contains("https://cdn.example.com/trailer1.mp4"));

    // 头部元数据区块
    assert!(document.contains("<strong>Palworld</strong>"));
    assert!(document.contains("<strong>개발자</strong>: Pocketpair"));
    assert!(document.contains("<strong>출시일</strong>: 2024년 1월 19일"));
    assert!(document.contains("https://cdn.example.com/header.jpg"));

    // 描述区块的列表包装被解包
    assert!(!document.contains("bb_ul"));
    assert!(document.contains("오픈 월드"));

    // 选项卡需求区块：每个OS一个样式化子标题，60%宽度容器
    assert!(document.contains("Windows 요구사항"));
    assert!(document.contains("macOS 요구사항"));
    assert!(document.contains(
        "width: 60%; margin: 20pt auto; text-align: center; font-size: 16pt; font-weight: bold;"
    ));
    assert!(document.contains("width: 60%; margin: 20pt auto; text-align: justify;"));
    assert!(document.contains(">최소</span>"));
    assert!(document.contains(">권장</span>"));
}

#[tokio::test]
async fn test_page_without_trailer_has_images_but_no_video() {
    let server = MockServer::start().await;
    helpers::mount_product_page(&server, helpers::product_page_body_without_trailers()).await;
    helpers::mount_gallery_listing(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");
    let settings = helpers::test_settings(&server, RenderProfile::compact(), output.clone());
    let engine = helpers::test_engine();

    pipeline::run(&engine, &settings, &settings.jobs[0])
        .await
        .unwrap();

    let document = tokio::fs::read_to_string(&output).await.unwrap();
    assert!(!document.contains("<video"));
    assert_eq!(document.matches("<img src=\"https://raw.githubusercontent.com").count(), 3);
}

#[tokio::test]
async fn test_failed_product_fetch_writes_no_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    helpers::mount_gallery_listing(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");
    let settings = helpers::test_settings(&server, RenderProfile::compact(), output.clone());
    let engine = helpers::test_engine();

    let error = pipeline::run(&engine, &settings, &settings.jobs[0])
        .await
        .unwrap_err();
    match error {
        PipelineError::Fetch(FetchError::BadStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("Unexpected error: {:?}", other),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_description_aborts_before_gallery_fetch() {
    let server = MockServer::start().await;
    helpers::mount_product_page(&server, "<html><body></body></html>".to_string()).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");
    let settings = helpers::test_settings(&server, RenderProfile::compact(), output.clone());
    let engine = helpers::test_engine();

    let error = pipeline::run(&engine, &settings, &settings.jobs[0])
        .await
        .unwrap_err();
    assert!(matches!(error, PipelineError::Extract(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_invalid_gallery_url_is_rejected() {
    let server = MockServer::start().await;
    helpers::mount_product_page(&server, helpers::product_page_body()).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");
    let mut settings = helpers::test_settings(&server, RenderProfile::compact(), output.clone());
    settings.gallery_url = format!("{}/listing", server.uri());
    let engine = helpers::test_engine();

    let error = pipeline::run(&engine, &settings, &settings.jobs[0])
        .await
        .unwrap_err();
    assert!(matches!(error, PipelineError::InvalidGalleryUrl(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_empty_gallery_still_produces_a_page() {
    let server = MockServer::start().await;
    helpers::mount_product_page(&server, helpers::product_page_body()).await;
    Mock::given(method("GET"))
        .and(path("/github.com/owner/repo/tree/main/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");
    let settings = helpers::test_settings(&server, RenderProfile::compact(), output.clone());
    let engine = helpers::test_engine();

    pipeline::run(&engine, &settings, &settings.jobs[0])
        .await
        .unwrap();

    let document = tokio::fs::read_to_string(&output).await.unwrap();
    assert!(!document.contains("raw.githubusercontent.com"));
    assert!(document.contains("시스템 요구 사항"));
}
