// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{create_scrape_app, create_scrape_app_with, settings_for, SCRAPE_PATH};

const PROFILE_URL: &str = "https://www.instagram.com/rustlang/";

/// 初次加载只显示空状态
#[tokio::test]
async fn test_home_renders_empty_dashboard() {
    let upstream = MockServer::start().await;
    let server = create_scrape_app(&upstream);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.text();
    assert!(page.contains("class=\"empty\""));
    assert!(!page.contains("<article class=\"record\">"));
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

/// 上游返回 N 条记录时，页面按相同顺序渲染 N 条记录
#[tokio::test]
async fn test_scrape_renders_every_record_in_order() {
    let upstream = MockServer::start().await;
    let records: Vec<Value> = (1..=5)
        .map(|i| json!({ "shortCode": format!("post-{:02}", i), "likesCount": i * 10 }))
        .collect();
    Mock::given(method("POST"))
        .and(path(SCRAPE_PATH))
        .and(query_param("token", "test-token"))
        .and(body_json(json!({
            "directUrls": [PROFILE_URL],
            "resultsType": "posts",
            "resultsLimit": 10,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&records))
        .expect(1)
        .mount(&upstream)
        .await;
    let server = create_scrape_app(&upstream);

    let response = server
        .post("/scrape")
        .form(&[("instagram_url", PROFILE_URL)])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.text();
    assert_eq!(page.matches("<article class=\"record\">").count(), 5);
    let positions: Vec<usize> = (1..=5)
        .map(|i| page.find(&format!("post-{:02}", i)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

/// 上游失败时返回 500，不渲染仪表盘
#[tokio::test]
async fn test_upstream_failure_is_server_error_without_dashboard() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCRAPE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "type": "invalid-input", "message": "Field input.directUrls is required" }
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let server = create_scrape_app(&upstream);

    let response = server
        .post("/scrape")
        .form(&[("instagram_url", PROFILE_URL)])
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to run scraper synchronously");
    assert!(!response.text().contains("<article"));
    assert!(!response.text().contains("test-token"));
}

/// 上游不可达时同样以 500 结束
#[tokio::test]
async fn test_unreachable_upstream_is_server_error() {
    let upstream = MockServer::start().await;
    let mut settings = settings_for(&upstream);
    // Nothing listens on port 1.
    settings.scraper.base_url = "http://127.0.0.1:1".to_string();
    let server = create_scrape_app_with(settings);

    let response = server
        .post("/scrape")
        .form(&[("instagram_url", PROFILE_URL)])
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert!(body.contains("error"));
    assert!(!body.contains("test-token"));
}

/// 缺少表单字段时由提取器拒绝，不调用上游
#[tokio::test]
async fn test_missing_form_field_is_rejected() {
    let upstream = MockServer::start().await;
    let server = create_scrape_app(&upstream);

    let response = server
        .post("/scrape")
        .form(&[("profile", PROFILE_URL)])
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_health_and_version() {
    let upstream = MockServer::start().await;
    let server = create_scrape_app(&upstream);

    assert_eq!(server.get("/health").await.text(), "OK");
    assert_eq!(
        server.get("/version").await.text(),
        env!("CARGO_PKG_VERSION")
    );
}
