// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

use crate::application::usecases::oauth_login::OAuthFlowController;
use crate::application::usecases::scrape_profile::ScrapeOrchestrator;
use crate::infrastructure::session::cookie::SessionCookieCodec;
use crate::presentation::handlers::{oauth_handler, scrape_handler};

fn public_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}

/// 创建抓取服务路由
///
/// # 参数
///
/// * `orchestrator` - 抓取编排器
///
/// # 返回值
///
/// 返回配置好的路由
pub fn scrape_routes(orchestrator: Arc<ScrapeOrchestrator>) -> Router {
    let dashboard_routes = Router::new()
        .route("/", get(scrape_handler::home))
        .route("/scrape", post(scrape_handler::scrape))
        .layer(Extension(orchestrator));

    Router::new()
        .merge(public_routes())
        .merge(dashboard_routes)
        .layer(TraceLayer::new_for_http())
}

/// 创建 OAuth 服务路由
///
/// # 参数
///
/// * `controller` - OAuth 流程控制器
/// * `codec` - 会话 Cookie 编解码器
///
/// # 返回值
///
/// 返回配置好的路由
pub fn oauth_routes(
    controller: Arc<OAuthFlowController>,
    codec: Arc<SessionCookieCodec>,
) -> Router {
    let dashboard_routes = Router::new()
        .route("/", get(oauth_handler::home))
        .route("/dashboard", get(oauth_handler::dashboard))
        .route("/login", get(oauth_handler::login))
        .route("/auth", get(oauth_handler::auth_callback))
        .layer(Extension(controller))
        .layer(Extension(codec));

    Router::new()
        .merge(public_routes())
        .merge(dashboard_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
