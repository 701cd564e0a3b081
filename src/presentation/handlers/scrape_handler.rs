// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::extract::{Extension, Form};
use axum::response::Html;
use serde::Deserialize;

use crate::application::usecases::scrape_profile::ScrapeOrchestrator;
use crate::presentation::errors::AppError;
use crate::presentation::views::dashboard::ScrapeDashboard;

/// 抓取表单
#[derive(Debug, Deserialize)]
pub struct ScrapeForm {
    pub instagram_url: String,
}

/// 渲染空仪表盘
pub async fn home() -> Html<String> {
    ScrapeDashboard::empty().render()
}

/// 提交主页 URL，同步抓取后渲染结果
///
/// 上游失败时整个请求以 500 结束，不会返回部分渲染的页面
pub async fn scrape(
    Extension(orchestrator): Extension<Arc<ScrapeOrchestrator>>,
    Form(form): Form<ScrapeForm>,
) -> Result<Html<String>, AppError> {
    let scraped_data = orchestrator.scrape(&form.instagram_url).await?;
    Ok(ScrapeDashboard::with_data(&scraped_data).render())
}
