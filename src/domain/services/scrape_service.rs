// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::scrape::{ScrapeRequest, ScrapeResult};

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 上游返回非成功状态码
    #[error("Upstream scraper returned status {status}")]
    Upstream { status: u16, body: String },
    /// 网络请求失败（连接失败、超时等）
    #[error("Request to upstream scraper failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// 响应体无法解析
    #[error("Upstream scraper returned an unreadable body: {0}")]
    Decode(String),
}

/// 抓取服务特质
///
/// 每次调用恰好发起一次上游请求，不重试、不缓存
#[async_trait]
pub trait ScrapeService: Send + Sync {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ScrapeError>;
}
