// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, error};
use url::Url;

use crate::config::settings::ScraperSettings;
use crate::domain::models::scrape::{ScrapeRequest, ScrapeResult};
use crate::domain::services::scrape_service::{ScrapeError, ScrapeService};

/// Apify 同步运行抓取服务
///
/// 调用 `run-sync-get-dataset-items` 接口，阻塞直到 actor 运行结束并返回数据集
pub struct ApifyScrapeService {
    client: reqwest::Client,
    endpoint: Url,
}

impl ApifyScrapeService {
    /// 创建新的抓取服务
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取服务配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ApifyScrapeService)` - 服务实例
    /// * `Err(anyhow::Error)` - 端点地址无效或 HTTP 客户端创建失败
    pub fn new(settings: &ScraperSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: Self::endpoint(settings)?,
        })
    }

    fn endpoint(settings: &ScraperSettings) -> Result<Url, url::ParseError> {
        let base = settings.base_url.trim_end_matches('/');
        let mut endpoint = Url::parse(&format!(
            "{}/v2/acts/{}/run-sync-get-dataset-items",
            base, settings.actor_id
        ))?;
        endpoint
            .query_pairs_mut()
            .append_pair("token", &settings.api_token);
        Ok(endpoint)
    }
}

#[async_trait]
impl ScrapeService for ApifyScrapeService {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ScrapeError> {
        let start = Instant::now();
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            // The endpoint URL carries the API token.
            .map_err(|e| ScrapeError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Upstream scraper failed for {}: status {}, body: {}",
                request.url, status, body
            );
            return Err(ScrapeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::Transport(e.without_url()))?;
        let records: ScrapeResult =
            serde_json::from_slice(&bytes).map_err(|e| ScrapeError::Decode(e.to_string()))?;

        debug!(
            "Scraped {} records for {} in {}ms",
            records.len(),
            request.url,
            start.elapsed().as_millis()
        );
        Ok(records)
    }
}

#[cfg(test)]
#[path = "apify_test.rs"]
mod tests;
