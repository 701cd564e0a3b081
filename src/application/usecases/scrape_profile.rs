// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::info;

use crate::config::settings::ScraperSettings;
use crate::domain::models::scrape::{ScrapeRequest, ScrapeResult};
use crate::domain::services::scrape_service::{ScrapeError, ScrapeService};

// === Section: Use Case Definition ===

/// 抓取编排器
///
/// 为提交的主页 URL 组装固定的结果类型和数量上限，然后交给抓取服务
pub struct ScrapeOrchestrator {
    service: Arc<dyn ScrapeService>,
    results_type: String,
    results_limit: u32,
}

// === Section: Implementation ===

impl ScrapeOrchestrator {
    pub fn new(service: Arc<dyn ScrapeService>, settings: &ScraperSettings) -> Self {
        Self {
            service,
            results_type: settings.results_type.clone(),
            results_limit: settings.results_limit,
        }
    }

    /// 使用默认数量上限抓取
    pub async fn scrape(&self, url: &str) -> Result<ScrapeResult, ScrapeError> {
        self.scrape_with_limit(url, self.results_limit).await
    }

    pub async fn scrape_with_limit(
        &self,
        url: &str,
        results_limit: u32,
    ) -> Result<ScrapeResult, ScrapeError> {
        let request = ScrapeRequest::new(url, self.results_type.as_str(), results_limit);
        info!("Scraping {} (limit {})", request.url, request.results_limit);
        self.service.scrape(&request).await
    }
}
