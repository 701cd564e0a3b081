// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use profiledash::application::usecases::scrape_profile::ScrapeOrchestrator;
use profiledash::config::settings::Settings;
use profiledash::infrastructure::scraper::apify::ApifyScrapeService;
use profiledash::presentation::routes;
use profiledash::utils::telemetry;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 抓取仪表盘服务入口
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting scrape dashboard...");

    // 2. Load configuration
    let settings = Settings::new()?;
    if settings.insecure_defaults().contains(&"scraper.api_token") {
        warn!("scraper.api_token still uses its placeholder default; upstream will reject calls");
    }
    info!("Configuration loaded");

    // 3. Initialize components
    let service = Arc::new(ApifyScrapeService::new(&settings.scraper)?);
    let orchestrator = Arc::new(ScrapeOrchestrator::new(service, &settings.scraper));

    // 4. Start HTTP server
    let app = routes::scrape_routes(orchestrator);

    let addr = format!("{}:{}", settings.server.host, settings.server.scrape_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
