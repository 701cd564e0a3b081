// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use profiledash::application::usecases::oauth_login::OAuthFlowController;
use profiledash::config::settings::Settings;
use profiledash::infrastructure::oauth::http_provider::HttpOAuthProvider;
use profiledash::infrastructure::session::cookie::SessionCookieCodec;
use profiledash::infrastructure::session::memory_store::MemorySessionStore;
use profiledash::presentation::routes;
use profiledash::utils::telemetry;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// OAuth 仪表盘服务入口
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting OAuth dashboard...");

    // 2. Load configuration
    let settings = Settings::new()?;
    for key in settings
        .insecure_defaults()
        .into_iter()
        .filter(|key| !key.starts_with("scraper."))
    {
        warn!("{} still uses its insecure default; override it before deploying", key);
    }
    info!("Configuration loaded");

    // 3. Initialize session storage
    let sessions = Arc::new(MemorySessionStore::new(chrono::Duration::seconds(
        settings.session.ttl_secs,
    )));
    let codec = Arc::new(SessionCookieCodec::new(&settings.session));

    // 4. Initialize OAuth flow
    let provider = Arc::new(HttpOAuthProvider::new(settings.oauth.clone()));
    let controller = Arc::new(OAuthFlowController::new(
        provider,
        sessions,
        settings.oauth.clone(),
    ));

    // 5. Start HTTP server
    let app = routes::oauth_routes(controller, codec);

    let addr = format!("{}:{}", settings.server.host, settings.server.oauth_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
