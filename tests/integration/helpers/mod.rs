// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum_test::TestServer;
use profiledash::application::usecases::oauth_login::OAuthFlowController;
use profiledash::application::usecases::scrape_profile::ScrapeOrchestrator;
use profiledash::config::settings::Settings;
use profiledash::infrastructure::oauth::http_provider::HttpOAuthProvider;
use profiledash::infrastructure::scraper::apify::ApifyScrapeService;
use profiledash::infrastructure::session::cookie::SessionCookieCodec;
use profiledash::infrastructure::session::memory_store::MemorySessionStore;
use profiledash::presentation::routes;
use wiremock::MockServer;

pub const SCRAPE_PATH: &str = "/v2/acts/apify~instagram-scraper/run-sync-get-dataset-items";
pub const COOKIE_NAME: &str = "profiledash_session";

/// 指向模拟上游的配置
pub fn settings_for(upstream: &MockServer) -> Settings {
    let uri = upstream.uri();
    Settings::builder()
        .unwrap()
        .set_override("scraper.base_url", uri.clone())
        .unwrap()
        .set_override("scraper.api_token", "test-token")
        .unwrap()
        .set_override("scraper.timeout_secs", 5)
        .unwrap()
        .set_override("oauth.client_id", "client-1")
        .unwrap()
        .set_override("oauth.client_secret", "secret-1")
        .unwrap()
        .set_override("oauth.authorize_url", format!("{}/oauth/authorize", uri))
        .unwrap()
        .set_override("oauth.token_url", format!("{}/oauth/access_token", uri))
        .unwrap()
        .set_override("oauth.profile_url", format!("{}/me", uri))
        .unwrap()
        .set_override("session.secret", "integration-secret")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

pub fn create_scrape_app(upstream: &MockServer) -> TestServer {
    create_scrape_app_with(settings_for(upstream))
}

pub fn create_scrape_app_with(settings: Settings) -> TestServer {
    let service = Arc::new(ApifyScrapeService::new(&settings.scraper).unwrap());
    let orchestrator = Arc::new(ScrapeOrchestrator::new(service, &settings.scraper));

    TestServer::new(routes::scrape_routes(orchestrator)).unwrap()
}

pub struct OAuthTestApp {
    pub server: TestServer,
    pub sessions: Arc<MemorySessionStore>,
    pub codec: Arc<SessionCookieCodec>,
}

pub fn create_oauth_app(provider: &MockServer) -> OAuthTestApp {
    create_oauth_app_with(settings_for(provider))
}

pub fn create_oauth_app_with(settings: Settings) -> OAuthTestApp {
    let sessions = Arc::new(MemorySessionStore::new(chrono::Duration::seconds(
        settings.session.ttl_secs,
    )));
    let codec = Arc::new(SessionCookieCodec::new(&settings.session));
    let controller = Arc::new(OAuthFlowController::new(
        Arc::new(HttpOAuthProvider::new(settings.oauth.clone())),
        sessions.clone(),
        settings.oauth.clone(),
    ));

    let server = TestServer::new(routes::oauth_routes(controller, codec.clone())).unwrap();

    OAuthTestApp {
        server,
        sessions,
        codec,
    }
}
