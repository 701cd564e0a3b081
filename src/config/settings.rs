// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_SCRAPER_TOKEN: &str = "your_apify_token";
pub const DEFAULT_CLIENT_ID: &str = "your_client_id";
pub const DEFAULT_CLIENT_SECRET: &str = "your_client_secret";
pub const DEFAULT_SESSION_SECRET: &str = "change-me-session-secret";

/// 应用程序配置设置
///
/// 包含服务器、抓取服务、OAuth 提供方和会话等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取服务配置
    pub scraper: ScraperSettings,
    /// OAuth 配置
    pub oauth: OAuthSettings,
    /// 会话配置
    pub session: SessionSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 抓取仪表盘监听端口
    pub scrape_port: u16,
    /// OAuth 仪表盘监听端口
    pub oauth_port: u16,
}

/// 抓取服务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 抓取 API 根地址
    pub base_url: String,
    /// Actor 标识
    pub actor_id: String,
    /// API 令牌，通过 URL 查询参数传递
    pub api_token: String,
    /// 结果类型标签
    pub results_type: String,
    /// 默认结果数量上限
    pub results_limit: u32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// OAuth 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub authorize_url: String,
    pub token_url: String,
    pub profile_url: String,
    /// 资料接口请求的字段
    pub profile_fields: String,
}

/// 会话配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Cookie 签名密钥
    pub secret: String,
    pub cookie_name: String,
    /// 会话有效期（秒）
    pub ttl_secs: i64,
    /// 是否为 Cookie 添加 Secure 属性
    pub secure_cookie: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PROFILEDASH").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅包含内置默认值的配置构建器
    ///
    /// 测试可以在此基础上追加 `set_override` 后再构建
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Server
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.scrape_port", 8000)?
            .set_default("server.oauth_port", 8001)?
            // Scraper
            .set_default("scraper.base_url", "https://api.apify.com")?
            .set_default("scraper.actor_id", "apify~instagram-scraper")?
            .set_default("scraper.api_token", DEFAULT_SCRAPER_TOKEN)?
            .set_default("scraper.results_type", "posts")?
            .set_default("scraper.results_limit", 10)?
            .set_default("scraper.timeout_secs", 120)?
            // OAuth provider
            .set_default("oauth.client_id", DEFAULT_CLIENT_ID)?
            .set_default("oauth.client_secret", DEFAULT_CLIENT_SECRET)?
            .set_default("oauth.redirect_uri", "http://localhost:8001/auth")?
            .set_default("oauth.scope", "user_profile")?
            .set_default(
                "oauth.authorize_url",
                "https://api.instagram.com/oauth/authorize",
            )?
            .set_default(
                "oauth.token_url",
                "https://api.instagram.com/oauth/access_token",
            )?
            .set_default("oauth.profile_url", "https://graph.instagram.com/me")?
            .set_default("oauth.profile_fields", "id,username")?
            // Session
            .set_default("session.secret", DEFAULT_SESSION_SECRET)?
            .set_default("session.cookie_name", "profiledash_session")?
            .set_default("session.ttl_secs", 14 * 24 * 60 * 60)?
            .set_default("session.secure_cookie", false)
    }

    /// 返回仍在使用不安全默认值的配置键
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.scraper.api_token == DEFAULT_SCRAPER_TOKEN {
            keys.push("scraper.api_token");
        }
        if self.oauth.client_id == DEFAULT_CLIENT_ID {
            keys.push("oauth.client_id");
        }
        if self.oauth.client_secret == DEFAULT_CLIENT_SECRET {
            keys.push("oauth.client_secret");
        }
        if self.session.secret == DEFAULT_SESSION_SECRET {
            keys.push("session.secret");
        }
        keys
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
