// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::settings::OAuthSettings;
use crate::domain::models::session::{AccessToken, UserProfile};
use crate::domain::services::oauth_service::{OAuthError, OAuthProvider};

/// 基于 HTTP 的 OAuth2 提供方实现
///
/// 默认端点指向 Instagram Basic Display，其他遵循标准授权码流程的提供方只需替换配置
pub struct HttpOAuthProvider {
    client: reqwest::Client,
    settings: OAuthSettings,
}

impl HttpOAuthProvider {
    pub fn new(settings: OAuthSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    /// 从提供方的错误响应中提取可读的错误信息
    fn provider_error_detail(body: &str) -> String {
        serde_json::from_str::<Map<String, Value>>(body)
            .ok()
            .and_then(|fields| {
                ["error_message", "error_description", "error"]
                    .iter()
                    .find_map(|key| match fields.get(*key) {
                        Some(Value::String(s)) => Some(s.clone()),
                        Some(Value::Object(inner)) => inner
                            .get("message")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                        _ => None,
                    })
            })
            .unwrap_or_else(|| body.trim().to_string())
    }
}

#[async_trait]
impl OAuthProvider for HttpOAuthProvider {
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthError> {
        let form = [
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("code", code),
        ];

        let response = self
            .client
            .post(&self.settings.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| OAuthError::Exchange(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OAuthError::Exchange(e.without_url().to_string()))?;

        if !status.is_success() {
            let detail = Self::provider_error_detail(&body);
            warn!("Token exchange rejected with status {}: {}", status, detail);
            return Err(OAuthError::Exchange(detail));
        }

        let token: AccessToken = serde_json::from_str(&body)
            .map_err(|e| OAuthError::Exchange(format!("invalid token response: {}", e)))?;
        if token.secret().is_none() {
            return Err(OAuthError::Exchange(
                "token response missing access_token".to_string(),
            ));
        }

        debug!("Authorization code exchanged for access token");
        Ok(token)
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<UserProfile, OAuthError> {
        let secret = token
            .secret()
            .ok_or_else(|| OAuthError::Profile("access token missing".to_string()))?;

        let response = self
            .client
            .get(&self.settings.profile_url)
            .query(&[
                ("fields", self.settings.profile_fields.as_str()),
                ("access_token", secret),
            ])
            .send()
            .await
            // The request URL carries the user's access token.
            .map_err(|e| OAuthError::Profile(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OAuthError::Profile(format!(
                "status {}: {}",
                status,
                Self::provider_error_detail(&body)
            )));
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| OAuthError::Profile(e.without_url().to_string()))
    }
}
