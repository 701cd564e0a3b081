// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::config::settings::OAuthSettings;
use crate::domain::models::session::{SessionId, SessionState, UserProfile};
use crate::domain::repositories::session_repository::SessionStore;
use crate::domain::services::oauth_service::{OAuthError, OAuthProvider};

/// 提供方回调参数
///
/// 提供方要么返回 `code`，要么返回 `error` 及其描述
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_reason: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackParams {
    fn provider_error(&self) -> Option<String> {
        let error = self.error.as_deref()?;
        Some(
            self.error_description
                .as_deref()
                .or(self.error_reason.as_deref())
                .map(|detail| format!("{}: {}", error, detail))
                .unwrap_or_else(|| error.to_string()),
        )
    }
}

/// OAuth 授权码流程控制器
///
/// 负责生成授权跳转地址、处理回调、交换令牌、获取资料并写入会话
pub struct OAuthFlowController {
    provider: Arc<dyn OAuthProvider>,
    sessions: Arc<dyn SessionStore>,
    settings: OAuthSettings,
}

impl OAuthFlowController {
    pub fn new(
        provider: Arc<dyn OAuthProvider>,
        sessions: Arc<dyn SessionStore>,
        settings: OAuthSettings,
    ) -> Self {
        Self {
            provider,
            sessions,
            settings,
        }
    }

    /// 计算提供方授权地址
    ///
    /// 不记录任何本地状态，后续由提供方签发的授权码关联本次登录
    pub fn authorization_url(&self) -> Result<Url, OAuthError> {
        Url::parse_with_params(
            &self.settings.authorize_url,
            &[
                ("client_id", self.settings.client_id.as_str()),
                ("redirect_uri", self.settings.redirect_uri.as_str()),
                ("scope", self.settings.scope.as_str()),
                ("response_type", "code"),
            ],
        )
        .map_err(|e| OAuthError::Configuration(format!("authorize_url: {}", e)))
    }

    /// 处理提供方回调
    ///
    /// # 参数
    ///
    /// * `current` - 请求中已有的有效会话标识
    /// * `params` - 回调查询参数
    ///
    /// # 返回值
    ///
    /// * `Ok(SessionId)` - 写入会话所用的标识；有已有会话时沿用，否则新建
    /// * `Err(OAuthError)` - 任一步骤失败，此时不写入会话
    pub async fn handle_callback(
        &self,
        current: Option<SessionId>,
        params: CallbackParams,
    ) -> Result<SessionId, OAuthError> {
        if let Some(detail) = params.provider_error() {
            warn!("Provider returned an error on callback: {}", detail);
            return Err(OAuthError::Exchange(detail));
        }

        let code = params
            .code
            .filter(|code| !code.is_empty())
            .ok_or_else(|| OAuthError::Exchange("missing authorization code".to_string()))?;

        let token = self.provider.exchange_code(&code).await?;
        let user = self.provider.fetch_profile(&token).await?;

        let session_id = current.unwrap_or_default();
        info!("User {} ({}) logged in", user.username, user.id);
        self.sessions
            .put(session_id, SessionState { user, token })
            .await?;

        Ok(session_id)
    }

    /// 读取当前会话中的用户，未登录时返回 None
    pub async fn current_user(
        &self,
        session_id: Option<&SessionId>,
    ) -> Result<Option<UserProfile>, OAuthError> {
        let Some(id) = session_id else {
            return Ok(None);
        };
        Ok(self.sessions.get(id).await?.map(|state| state.user))
    }
}

#[cfg(test)]
#[path = "oauth_login_test.rs"]
mod tests;
