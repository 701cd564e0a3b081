// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::session::{AccessToken, UserProfile};
use crate::domain::repositories::session_repository::SessionError;

/// OAuth 错误类型
#[derive(Error, Debug)]
pub enum OAuthError {
    /// 授权码交换失败或回调携带了提供方错误
    #[error("OAuth exchange failed: {0}")]
    Exchange(String),
    /// 获取用户资料失败
    #[error("Failed to fetch profile: {0}")]
    Profile(String),
    /// 配置无效（例如授权地址无法解析）
    #[error("Invalid OAuth configuration: {0}")]
    Configuration(String),
    /// 会话存储失败
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// OAuth 提供方特质
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// 用授权码换取访问令牌
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthError>;

    /// 获取只包含标识和用户名的用户资料
    async fn fetch_profile(&self, token: &AccessToken) -> Result<UserProfile, OAuthError>;
}
