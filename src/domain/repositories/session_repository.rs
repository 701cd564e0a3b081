// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::session::{SessionId, SessionState};
use async_trait::async_trait;
use thiserror::Error;

/// 会话存储错误类型
#[derive(Error, Debug)]
pub enum SessionError {
    /// 存储后端错误
    #[error("Session backend error: {0}")]
    Backend(String),
}

/// 会话存储特质
///
/// 定义按会话标识读写会话状态的接口，后端可以是内存、Cookie 或外部存储
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 读取会话，不存在或已过期时返回 None
    async fn get(&self, id: &SessionId) -> Result<Option<SessionState>, SessionError>;
    /// 整体写入会话，覆盖同一标识下的旧状态
    async fn put(&self, id: SessionId, state: SessionState) -> Result<(), SessionError>;
}
