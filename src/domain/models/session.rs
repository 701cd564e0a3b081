// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// 会话标识
///
/// 每个浏览器会话一个随机 UUID，通过签名 Cookie 传递
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// 用户资料
///
/// 只保留向提供方请求的标识和用户名两个字段，其余字段在反序列化时丢弃
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// 提供方的用户标识
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// 用户名
    pub username: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for id, got {}",
            other
        ))),
    }
}

/// 访问令牌
///
/// 提供方返回的令牌响应，按不透明的 JSON 对象保存
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(Map<String, Value>);

impl AccessToken {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// 令牌字符串，缺失时返回 None
    pub fn secret(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

// Token values must never end up in logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("fields", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// 会话状态
///
/// 只在 OAuth 回调成功后整体写入，不存在只有一半字段的会话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: UserProfile,
    pub token: AccessToken,
}
