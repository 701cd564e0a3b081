// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::settings::SessionSettings;
use crate::domain::models::session::SessionId;

type HmacSha256 = Hmac<Sha256>;

/// 会话 Cookie 编解码器
///
/// Cookie 值格式为 `{session_id}.{hex(hmac_sha256(secret, session_id))}`
#[derive(Clone)]
pub struct SessionCookieCodec {
    secret: Vec<u8>,
    cookie_name: String,
    max_age_secs: i64,
    secure: bool,
}

impl SessionCookieCodec {
    pub fn new(settings: &SessionSettings) -> Self {
        Self {
            secret: settings.secret.as_bytes().to_vec(),
            cookie_name: settings.cookie_name.clone(),
            max_age_secs: settings.ttl_secs,
            secure: settings.secure_cookie,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    fn mac(&self, payload: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac
    }

    /// 生成签名后的 Cookie 值
    pub fn encode(&self, id: &SessionId) -> String {
        let payload = id.to_string();
        let signature = hex::encode(self.mac(&payload).finalize().into_bytes());
        format!("{}.{}", payload, signature)
    }

    /// 校验签名并解析会话标识，签名不匹配时返回 None
    pub fn decode(&self, value: &str) -> Option<SessionId> {
        let (payload, signature) = value.split_once('.')?;
        let signature = hex::decode(signature).ok()?;
        self.mac(payload).verify_slice(&signature).ok()?;
        payload.parse().ok()
    }

    /// 从请求 Cookie 中找出本服务的会话标识
    pub fn find_in_jar(&self, jar: &CookieJar) -> Option<SessionId> {
        jar.get(&self.cookie_name)
            .and_then(|cookie| self.decode(cookie.value()))
    }

    /// 构造写回浏览器的会话 Cookie
    pub fn session_cookie(&self, id: &SessionId) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), self.encode(id)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(cookie::time::Duration::seconds(self.max_age_secs))
            .secure(self.secure)
            .build()
    }
}
