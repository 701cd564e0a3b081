// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::domain::models::session::SessionId;
use crate::infrastructure::session::cookie::SessionCookieCodec;

/// 当前请求携带的会话标识
///
/// 缺失、未签名或签名被篡改的 Cookie 都视为没有会话
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie(pub Option<SessionId>);

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(codec) = parts.extensions.get::<Arc<SessionCookieCodec>>() else {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            let body = Json(json!({ "error": "Session cookie codec is not configured" }));
            return Err((status, body).into_response());
        };

        let jar = CookieJar::from_headers(&parts.headers);
        let session_id = codec.find_in_jar(&jar);

        Ok(SessionCookie(session_id))
    }
}
