// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::services::oauth_service::OAuthError;
use crate::domain::services::scrape_service::ScrapeError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        if let Some(err) = self.0.downcast_ref::<OAuthError>() {
            return match err {
                OAuthError::Exchange(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            };
        }

        if let Some(ScrapeError::Upstream { .. }) = self.0.downcast_ref::<ScrapeError>() {
            // Upstream body is only logged, never echoed to the browser.
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to run scraper synchronously".to_string(),
            );
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();
        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
