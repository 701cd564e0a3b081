// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::response::{Html, IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::application::usecases::oauth_login::{CallbackParams, OAuthFlowController};
use crate::infrastructure::session::cookie::SessionCookieCodec;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session_cookie::SessionCookie;
use crate::presentation::views::dashboard::SessionDashboard;

pub async fn home() -> Redirect {
    Redirect::to("/dashboard")
}

/// 渲染仪表盘
///
/// 只读取会话，不做任何修改
pub async fn dashboard(
    Extension(controller): Extension<Arc<OAuthFlowController>>,
    SessionCookie(session_id): SessionCookie,
) -> Result<Html<String>, AppError> {
    let user = controller.current_user(session_id.as_ref()).await?;
    Ok(SessionDashboard::new(user.as_ref()).render())
}

/// 跳转到提供方授权页
pub async fn login(
    Extension(controller): Extension<Arc<OAuthFlowController>>,
) -> Result<Redirect, AppError> {
    let url = controller.authorization_url()?;
    Ok(Redirect::to(url.as_str()))
}

/// 提供方回调
///
/// 成功时写入会话并跳转到仪表盘；交换失败时返回 400
pub async fn auth_callback(
    Extension(controller): Extension<Arc<OAuthFlowController>>,
    Extension(codec): Extension<Arc<SessionCookieCodec>>,
    SessionCookie(current): SessionCookie,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = controller.handle_callback(current, params).await?;
    Ok((
        jar.add(codec.session_cookie(&session_id)),
        Redirect::to("/dashboard"),
    ))
}
