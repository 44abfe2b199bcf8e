// ============================================================================
// Notes API - Auth Handlers
// File: crates/notes-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (login, logout, current user)

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::dto::{LoginRequest, UserResponse};
use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::middleware::{session_token, CurrentUser};
use crate::state::AppState;

/// Login handler - POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    let cookie = state
        .session_cookie
        .issue(&result.session.token, result.session.expires_at);

    Ok(([(SET_COOKIE, cookie)], Json(UserResponse::from(result.user))))
}

/// Logout handler - POST /api/logout
///
/// Always clears the client cookie; a missing session is not an error.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let token = session_token(&headers, &state.session_cookie);
    state.auth_service.logout(token.as_deref()).await?;

    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, state.session_cookie.clear())]))
}

/// Current user handler - GET /api/me
pub async fn me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.auth_service.current_user(&current.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}
