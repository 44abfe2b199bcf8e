// ============================================================================
// Notes API - Authentication Gate
// File: crates/notes-api/src/middleware/auth.rs
// ============================================================================
//! Resolves the session cookie to a user before protected handlers run.
//!
//! Missing, blank, unknown and expired tokens all produce the same 401. Store
//! failures produce a 500. The gate only reads session state.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::COOKIE, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use notes_core::DomainError;
use notes_security::SessionCookie;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity resolved for the current request. Only the gate inserts it, so a
/// handler that extracts it cannot run unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().copied().ok_or_else(|| {
            ApiError::InternalError("CurrentUser requested on a route without require_session".to_string())
        })
    }
}

/// First non-blank session token across all `Cookie` headers.
pub fn session_token(headers: &HeaderMap, cookie: &SessionCookie) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| cookie.token_from_header(value))
}

pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(request.headers(), &state.session_cookie)
        .ok_or(DomainError::CredentialMissing)?;

    let user_id = state.session_manager.validate_session(&token).await?;
    debug!("Request authenticated as user {}", user_id);

    request.extensions_mut().insert(CurrentUser { user_id });
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn token_is_found_in_any_cookie_header() {
        let cookie = SessionCookie::new("session_token", 60, false, false);
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("session_token=abc"));

        assert_eq!(session_token(&headers, &cookie), Some("abc".to_string()));
        assert_eq!(session_token(&HeaderMap::new(), &cookie), None);
    }
}
