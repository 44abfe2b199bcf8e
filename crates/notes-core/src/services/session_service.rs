// ============================================================================
// Notes Core - Session Manager
// File: crates/notes-core/src/services/session_service.rs
// ============================================================================
//! Mints, validates and destroys opaque bearer tokens.
//!
//! Every validation is a fresh store lookup; nothing is cached in process, so
//! a logout is visible to the very next request.

use std::sync::Arc;
use chrono::{Duration, Utc};
use uuid::Uuid;
use tracing::{debug, error};

use notes_security::token::{generate_session_token, TokenError};
use notes_shared::utils::mask_token;

use crate::domain::{IssuedSession, Session};
use crate::error::DomainError;
use crate::repositories::SessionRepository;

pub type TokenSource = fn() -> Result<String, TokenError>;

pub struct SessionManager {
    session_repo: Arc<dyn SessionRepository>,
    ttl: Duration,
    token_source: TokenSource,
}

impl SessionManager {
    pub fn new(session_repo: Arc<dyn SessionRepository>, ttl_seconds: i64) -> Self {
        Self {
            session_repo,
            ttl: Duration::seconds(ttl_seconds),
            token_source: generate_session_token,
        }
    }

    pub fn with_token_source(mut self, token_source: TokenSource) -> Self {
        self.token_source = token_source;
        self
    }

    /// Persists `(token, user_id, now + ttl)`. On error no session exists and
    /// the caller must not hand anything to the client.
    pub async fn create_session(&self, user_id: Uuid) -> Result<IssuedSession, DomainError> {
        let token = (self.token_source)().map_err(|e| {
            error!("Session token generation failed: {}", e);
            DomainError::RandomSourceError(e.to_string())
        })?;

        let session = Session::new(token, user_id, Utc::now(), self.ttl);
        self.session_repo.insert(&session).await?;

        debug!("Session {} created for user {}", mask_token(&session.token), user_id);
        Ok(IssuedSession::from(&session))
    }

    /// Resolves a token to its user. Unknown and expired tokens both yield
    /// `SessionNotFound`.
    pub async fn validate_session(&self, token: &str) -> Result<Uuid, DomainError> {
        let session = self
            .session_repo
            .find_active(token)
            .await?
            .ok_or(DomainError::SessionNotFound)?;

        if !session.is_active_at(Utc::now()) {
            return Err(DomainError::SessionNotFound);
        }

        Ok(session.user_id)
    }

    /// Idempotent.
    pub async fn destroy_session(&self, token: &str) -> Result<(), DomainError> {
        self.session_repo.delete(token).await?;
        debug!("Session {} destroyed", mask_token(token));
        Ok(())
    }
}
