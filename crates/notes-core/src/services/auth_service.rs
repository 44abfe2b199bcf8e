// ============================================================================
// Notes Core - Authentication Service
// File: crates/notes-core/src/services/auth_service.rs
// ============================================================================
//! Login, logout and current-identity flows on top of the session manager

use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, warn, error};

use notes_security::password::PasswordService;

use crate::domain::{IssuedSession, UserInfo};
use crate::error::DomainError;
use crate::repositories::UserRepository;
use crate::services::SessionManager;

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    sessions: Arc<SessionManager>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, sessions: Arc<SessionManager>) -> Self {
        Self { user_repo, sessions }
    }

    /// Login with username and password.
    ///
    /// An unknown username and a wrong password produce the same
    /// `InvalidCredentials` error.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, DomainError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::ValidationError(
                "username and password are required".to_string(),
            ));
        }

        info!("Login attempt for username: {}", username);

        // 1. Find user by username (exact match)
        let user = self.user_repo.find_by_username(username).await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username: {}", username);
                DomainError::InvalidCredentials
            })?;

        // 2. Verify password on the blocking pool
        let candidate = password.to_string();
        let stored_hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            PasswordService::verify(&candidate, &stored_hash)
        })
        .await
        .map_err(|e| DomainError::PasswordHashError(e.to_string()))?
        .unwrap_or_else(|e| {
            warn!("Stored password hash for user {} is unusable: {}", user.id, e);
            false
        });

        if !password_valid {
            warn!("Login failed: invalid password for: {}", username);
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Create session
        let session = self.sessions.create_session(user.id).await.map_err(|e| {
            error!("Failed to create session for user {}: {}", user.id, e);
            DomainError::SessionCreationFailed(e.to_string())
        })?;

        info!("Login successful for: {}", username);

        Ok(LoginResult {
            user: UserInfo::from(&user),
            session,
        })
    }

    /// Destroys the session behind `token`, if any. Logging out without a
    /// session is not an error.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), DomainError> {
        let Some(token) = token else {
            return Ok(());
        };

        self.sessions.destroy_session(token).await.map_err(|e| {
            error!("Failed to delete session: {}", e);
            DomainError::SessionDeletionFailed(e.to_string())
        })
    }

    /// The user behind an already-validated session.
    pub async fn current_user(&self, user_id: &Uuid) -> Result<UserInfo, DomainError> {
        let user = self.user_repo.find_by_id(user_id).await?
            .ok_or(DomainError::UserNotFound)?;
        Ok(UserInfo::from(&user))
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: UserInfo,
    pub session: IssuedSession,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::repositories::{MockSessionRepository, MockUserRepository};
    use chrono::{Duration, Utc};

    const TTL: i64 = 3600;

    fn alice() -> User {
        User::new(
            "alice".to_string(),
            PasswordService::hash_with_cost("s3cret", 4).unwrap(),
        )
    }

    fn service(users: MockUserRepository, sessions: MockSessionRepository) -> AuthService {
        AuthService::new(
            Arc::new(users),
            Arc::new(SessionManager::new(Arc::new(sessions), TTL)),
        )
    }

    #[tokio::test]
    async fn login_creates_a_session_with_fixed_expiry() {
        let user = alice();
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users.expect_find_by_username()
            .withf(|u| u == "alice")
            .times(1)
            .return_once(move |_| Ok(Some(user)));

        let mut sessions = MockSessionRepository::new();
        sessions.expect_insert()
            .withf(move |s| s.user_id == user_id)
            .times(1)
            .returning(|_| Ok(()));

        let before = Utc::now();
        let result = service(users, sessions).login("  alice ", "s3cret").await.unwrap();
        let after = Utc::now();

        assert_eq!(result.user.id, user_id);
        assert_eq!(result.user.username, "alice");
        assert!(result.session.expires_at >= before + Duration::seconds(TTL));
        assert!(result.session.expires_at <= after + Duration::seconds(TTL));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let user = alice();
        let mut users = MockUserRepository::new();
        users.expect_find_by_username()
            .return_once(move |_| Ok(Some(user)));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_insert().never();
        let wrong_password = service(users, sessions).login("alice", "nope").await.unwrap_err();

        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_insert().never();
        let unknown_user = service(users, sessions).login("mallory", "nope").await.unwrap_err();

        assert!(matches!(wrong_password, DomainError::InvalidCredentials));
        assert!(matches!(unknown_user, DomainError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn corrupt_stored_hash_is_a_credential_failure() {
        let mut user = alice();
        user.password_hash = "plaintext".to_string();
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().return_once(move |_| Ok(Some(user)));

        let err = service(users, MockSessionRepository::new())
            .login("alice", "plaintext")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn blank_credentials_are_rejected_before_lookup() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().never();
        let service = service(users, MockSessionRepository::new());

        assert!(matches!(
            service.login("   ", "pw").await,
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            service.login("alice", "").await,
            Err(DomainError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn session_store_failure_surfaces_as_creation_failure() {
        let user = alice();
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().return_once(move |_| Ok(Some(user)));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_insert()
            .returning(|_| Err(DomainError::DatabaseError("disk full".into())));

        let err = service(users, sessions).login("alice", "s3cret").await.unwrap_err();
        assert!(matches!(err, DomainError::SessionCreationFailed(_)));
    }

    #[tokio::test]
    async fn logout_without_token_touches_nothing() {
        let mut sessions = MockSessionRepository::new();
        sessions.expect_delete().never();
        service(MockUserRepository::new(), sessions).logout(None).await.unwrap();
    }

    #[tokio::test]
    async fn logout_deletes_the_session() {
        let mut sessions = MockSessionRepository::new();
        sessions.expect_delete()
            .withf(|t| t == "tok")
            .times(1)
            .returning(|_| Ok(()));
        service(MockUserRepository::new(), sessions).logout(Some("tok")).await.unwrap();
    }

    #[tokio::test]
    async fn current_user_of_deleted_account_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let err = service(users, MockSessionRepository::new())
            .current_user(&Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound));
    }
}
