//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Session token is missing")]
    CredentialMissing,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unknown and expired tokens are deliberately the same outcome.
    #[error("Session not found")]
    SessionNotFound,

    #[error("User not found")]
    UserNotFound,

    /// Missing rows and rows owned by someone else are deliberately the same outcome.
    #[error("Message not found")]
    MessageNotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Random source error: {0}")]
    RandomSourceError(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Session creation failed: {0}")]
    SessionCreationFailed(String),

    #[error("Session deletion failed: {0}")]
    SessionDeletionFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Failures caused by the server rather than by the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DomainError::RandomSourceError(_)
                | DomainError::PasswordHashError(_)
                | DomainError::SessionCreationFailed(_)
                | DomainError::SessionDeletionFailed(_)
                | DomainError::DatabaseError(_)
        )
    }
}
