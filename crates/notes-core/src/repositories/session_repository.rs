//! Session repository trait (port)

use async_trait::async_trait;
use crate::domain::Session;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: &Session) -> Result<(), DomainError>;
    /// Returns the session only if it has not expired.
    async fn find_active(&self, token: &str) -> Result<Option<Session>, DomainError>;
    /// Deleting an unknown token is not an error.
    async fn delete(&self, token: &str) -> Result<(), DomainError>;
}
