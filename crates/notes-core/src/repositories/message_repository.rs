//! Message repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Message, MessageId, NewMessage};
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, message: &NewMessage) -> Result<Message, DomainError>;
    /// Single conditional update matching both `id` and `owner_id`.
    /// `None` when no row matched, whatever the reason.
    async fn update_if_owner(
        &self,
        id: MessageId,
        owner_id: &Uuid,
        body: &str,
    ) -> Result<Option<Message>, DomainError>;
    /// Oldest first.
    async fn list_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Message>, DomainError>;
}
