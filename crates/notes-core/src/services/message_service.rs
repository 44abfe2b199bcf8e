//! Ownership-scoped message access
//!
//! Ownership is part of every store statement's match condition. There is no
//! read-then-check: an update either matches `(id, owner)` atomically or
//! reports `MessageNotFound`, so a caller cannot tell a foreign message from
//! a missing one.

use std::sync::Arc;
use uuid::Uuid;
use tracing::debug;

use crate::domain::{Message, MessageId, NewMessage};
use crate::error::DomainError;
use crate::repositories::MessageRepository;

pub const BODY_REQUIRED: &str = "body is required";

pub struct MessageService {
    message_repo: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(message_repo: Arc<dyn MessageRepository>) -> Self {
        Self { message_repo }
    }

    pub async fn create(&self, owner_id: Uuid, body: String) -> Result<Message, DomainError> {
        validate_body(&body)?;

        let message = self
            .message_repo
            .insert(&NewMessage { user_id: owner_id, body })
            .await?;

        debug!("Message {} created by user {}", message.id, owner_id);
        Ok(message)
    }

    pub async fn update(
        &self,
        id: MessageId,
        owner_id: Uuid,
        body: String,
    ) -> Result<Message, DomainError> {
        validate_body(&body)?;

        self.message_repo
            .update_if_owner(id, &owner_id, &body)
            .await?
            .ok_or_else(|| {
                debug!("Update of message {} by user {} matched no row", id, owner_id);
                DomainError::MessageNotFound
            })
    }

    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<Message>, DomainError> {
        self.message_repo.list_by_owner(&owner_id).await
    }
}

fn validate_body(body: &str) -> Result<(), DomainError> {
    if body.is_empty() {
        return Err(DomainError::ValidationError(BODY_REQUIRED.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockMessageRepository;
    use chrono::{TimeZone, Utc};

    fn service(repo: MockMessageRepository) -> MessageService {
        MessageService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn empty_body_never_reaches_the_store() {
        let mut repo = MockMessageRepository::new();
        repo.expect_insert().never();
        repo.expect_update_if_owner().never();
        let service = service(repo);

        let create = service.create(Uuid::new_v4(), String::new()).await.unwrap_err();
        let update = service.update(1, Uuid::new_v4(), String::new()).await.unwrap_err();

        assert!(matches!(create, DomainError::ValidationError(ref m) if m == BODY_REQUIRED));
        assert!(matches!(update, DomainError::ValidationError(ref m) if m == BODY_REQUIRED));
    }

    #[tokio::test]
    async fn create_scopes_the_row_to_the_caller() {
        let owner = Uuid::new_v4();
        let created_at = Utc.with_ymd_and_hms(2026, 2, 9, 10, 30, 0).unwrap();
        let mut repo = MockMessageRepository::new();
        repo.expect_insert()
            .withf(move |m| m.user_id == owner && m.body == "新規ノート")
            .times(1)
            .returning(move |m| {
                Ok(Message { id: 42, body: m.body.clone(), created_at })
            });

        let message = service(repo).create(owner, "新規ノート".into()).await.unwrap();
        assert_eq!(message, Message { id: 42, body: "新規ノート".into(), created_at });
    }

    #[tokio::test]
    async fn foreign_and_missing_messages_are_both_not_found() {
        let owner = Uuid::new_v4();
        let mut repo = MockMessageRepository::new();
        repo.expect_update_if_owner()
            .withf(move |id, o, body| (*id == 42 || *id == 999) && *o == owner && body == "x")
            .times(2)
            .returning(|_, _, _| Ok(None));
        let service = service(repo);

        let foreign = service.update(42, owner, "x".into()).await.unwrap_err();
        let missing = service.update(999, owner, "x".into()).await.unwrap_err();

        assert!(matches!(foreign, DomainError::MessageNotFound));
        assert_eq!(foreign.to_string(), missing.to_string());
    }

    #[tokio::test]
    async fn list_passes_through_store_order() {
        let owner = Uuid::new_v4();
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let rows = vec![
            Message { id: 1, body: "first".into(), created_at: t0 },
            Message { id: 2, body: "second".into(), created_at: t0 + chrono::Duration::seconds(1) },
        ];
        let expected = rows.clone();
        let mut repo = MockMessageRepository::new();
        repo.expect_list_by_owner()
            .withf(move |o| *o == owner)
            .return_once(move |_| Ok(rows));

        assert_eq!(service(repo).list(owner).await.unwrap(), expected);
    }
}
