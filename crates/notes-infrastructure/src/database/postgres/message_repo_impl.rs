// ============================================================================
// Notes Infrastructure - PostgreSQL Message Repository
// File: crates/notes-infrastructure/src/database/postgres/message_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::error;

use notes_core::domain::{Message, MessageId, NewMessage};
use notes_core::error::DomainError;
use notes_core::repositories::MessageRepository;

pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct MessageRow {
    pub id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id,
            body: row.body,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn insert(&self, message: &NewMessage) -> Result<Message, DomainError> {
        let row: MessageRow = sqlx::query_as(
            r#"
            INSERT INTO messages (user_id, body)
            VALUES ($1, $2)
            RETURNING id, body, created_at
            "#
        )
        .bind(message.user_id)
        .bind(&message.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error inserting message: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn update_if_owner(
        &self,
        id: MessageId,
        owner_id: &Uuid,
        body: &str,
    ) -> Result<Option<Message>, DomainError> {
        // Ownership lives in the WHERE clause; zero rows covers both
        // "no such id" and "not yours".
        let row: Option<MessageRow> = sqlx::query_as(
            r#"
            UPDATE messages
            SET body = $1
            WHERE id = $2 AND user_id = $3
            RETURNING id, body, created_at
            "#
        )
        .bind(body)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating message {}: {}", id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Message>, DomainError> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            r#"
            SELECT id, body, created_at
            FROM messages
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing messages: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}
