//! Message domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type MessageId = i64;

/// A note as returned to its owner. The owner id is implied by the query
/// that produced it and is not part of the representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub user_id: Uuid,
    pub body: String,
}
