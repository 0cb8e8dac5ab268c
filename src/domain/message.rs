// src/domain/message.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::identity::UserId;

/// One entry in the best-effort local chat log between two matched users.
///
/// Local-only: there is no delivery guarantee and no remote mirror.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: Uuid,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

impl MessageRecord {
    pub fn new(sender_id: UserId, receiver_id: UserId, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            content,
            sent_at: Utc::now(),
            read: false,
        }
    }
}
