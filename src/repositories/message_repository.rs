// src/repositories/message_repository.rs
//
// Best-effort local chat log persistence.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::{MessageRecord, UserId};
use crate::error::{AppError, AppResult};

pub trait MessageRepository: Send + Sync {
    fn save(&self, message: &MessageRecord) -> AppResult<()>;

    /// All messages exchanged between two users, oldest first.
    fn between(&self, a: &UserId, b: &UserId) -> AppResult<Vec<MessageRecord>>;
}

pub struct SqliteMessageRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMessageRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to MessageRecord - returns rusqlite::Error for
    /// query_map compatibility
    fn row_to_message(row: &Row) -> Result<MessageRecord, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let sender_id: String = row.get("sender_id")?;
        let receiver_id: String = row.get("receiver_id")?;
        let content: String = row.get("content")?;

        let sent_at_str: String = row.get("sent_at")?;
        let sent_at = DateTime::parse_from_rfc3339(&sent_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let read: bool = row.get("read")?;

        Ok(MessageRecord {
            id,
            sender_id: UserId::from(sender_id),
            receiver_id: UserId::from(receiver_id),
            content,
            sent_at,
            read,
        })
    }
}

impl MessageRepository for SqliteMessageRepository {
    fn save(&self, message: &MessageRecord) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO messages (id, sender_id, receiver_id, content, sent_at, read)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                message.id.to_string(),
                message.sender_id.as_str(),
                message.receiver_id.as_str(),
                message.content,
                message.sent_at.to_rfc3339(),
                message.read,
            ],
        )?;

        Ok(())
    }

    fn between(&self, a: &UserId, b: &UserId) -> AppResult<Vec<MessageRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, sender_id, receiver_id, content, sent_at, read
             FROM messages
             WHERE (sender_id = ?1 AND receiver_id = ?2)
                OR (sender_id = ?2 AND receiver_id = ?1)
             ORDER BY sent_at ASC",
        )?;

        let messages: Vec<MessageRecord> = stmt
            .query_map(params![a.as_str(), b.as_str()], Self::row_to_message)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::Database)?;

        Ok(messages)
    }
}
