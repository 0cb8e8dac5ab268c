// src/repositories/favorites_cache_repository.rs
//
// Per-identity local favorites cache.
//
// Stores the encoded array of full anime records (not just titles) so
// favorites stay displayable offline. The cache key is the identity itself;
// a single-statement upsert keeps read-back atomic.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::params;

#[cfg(test)]
use mockall::automock;

use crate::db::ConnectionPool;
use crate::domain::{AnimeRecord, UserId};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, automock)]
pub trait FavoritesCacheRepository: Send + Sync {
    fn load(&self, user_id: &UserId) -> AppResult<Option<Vec<AnimeRecord>>>;
    fn store(&self, user_id: &UserId, records: &[AnimeRecord]) -> AppResult<()>;
    fn clear(&self, user_id: &UserId) -> AppResult<()>;
}

pub struct SqliteFavoritesCacheRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteFavoritesCacheRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl FavoritesCacheRepository for SqliteFavoritesCacheRepository {
    fn load(&self, user_id: &UserId) -> AppResult<Option<Vec<AnimeRecord>>> {
        let conn = self.pool.get()?;

        let payload: Option<String> = match conn.query_row(
            "SELECT payload FROM favorites_cache WHERE user_id = ?1",
            params![user_id.as_str()],
            |row| row.get(0),
        ) {
            Ok(payload) => Some(payload),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(AppError::Database(e)),
        };

        match payload {
            Some(payload) => {
                let records: Vec<AnimeRecord> = serde_json::from_str(&payload)?;
                Ok(Some(records))
            }
            None => Ok(None),
        }
    }

    fn store(&self, user_id: &UserId, records: &[AnimeRecord]) -> AppResult<()> {
        let conn = self.pool.get()?;
        let payload = serde_json::to_string(records)?;

        conn.execute(
            "INSERT OR REPLACE INTO favorites_cache (user_id, payload, updated_at)
             VALUES (?1, ?2, ?3)",
            params![user_id.as_str(), payload, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn clear(&self, user_id: &UserId) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "DELETE FROM favorites_cache WHERE user_id = ?1",
            params![user_id.as_str()],
        )?;

        Ok(())
    }
}
