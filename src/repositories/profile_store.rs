// src/repositories/profile_store.rs
//
// Remote profile document store boundary.
//
// The real backend is an external document database; the core only depends
// on this trait. Documents are returned raw so callers decide between
// strict decoding (fail closed) and tolerant projection reads.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::json;

#[cfg(test)]
use mockall::automock;

use crate::domain::{ProfileDocument, UserId, UserProfile};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Full-document fetch by identity. `None` when no document exists.
    async fn fetch_profile(&self, user_id: &UserId) -> AppResult<Option<ProfileDocument>>;

    /// Full-collection scan (the roster).
    async fn scan_profiles(&self) -> AppResult<Vec<ProfileDocument>>;

    /// Create or overwrite the full document for an identity.
    async fn create_profile(&self, user_id: &UserId, profile: &UserProfile) -> AppResult<()>;

    /// Partial update of the `favoriteAnime` field only; other fields are
    /// left untouched. Fails if the document does not exist.
    async fn update_favorites(&self, user_id: &UserId, titles: &[String]) -> AppResult<()>;
}

/// In-process profile store for tests and the demo binary.
///
/// Keeps documents in insertion order so roster scans are deterministic.
#[derive(Default)]
pub struct InMemoryProfileStore {
    documents: RwLock<Vec<ProfileDocument>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw document directly (tests exercising malformed data).
    pub fn insert_raw(&self, user_id: UserId, data: serde_json::Value) {
        let mut documents = self.documents.write().unwrap();
        documents.retain(|d| d.user_id != user_id);
        documents.push(ProfileDocument { user_id, data });
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn fetch_profile(&self, user_id: &UserId) -> AppResult<Option<ProfileDocument>> {
        let documents = self.documents.read().unwrap();
        Ok(documents.iter().find(|d| &d.user_id == user_id).cloned())
    }

    async fn scan_profiles(&self) -> AppResult<Vec<ProfileDocument>> {
        let documents = self.documents.read().unwrap();
        Ok(documents.clone())
    }

    async fn create_profile(&self, user_id: &UserId, profile: &UserProfile) -> AppResult<()> {
        let data = profile.encode()?;
        self.insert_raw(user_id.clone(), data);
        Ok(())
    }

    async fn update_favorites(&self, user_id: &UserId, titles: &[String]) -> AppResult<()> {
        let mut documents = self.documents.write().unwrap();
        let doc = documents
            .iter_mut()
            .find(|d| &d.user_id == user_id)
            .ok_or_else(|| {
                AppError::ProfileStore(format!("no profile document for {}", user_id))
            })?;

        doc.data["favoriteAnime"] = json!(titles);
        Ok(())
    }
}
