// src/services/catalog_service.rs
//
// Read path over the metadata API: search plus the three browse listings.
// Client errors propagate unchanged so the UI can tell "no results" from
// "fetch failed".

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::AnimeRecord;
use crate::error::AppResult;
use crate::integrations::jikan::{AnimeListResponse, JikanClient, ANIME_PATH};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnimeCatalog: Send + Sync {
    async fn search(&self, query: &str) -> AppResult<Vec<AnimeRecord>>;
    async fn top_rated(&self, limit: u32) -> AppResult<Vec<AnimeRecord>>;
    async fn airing_now(&self, limit: u32) -> AppResult<Vec<AnimeRecord>>;
    async fn upcoming(&self, limit: u32) -> AppResult<Vec<AnimeRecord>>;
}

pub struct JikanCatalog {
    client: Arc<JikanClient>,
}

impl JikanCatalog {
    pub fn new(client: Arc<JikanClient>) -> Self {
        Self { client }
    }

    async fn fetch_list(&self, params: &[(&str, String)]) -> AppResult<Vec<AnimeRecord>> {
        let url = self.client.build_query_url(ANIME_PATH, params)?;
        let response: AnimeListResponse = self.client.fetch(url).await?;
        Ok(response.data.into_iter().map(AnimeRecord::from).collect())
    }
}

#[async_trait]
impl AnimeCatalog for JikanCatalog {
    async fn search(&self, query: &str) -> AppResult<Vec<AnimeRecord>> {
        if query.trim().is_empty() {
            return Err(crate::error::AppError::EmptyQuery);
        }

        self.fetch_list(&[("q", query.to_string())]).await
    }

    async fn top_rated(&self, limit: u32) -> AppResult<Vec<AnimeRecord>> {
        self.fetch_list(&[
            ("limit", limit.to_string()),
            ("order_by", "score".to_string()),
            ("sort", "desc".to_string()),
        ])
        .await
    }

    async fn airing_now(&self, limit: u32) -> AppResult<Vec<AnimeRecord>> {
        self.fetch_list(&[
            ("limit", limit.to_string()),
            ("status", "airing".to_string()),
        ])
        .await
    }

    async fn upcoming(&self, limit: u32) -> AppResult<Vec<AnimeRecord>> {
        self.fetch_list(&[
            ("limit", limit.to_string()),
            ("status", "upcoming".to_string()),
        ])
        .await
    }
}
