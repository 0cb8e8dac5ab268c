// src/application/search.rs
//
// Search screen state machine.
//
// Superseded in-flight searches are not cancelled; a generation counter
// makes sure the last *issued* search wins, not the last response to
// arrive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::{ApiError, AppError};
use crate::services::AnimeCatalog;

use crate::domain::AnimeRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Loaded(Vec<AnimeRecord>),
    Error(String),
}

pub struct SearchController {
    catalog: Arc<dyn AnimeCatalog>,
    state: RwLock<SearchState>,
    generation: AtomicU64,
}

impl SearchController {
    pub fn new(catalog: Arc<dyn AnimeCatalog>) -> Self {
        Self {
            catalog,
            state: RwLock::new(SearchState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.read().unwrap().clone()
    }

    pub async fn search(&self, query: &str) {
        // Rejected before the catalog ever sees it
        if query.trim().is_empty() {
            *self.state.write().unwrap() =
                SearchState::Error(user_message(&AppError::EmptyQuery));
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write().unwrap() = SearchState::Loading;

        let result = self.catalog.search(query).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(query = %query, "Discarding superseded search response");
            return;
        }

        *self.state.write().unwrap() = match result {
            Ok(records) => SearchState::Loaded(records),
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Search failed");
                SearchState::Error(user_message(&e))
            }
        };
    }
}

fn user_message(err: &AppError) -> String {
    match err {
        AppError::EmptyQuery => "Please enter a search term".to_string(),
        AppError::Api(ApiError::InvalidUrl(_)) => "Invalid URL. Please try again.".to_string(),
        AppError::Api(ApiError::NetworkFailure(_)) => {
            "Network error. Please check your connection.".to_string()
        }
        AppError::Api(ApiError::DecodeFailure(_)) => {
            "Could not process the server response.".to_string()
        }
        _ => format!("An unexpected error occurred: {}", err),
    }
}
