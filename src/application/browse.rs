// src/application/browse.rs
//
// Home screen browse sections: top rated, airing now, upcoming.
//
// The three fetches run concurrently and independently; each section
// carries its own loading/error flag so one failing listing never blocks
// or corrupts the others.

use std::future::Future;
use std::sync::{Arc, RwLock};

use crate::domain::AnimeRecord;
use crate::error::AppResult;
use crate::services::AnimeCatalog;

/// Records requested per browse section
pub const BROWSE_LIMIT: u32 = 15;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionState {
    pub records: Vec<AnimeRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct BrowseController {
    catalog: Arc<dyn AnimeCatalog>,
    top: RwLock<SectionState>,
    airing: RwLock<SectionState>,
    upcoming: RwLock<SectionState>,
}

impl BrowseController {
    pub fn new(catalog: Arc<dyn AnimeCatalog>) -> Self {
        Self {
            catalog,
            top: RwLock::new(SectionState::default()),
            airing: RwLock::new(SectionState::default()),
            upcoming: RwLock::new(SectionState::default()),
        }
    }

    pub async fn refresh_all(&self) {
        tokio::join!(
            self.refresh_top(),
            self.refresh_airing(),
            self.refresh_upcoming()
        );
    }

    pub async fn refresh_top(&self) {
        Self::apply(&self.top, "top", self.catalog.top_rated(BROWSE_LIMIT)).await;
    }

    pub async fn refresh_airing(&self) {
        Self::apply(&self.airing, "airing", self.catalog.airing_now(BROWSE_LIMIT)).await;
    }

    pub async fn refresh_upcoming(&self) {
        Self::apply(&self.upcoming, "upcoming", self.catalog.upcoming(BROWSE_LIMIT)).await;
    }

    pub fn top(&self) -> SectionState {
        self.top.read().unwrap().clone()
    }

    pub fn airing(&self) -> SectionState {
        self.airing.read().unwrap().clone()
    }

    pub fn upcoming(&self) -> SectionState {
        self.upcoming.read().unwrap().clone()
    }

    async fn apply<F>(section: &RwLock<SectionState>, name: &str, fetch: F)
    where
        F: Future<Output = AppResult<Vec<AnimeRecord>>>,
    {
        {
            let mut state = section.write().unwrap();
            state.loading = true;
            state.error = None;
        }

        let result = fetch.await;

        let mut state = section.write().unwrap();
        state.loading = false;
        match result {
            // A short result set is displayed as-is, never padded
            Ok(records) => state.records = records,
            Err(e) => {
                tracing::warn!(section = name, error = %e, "Browse fetch failed");
                state.error = Some(e.to_string());
            }
        }
    }
}
