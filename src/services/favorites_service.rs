// src/services/favorites_service.rs
//
// Authoritative favorites state for the signed-in user.
//
// State machine over {Empty, Loading, Ready}, keyed by the current session
// identity. Every identity transition is a full reset: in-memory favorites
// are dropped synchronously before anything else happens, so favorites
// never leak across accounts on a shared device. Remote failures degrade
// to the local per-identity cache; they are never fatal to usability.

use std::sync::{Arc, RwLock};

use crate::domain::{AnimeRecord, FavoriteSet, UserId, UserProfile};
use crate::repositories::{FavoritesCacheRepository, ProfileStore};
use crate::session::SessionContext;

/// Externally observable phase of the favorites state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoritesPhase {
    Empty,
    Loading,
    Ready,
}

enum FavoritesState {
    Empty,
    Loading,
    Ready(FavoriteSet),
}

struct Inner {
    identity: Option<UserId>,
    state: FavoritesState,
    /// Bumped on every reset; in-flight loads carry the generation they
    /// started under and are discarded if it moved on
    generation: u64,
}

pub struct FavoritesService {
    inner: RwLock<Inner>,
    cache: Arc<dyn FavoritesCacheRepository>,
    profiles: Arc<dyn ProfileStore>,
}

impl FavoritesService {
    pub fn new(
        cache: Arc<dyn FavoritesCacheRepository>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            inner: RwLock::new(Inner {
                identity: None,
                state: FavoritesState::Empty,
                generation: 0,
            }),
            cache,
            profiles,
        }
    }

    /// Wire to session transitions: synchronous reset, then the remote load
    /// in a background task. Requires a running tokio runtime.
    pub fn attach(self: &Arc<Self>, session: &SessionContext) {
        let service = Arc::clone(self);
        session.subscribe(move |identity| {
            let generation = service.reset(identity);
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service.load(generation).await;
            });
        });
    }

    /// Synchronous half of an identity transition. In-memory favorites are
    /// dropped unconditionally; with a new identity present the machine
    /// lands in Loading, otherwise in Empty. Returns the generation token
    /// the follow-up `load` must present.
    pub fn reset(&self, identity: Option<UserId>) -> u64 {
        let mut inner = self.inner.write().unwrap();
        inner.generation += 1;
        inner.state = match identity {
            Some(_) => FavoritesState::Loading,
            None => FavoritesState::Empty,
        };
        inner.identity = identity;
        inner.generation
    }

    /// Remote load for the identity current at `reset` time. A stale
    /// generation means another transition happened meanwhile; the result
    /// is discarded without touching state.
    pub async fn load(&self, generation: u64) {
        let identity = {
            let inner = self.inner.read().unwrap();
            if inner.generation != generation {
                return;
            }
            inner.identity.clone()
        };

        let Some(identity) = identity else {
            return;
        };

        let set = self.load_for(&identity).await;

        let mut inner = self.inner.write().unwrap();
        if inner.generation != generation {
            tracing::debug!(
                identity = %identity,
                "Discarding stale favorites load"
            );
            return;
        }
        inner.state = FavoritesState::Ready(set);
    }

    async fn load_for(&self, identity: &UserId) -> FavoriteSet {
        match self.profiles.fetch_profile(identity).await {
            Ok(Some(doc)) => match UserProfile::favorites_projection(&doc.data) {
                Some(titles) => {
                    let cached = self.load_cached(identity);
                    let (set, missing) = FavoriteSet::hydrate(&titles, cached);
                    if !missing.is_empty() {
                        tracing::warn!(
                            identity = %identity,
                            missing = missing.len(),
                            "Remote favorites reference titles with no cached record"
                        );
                    }
                    tracing::info!(
                        identity = %identity,
                        count = set.len(),
                        "Loaded favorites from remote profile"
                    );
                    set
                }
                None => {
                    tracing::warn!(
                        identity = %identity,
                        "Profile document has no readable favorites, falling back to local cache"
                    );
                    self.fallback_to_cache(identity)
                }
            },
            Ok(None) => {
                tracing::info!(
                    identity = %identity,
                    "No remote profile document, falling back to local cache"
                );
                self.fallback_to_cache(identity)
            }
            Err(e) => {
                tracing::warn!(
                    identity = %identity,
                    error = %e,
                    "Remote favorites load failed, falling back to local cache"
                );
                self.fallback_to_cache(identity)
            }
        }
    }

    fn fallback_to_cache(&self, identity: &UserId) -> FavoriteSet {
        FavoriteSet::from_records(self.load_cached(identity))
    }

    fn load_cached(&self, identity: &UserId) -> Vec<AnimeRecord> {
        match self.cache.load(identity) {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(identity = %identity, error = %e, "Error loading cached favorites");
                Vec::new()
            }
        }
    }

    /// Add if absent, remove if present. Returns true when the record is a
    /// favorite after the call.
    ///
    /// The mutation and the local-cache persist happen synchronously under
    /// the state lock; the remote push of the titles projection is
    /// best-effort and its failure is logged, never surfaced.
    pub async fn toggle_favorite(&self, record: AnimeRecord) -> bool {
        let (identity, now_favorite, titles) = {
            let mut inner = self.inner.write().unwrap();

            let Some(identity) = inner.identity.clone() else {
                tracing::warn!("Cannot toggle favorite - no user signed in");
                return false;
            };

            let mut set = match std::mem::replace(&mut inner.state, FavoritesState::Empty) {
                FavoritesState::Ready(set) => set,
                // A toggle while still Loading acts on what the user sees
                _ => FavoriteSet::new(),
            };

            let now_favorite = set.toggle(record);

            if let Err(e) = self.cache.store(&identity, set.records()) {
                tracing::warn!(identity = %identity, error = %e, "Error saving favorites");
            }

            let titles = set.titles();
            inner.state = FavoritesState::Ready(set);
            (identity, now_favorite, titles)
        };

        if let Err(e) = self.profiles.update_favorites(&identity, &titles).await {
            tracing::warn!(
                identity = %identity,
                error = %e,
                "Failed to push favorites to remote profile"
            );
        }

        now_favorite
    }

    /// O(1)-expected membership by catalog ID.
    pub fn is_favorite(&self, record: &AnimeRecord) -> bool {
        match &self.inner.read().unwrap().state {
            FavoritesState::Ready(set) => set.contains(record),
            _ => false,
        }
    }

    pub fn favorites(&self) -> Vec<AnimeRecord> {
        match &self.inner.read().unwrap().state {
            FavoritesState::Ready(set) => set.records().to_vec(),
            _ => Vec::new(),
        }
    }

    pub fn phase(&self) -> FavoritesPhase {
        match self.inner.read().unwrap().state {
            FavoritesState::Empty => FavoritesPhase::Empty,
            FavoritesState::Loading => FavoritesPhase::Loading,
            FavoritesState::Ready(_) => FavoritesPhase::Ready,
        }
    }
}
