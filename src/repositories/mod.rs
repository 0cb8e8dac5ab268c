// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls

pub mod favorites_cache_repository;
pub mod message_repository;
pub mod profile_store;

pub use favorites_cache_repository::{FavoritesCacheRepository, SqliteFavoritesCacheRepository};
pub use message_repository::{MessageRepository, SqliteMessageRepository};
pub use profile_store::{InMemoryProfileStore, ProfileStore};

#[cfg(test)]
pub use favorites_cache_repository::MockFavoritesCacheRepository;
#[cfg(test)]
pub use profile_store::MockProfileStore;
