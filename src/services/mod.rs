// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod favorites_service;
pub mod match_service;
pub mod profile_service;


// Re-export all services and their types
pub use catalog_service::{AnimeCatalog, JikanCatalog};

pub use favorites_service::{FavoritesPhase, FavoritesService};

pub use match_service::MatchService;

pub use profile_service::ProfileService;

#[cfg(test)]
pub use catalog_service::MockAnimeCatalog;
