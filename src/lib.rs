// src/lib.rs
// Animatch - Anime discovery, favorites sync, and common-interest matching
//
// Architecture:
// - Domain-centric: value types and invariants live in domain/
// - Explicit: no implicit behavior, no ambient globals
// - Local-first: the local favorites cache keeps the app usable when the
//   remote profile store is unreachable
// - External boundaries (metadata API, profile store, auth provider) are
//   traits; the core never depends on a concrete backend

pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;
pub mod session;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    AnimeRecord,
    FavoriteSet,
    MatchResult,
    MessageRecord,
    ProfileDocument,
    UserId,
    UserProfile,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{ApiError, ApiResult, AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    FavoritesCacheRepository,
    InMemoryProfileStore,
    MessageRepository,
    ProfileStore,
    SqliteFavoritesCacheRepository,
    SqliteMessageRepository,
};

// ============================================================================
// PUBLIC API - Session
// ============================================================================

pub use session::{AuthGateway, LocalAuthGateway, SessionContext};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AnimeCatalog,
    FavoritesPhase,
    // Favorites
    FavoritesService,
    // Catalog
    JikanCatalog,
    // Matching
    MatchService,
    // Profile
    ProfileService,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::JikanClient;

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, BrowseController, SearchController, SearchState, SectionState};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::Config;
