// src/application/state.rs

use std::sync::Arc;

use crate::application::browse::BrowseController;
use crate::application::search::SearchController;
use crate::repositories::MessageRepository;
use crate::services::{FavoritesService, MatchService, ProfileService};
use crate::session::SessionContext;

/// Application state shared with the presentation layer.
/// All fields are Arc-wrapped for thread-safe sharing across screens.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub session: Arc<SessionContext>,
    pub favorites_service: Arc<FavoritesService>,
    pub match_service: Arc<MatchService>,
    pub profile_service: Arc<ProfileService>,
    pub message_repository: Arc<dyn MessageRepository>,
    pub browse: Arc<BrowseController>,
    pub search: Arc<SearchController>,
}
