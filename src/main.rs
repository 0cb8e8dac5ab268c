// src/main.rs
//
// Demo binary: wires the core against the real metadata API, an on-disk
// favorites cache, and in-process auth/profile backends.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use animatch::application::{AppState, BrowseController, SearchController};
use animatch::config::Config;
use animatch::db::{create_connection_pool, initialize_database};
use animatch::repositories::{
    InMemoryProfileStore, SqliteFavoritesCacheRepository, SqliteMessageRepository,
};
use animatch::services::{FavoritesService, JikanCatalog, MatchService, ProfileService};
use animatch::session::{LocalAuthGateway, SessionContext};
use animatch::{JikanClient, UserId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // 1. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool(config.data_dir.as_deref())?);
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }

    let client = Arc::new(JikanClient::new(
        config.metadata_api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    ));

    // 2. REPOSITORIES
    let favorites_cache = Arc::new(SqliteFavoritesCacheRepository::new(pool.clone()));
    let message_repository = Arc::new(SqliteMessageRepository::new(pool.clone()));
    let profile_store = Arc::new(InMemoryProfileStore::new());

    // 3. SESSION
    let gateway = LocalAuthGateway::new();
    let session = SessionContext::new();
    session.bind(&gateway);

    // 4. SERVICES
    let catalog = Arc::new(JikanCatalog::new(client));
    let favorites_service = Arc::new(FavoritesService::new(
        favorites_cache,
        profile_store.clone(),
    ));
    favorites_service.attach(&session);

    let match_service = Arc::new(MatchService::new(profile_store.clone(), session.clone()));
    let profile_service = Arc::new(ProfileService::new(profile_store.clone(), session.clone()));

    let browse = Arc::new(BrowseController::new(catalog.clone()));
    let search = Arc::new(SearchController::new(catalog));

    let state = AppState {
        session,
        favorites_service,
        match_service,
        profile_service,
        message_repository,
        browse,
        search,
    };

    // Demo flow: sign in, create a profile, browse, favorite the top result
    gateway.sign_in(UserId::from("demo-user"));
    state
        .profile_service
        .create_profile("demo".to_string(), String::new(), Vec::new())
        .await?;

    state.browse.refresh_all().await;

    for (name, section) in [
        ("top", state.browse.top()),
        ("airing", state.browse.airing()),
        ("upcoming", state.browse.upcoming()),
    ] {
        match &section.error {
            Some(error) => tracing::warn!(section = name, error = %error, "Section failed"),
            None => {
                tracing::info!(section = name, count = section.records.len(), "Section loaded");
                for record in section.records.iter().take(5) {
                    tracing::info!(section = name, id = record.id, title = %record.title);
                }
            }
        }
    }

    if let Some(first) = state.browse.top().records.first() {
        let now_favorite = state.favorites_service.toggle_favorite(first.clone()).await;
        tracing::info!(title = %first.title, now_favorite, "Toggled favorite");
    }

    match state.match_service.compute_matches().await {
        Ok(matches) => tracing::info!(count = matches.len(), "Computed matches"),
        Err(e) => tracing::warn!(error = %e, "Match computation failed"),
    }

    Ok(())
}
