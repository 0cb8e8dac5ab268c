// src/services/profile_service.rs
//
// Profile document operations for the signed-in user.

use std::sync::Arc;

use crate::domain::{UserProfile, UserId};
use crate::error::{AppError, AppResult};
use crate::repositories::ProfileStore;
use crate::session::SessionContext;

pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
    session: Arc<SessionContext>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileStore>, session: Arc<SessionContext>) -> Self {
        Self { profiles, session }
    }

    fn current_identity(&self) -> AppResult<UserId> {
        self.session
            .current_identity()
            .ok_or(AppError::NotAuthenticated)
    }

    /// Create (or overwrite) the current user's profile document.
    pub async fn create_profile(
        &self,
        username: String,
        bio: String,
        favorite_anime: Vec<String>,
    ) -> AppResult<()> {
        let user_id = self.current_identity()?;
        let profile = UserProfile::new(username, bio, favorite_anime);

        self.profiles.create_profile(&user_id, &profile).await?;

        tracing::info!(identity = %user_id, "Profile created");
        Ok(())
    }

    /// Fetch and strictly decode the current user's profile.
    pub async fn fetch_profile(&self) -> AppResult<UserProfile> {
        let user_id = self.current_identity()?;

        let doc = self
            .profiles
            .fetch_profile(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        UserProfile::decode(&doc.data)
    }
}
