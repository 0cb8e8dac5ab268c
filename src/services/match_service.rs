// src/services/match_service.rs
//
// Common-interest matching over the profile roster.
//
// Scoring is deliberately simple set intersection on favorite titles,
// computed fresh on every request; nothing is cached across calls.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{MatchResult, UserProfile};
use crate::error::{AppError, AppResult};
use crate::repositories::ProfileStore;
use crate::session::SessionContext;

pub struct MatchService {
    profiles: Arc<dyn ProfileStore>,
    session: Arc<SessionContext>,
}

impl MatchService {
    pub fn new(profiles: Arc<dyn ProfileStore>, session: Arc<SessionContext>) -> Self {
        Self { profiles, session }
    }

    /// Compute ranked matches for the current user.
    ///
    /// Titles match by exact string equality; "Naruto" and "naruto" are
    /// distinct. Equal scores keep roster-encounter order (stable sort) -
    /// implementation-defined, not a product guarantee.
    pub async fn compute_matches(&self) -> AppResult<Vec<MatchResult>> {
        let current = self
            .session
            .current_identity()
            .ok_or(AppError::NotAuthenticated)?;

        let doc = self
            .profiles
            .fetch_profile(&current)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Error fetching own profile");
                AppError::ProfileNotFound
            })?
            .ok_or(AppError::ProfileNotFound)?;

        let my_titles =
            UserProfile::favorites_projection(&doc.data).ok_or(AppError::ProfileNotFound)?;
        let mine: HashSet<&str> = my_titles.iter().map(String::as_str).collect();

        let roster = self
            .profiles
            .scan_profiles()
            .await
            .map_err(|e| AppError::RosterLoadFailed(e.to_string()))?;

        let mut matches = Vec::new();
        for entry in roster {
            if entry.user_id == current {
                continue;
            }

            let profile = match UserProfile::decode(&entry.data) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::debug!(
                        user = %entry.user_id,
                        error = %e,
                        "Skipping malformed roster entry"
                    );
                    continue;
                }
            };

            // Shared titles keep the other user's list order
            let shared_titles: Vec<String> = profile
                .favorite_anime
                .iter()
                .filter(|title| mine.contains(title.as_str()))
                .cloned()
                .collect();

            if shared_titles.is_empty() {
                continue;
            }

            let score = shared_titles.len();
            matches.push(MatchResult {
                user_id: entry.user_id,
                username: profile.username,
                shared_titles,
                score,
            });
        }

        matches.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::info!(
            identity = %current,
            matches = matches.len(),
            "Match computation completed"
        );

        Ok(matches)
    }
}
