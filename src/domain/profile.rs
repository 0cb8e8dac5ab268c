// src/domain/profile.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::identity::UserId;
use crate::error::AppResult;

/// Remote profile document body, keyed by user identity in the `profiles`
/// collection.
///
/// `favorite_anime` is the denormalized titles projection of the user's
/// favorite set; full records live only in the local cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub bio: String,
    pub favorite_anime: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(username: String, bio: String, favorite_anime: Vec<String>) -> Self {
        Self {
            username,
            bio,
            favorite_anime,
            created_at: Utc::now(),
        }
    }

    /// Strict decode from a raw document. Fails closed on missing required
    /// fields or type mismatches; never substitutes defaults.
    pub fn decode(value: &Value) -> AppResult<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn encode(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Tolerant read of just the favorites projection from a raw document.
    ///
    /// Used where a malformed profile must degrade rather than fail the
    /// whole operation (favorites load fallback, roster scan skips).
    pub fn favorites_projection(value: &Value) -> Option<Vec<String>> {
        let titles = value.get("favoriteAnime")?.as_array()?;
        titles
            .iter()
            .map(|t| t.as_str().map(str::to_string))
            .collect()
    }
}

/// A raw profile document as returned by the store: identity plus
/// loosely-typed body. Decoding to [`UserProfile`] is a separate, explicit
/// step so callers choose between failing closed and skipping.
#[derive(Debug, Clone)]
pub struct ProfileDocument {
    pub user_id: UserId,
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_well_formed_document() {
        let doc = json!({
            "username": "rei",
            "bio": "first child",
            "favoriteAnime": ["Evangelion"],
            "createdAt": "2025-03-22T10:00:00Z",
        });

        let profile = UserProfile::decode(&doc).unwrap();
        assert_eq!(profile.username, "rei");
        assert_eq!(profile.favorite_anime, vec!["Evangelion"]);
    }

    #[test]
    fn test_decode_fails_closed_on_missing_field() {
        let doc = json!({
            "username": "rei",
            "favoriteAnime": ["Evangelion"],
            "createdAt": "2025-03-22T10:00:00Z",
        });

        assert!(UserProfile::decode(&doc).is_err());
    }

    #[test]
    fn test_decode_fails_closed_on_type_mismatch() {
        let doc = json!({
            "username": "rei",
            "bio": "first child",
            "favoriteAnime": "not-an-array",
            "createdAt": "2025-03-22T10:00:00Z",
        });

        assert!(UserProfile::decode(&doc).is_err());
    }

    #[test]
    fn test_favorites_projection_tolerates_partial_document() {
        let doc = json!({ "favoriteAnime": ["Naruto", "Bleach"] });

        let titles = UserProfile::favorites_projection(&doc).unwrap();
        assert_eq!(titles, vec!["Naruto", "Bleach"]);
    }

    #[test]
    fn test_favorites_projection_rejects_non_string_entries() {
        let doc = json!({ "favoriteAnime": ["Naruto", 42] });

        assert!(UserProfile::favorites_projection(&doc).is_none());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let profile = UserProfile::new(
            "asuka".to_string(),
            "second child".to_string(),
            vec!["Evangelion".to_string()],
        );

        let value = profile.encode().unwrap();
        let decoded = UserProfile::decode(&value).unwrap();
        assert_eq!(decoded, profile);
    }
}
