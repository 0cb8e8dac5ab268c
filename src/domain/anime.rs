// src/domain/anime.rs
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Normalized anime record from the metadata provider.
///
/// Identity is the numeric catalog ID alone: the upstream API returns stale
/// or partially-null fields, so two records with the same ID are the same
/// anime regardless of other field differences at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeRecord {
    /// Catalog ID (sole identity key)
    pub id: i64,

    /// Primary title
    pub title: String,

    /// Localized title variants (absent more often than not)
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,

    /// Poster image URLs
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,

    /// Community score, 0-10
    pub score: Option<f64>,

    /// Episode count (unknown for ongoing shows)
    pub episodes: Option<u32>,

    /// Airing status as reported by the provider
    pub status: Option<String>,
    pub airing: bool,

    /// Genre tags
    pub genres: Vec<String>,
}

impl PartialEq for AnimeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AnimeRecord {}

impl Hash for AnimeRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl AnimeRecord {
    /// All known title variants, primary first.
    pub fn title_variants(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.title_english.as_deref())
            .chain(self.title_japanese.as_deref())
    }
}
