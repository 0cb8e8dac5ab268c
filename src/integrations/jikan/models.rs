// src/integrations/jikan/models.rs
//
// Wire DTOs for the Jikan anime listing endpoint.
//
// The upstream API omits optional fields inconsistently, so everything
// beyond `mal_id` and `title` decodes to an explicit absent value instead
// of failing the whole response.

use serde::Deserialize;

use crate::domain::AnimeRecord;

/// Top-level response of `GET /anime`
#[derive(Debug, Deserialize)]
pub struct AnimeListResponse {
    pub data: Vec<AnimeEntry>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One anime record as returned on the wire (snake_case fields)
#[derive(Debug, Deserialize)]
pub struct AnimeEntry {
    pub mal_id: i64,
    pub title: String,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub images: Option<ImageSet>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub airing: bool,
    #[serde(default)]
    pub genres: Vec<GenreEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub jpg: Option<ImageUrls>,
}

#[derive(Debug, Deserialize)]
pub struct ImageUrls {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenreEntry {
    pub mal_id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub last_visible_page: Option<u32>,
    #[serde(default)]
    pub has_next_page: bool,
}

impl From<AnimeEntry> for AnimeRecord {
    fn from(entry: AnimeEntry) -> Self {
        let jpg = entry.images.and_then(|i| i.jpg);
        AnimeRecord {
            id: entry.mal_id,
            title: entry.title,
            title_english: entry.title_english,
            title_japanese: entry.title_japanese,
            image_url: jpg.as_ref().and_then(|j| j.image_url.clone()),
            large_image_url: jpg.as_ref().and_then(|j| j.large_image_url.clone()),
            score: entry.score,
            episodes: entry.episodes,
            status: entry.status,
            airing: entry.airing,
            genres: entry.genres.into_iter().map(|g| g.name).collect(),
        }
    }
}
