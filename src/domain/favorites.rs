// src/domain/favorites.rs
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::anime::AnimeRecord;

/// A user's favorite anime, unique by catalog ID, in insertion order.
///
/// `insert` and `remove` are idempotent: inserting a present ID and removing
/// an absent ID are both no-ops. Membership checks go through an ID index so
/// `contains_id` stays O(1)-expected regardless of set size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<AnimeRecord>", into = "Vec<AnimeRecord>")]
pub struct FavoriteSet {
    records: Vec<AnimeRecord>,
    ids: HashSet<i64>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from records, dropping duplicate catalog IDs (first wins).
    pub fn from_records(records: Vec<AnimeRecord>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.insert(record);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn contains(&self, record: &AnimeRecord) -> bool {
        self.contains_id(record.id)
    }

    /// Add a record. Returns false if the ID was already present.
    pub fn insert(&mut self, record: AnimeRecord) -> bool {
        if !self.ids.insert(record.id) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Remove by catalog ID. Returns false if the ID was absent.
    pub fn remove(&mut self, id: i64) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.records.retain(|r| r.id != id);
        true
    }

    /// Add if absent, remove if present. Returns true when the record is a
    /// favorite after the call.
    pub fn toggle(&mut self, record: AnimeRecord) -> bool {
        if self.contains(&record) {
            self.remove(record.id);
            false
        } else {
            self.insert(record);
            true
        }
    }

    pub fn records(&self) -> &[AnimeRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimeRecord> {
        self.records.iter()
    }

    /// The denormalized wire representation stored on the remote profile
    /// document: primary titles only.
    pub fn titles(&self) -> Vec<String> {
        self.records.iter().map(|r| r.title.clone()).collect()
    }

    /// Rebuild a set from the remote titles projection, pulling full records
    /// out of the locally cached copy.
    ///
    /// The projection is lossy (titles carry no catalog ID), so a title with
    /// no cached record cannot be materialized; those titles are returned
    /// separately for the caller to log. Matching considers every known
    /// title variant of a cached record.
    pub fn hydrate(remote_titles: &[String], cached: Vec<AnimeRecord>) -> (Self, Vec<String>) {
        let mut set = Self::new();
        let mut missing = Vec::new();

        for title in remote_titles {
            let found = cached
                .iter()
                .find(|r| r.title_variants().any(|v| v == title));
            match found {
                Some(record) => {
                    set.insert(record.clone());
                }
                None => missing.push(title.clone()),
            }
        }

        (set, missing)
    }
}

impl From<Vec<AnimeRecord>> for FavoriteSet {
    fn from(records: Vec<AnimeRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<FavoriteSet> for Vec<AnimeRecord> {
    fn from(set: FavoriteSet) -> Self {
        set.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, title: &str) -> AnimeRecord {
        AnimeRecord {
            id,
            title: title.to_string(),
            title_english: None,
            title_japanese: None,
            image_url: None,
            large_image_url: None,
            score: None,
            episodes: None,
            status: None,
            airing: false,
            genres: Vec::new(),
        }
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = FavoriteSet::new();

        assert!(set.insert(record(1, "Naruto")));
        assert!(!set.insert(record(1, "Naruto")));

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_a_noop() {
        let mut set = FavoriteSet::from_records(vec![record(1, "Naruto")]);

        assert!(!set.remove(99));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_toggle_add_then_remove() {
        let mut set = FavoriteSet::new();

        assert!(set.toggle(record(7, "Bleach")));
        assert!(set.contains_id(7));

        assert!(!set.toggle(record(7, "Bleach")));
        assert!(!set.contains_id(7));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = FavoriteSet::new();
        set.insert(record(3, "C"));
        set.insert(record(1, "A"));
        set.insert(record(2, "B"));

        let titles = set.titles();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_from_records_drops_duplicate_ids() {
        let set = FavoriteSet::from_records(vec![
            record(1, "Naruto"),
            record(1, "Naruto (dup)"),
            record(2, "Bleach"),
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].title, "Naruto");
    }

    #[test]
    fn test_serde_round_trip_equal_by_id() {
        let set = FavoriteSet::from_records(vec![record(1, "Naruto"), record(2, "Bleach")]);

        let encoded = serde_json::to_string(&set).unwrap();
        let decoded: FavoriteSet = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.len(), set.len());
        for record in set.iter() {
            assert!(decoded.contains_id(record.id));
        }
    }

    #[test]
    fn test_hydrate_matches_title_variants_and_reports_missing() {
        let mut aot = record(16498, "Shingeki no Kyojin");
        aot.title_english = Some("Attack on Titan".to_string());
        let cached = vec![record(20, "Naruto"), aot];

        let remote = vec![
            "Naruto".to_string(),
            "Attack on Titan".to_string(),
            "Some Uncached Show".to_string(),
        ];

        let (set, missing) = FavoriteSet::hydrate(&remote, cached);

        assert_eq!(set.len(), 2);
        assert!(set.contains_id(20));
        assert!(set.contains_id(16498));
        assert_eq!(missing, vec!["Some Uncached Show"]);
    }
}
