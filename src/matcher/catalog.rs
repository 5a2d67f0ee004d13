//! Catalog matching
//!
//! Resolves a free-text music query against catalog entries. Two entry
//! points share the per-field scores but combine them differently:
//! [`CatalogMatcher::find_best`] for direct "play X" commands and
//! [`CatalogMatcher::find_top_n`] for listing alternatives.

use serde::{Deserialize, Deserializer, Serialize};

use super::similarity::token_set_ratio;
use crate::error::{Result, VocalError};

/// Default minimum score for a match
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Default number of ranked alternatives
pub const DEFAULT_LIMIT: usize = 5;

/// Album matches are a weaker signal than title or artist
pub const ALBUM_WEIGHT: f64 = 0.7;

/// One playable track, as supplied by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(alias = "titre")]
    pub title: String,
    #[serde(alias = "artiste")]
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default, alias = "duree_secondes", skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    #[serde(default, alias = "fichier_audio", skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(default, alias = "fichier_cover", skip_serializing_if = "Option::is_none")]
    pub cover_file: Option<String>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration_secs: None,
            audio_file: None,
            cover_file: None,
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// A catalog entry with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub entry: CatalogEntry,
    pub score: f64,
}

/// Similarity of a query to each field of an entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScores {
    pub title: f64,
    pub artist: f64,
    /// "artist title"
    pub artist_title: f64,
    /// "title artist"
    pub title_artist: f64,
    /// Already weighted by [`ALBUM_WEIGHT`]; 0 without an album
    pub album: f64,
}

impl FieldScores {
    /// Score every field. `query` must already be normalized.
    pub fn compute(query: &str, entry: &CatalogEntry) -> Self {
        let title = entry.title.to_lowercase();
        let artist = entry.artist.to_lowercase();

        let album = entry
            .album
            .as_deref()
            .filter(|a| !a.is_empty())
            .map(|a| token_set_ratio(query, &a.to_lowercase()) * ALBUM_WEIGHT)
            .unwrap_or(0.0);

        Self {
            title: token_set_ratio(query, &title),
            artist: token_set_ratio(query, &artist),
            artist_title: token_set_ratio(query, &format!("{} {}", artist, title)),
            title_artist: token_set_ratio(query, &format!("{} {}", title, artist)),
            album,
        }
    }

    /// Score used to pick a single track
    pub fn best(&self) -> f64 {
        self.title
            .max(self.artist)
            .max(self.artist_title)
            .max(self.title_artist)
            .max(self.album)
    }

    /// Coarser score used for ranked alternatives: no reversed combination, no album
    pub fn ranked(&self) -> f64 {
        self.title.max(self.artist).max(self.artist_title)
    }
}

fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

/// Stateless fuzzy matcher configured with a similarity threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogMatcher {
    threshold: u8,
}

impl CatalogMatcher {
    /// Create a matcher; the threshold must be within 0..=100
    pub fn new(threshold: u8) -> Result<Self> {
        if threshold > 100 {
            return Err(VocalError::InvalidThreshold {
                value: u32::from(threshold),
            });
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Best entry scoring at least the threshold
    pub fn find_best<'a>(&self, query: &str, catalog: &'a [CatalogEntry]) -> Option<&'a CatalogEntry> {
        self.find_best_scored(query, catalog).map(|(entry, _)| entry)
    }

    /// Like [`find_best`](Self::find_best), also returning the score
    pub fn find_best_scored<'a>(
        &self,
        query: &str,
        catalog: &'a [CatalogEntry],
    ) -> Option<(&'a CatalogEntry, f64)> {
        let query = normalize_query(query)?;
        if catalog.is_empty() {
            return None;
        }

        log::info!("Finding match for query: '{}'", query);

        // Zero-score entries never become the running best
        let mut best: Option<(&CatalogEntry, f64)> = None;
        let mut best_score = 0.0;

        for entry in catalog {
            let scores = FieldScores::compute(&query, entry);
            let score = scores.best();

            log::debug!(
                "'{}' by {}: title={:.1}, artist={:.1}, combined={:.1}, album={:.1}, best={:.1}",
                entry.title,
                entry.artist,
                scores.title,
                scores.artist,
                scores.artist_title.max(scores.title_artist),
                scores.album,
                score
            );

            // Strictly greater: earlier entries win ties
            if score > best_score {
                best_score = score;
                best = Some((entry, score));
            }
        }

        match best {
            Some((entry, score)) if score >= f64::from(self.threshold) => {
                log::info!(
                    "Best match: '{}' by {} (score: {:.1})",
                    entry.title,
                    entry.artist,
                    score
                );
                Some((entry, score))
            }
            _ => {
                log::info!("No match found above threshold {}", self.threshold);
                None
            }
        }
    }

    /// Up to `limit` entries at or above the threshold, highest score first
    pub fn find_top_n(&self, query: &str, catalog: &[CatalogEntry], limit: usize) -> Vec<ScoredEntry> {
        let Some(query) = normalize_query(query) else {
            return Vec::new();
        };

        let mut scored: Vec<ScoredEntry> = catalog
            .iter()
            .filter_map(|entry| {
                let score = FieldScores::compute(&query, entry).ranked();
                (score >= f64::from(self.threshold)).then(|| ScoredEntry {
                    entry: entry.clone(),
                    score,
                })
            })
            .collect();

        // Stable: catalog order among equal scores
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(limit);

        log::debug!("{} ranked matches for '{}'", scored.len(), query);
        scored
    }
}

impl Default for CatalogMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
