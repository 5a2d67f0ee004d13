//! Fuzzy music catalog matching

mod catalog;
pub mod similarity;

pub use catalog::{
    CatalogEntry, CatalogMatcher, FieldScores, ScoredEntry, ALBUM_WEIGHT, DEFAULT_LIMIT,
    DEFAULT_THRESHOLD,
};
pub use similarity::{indel_distance, ratio, token_set_ratio};
