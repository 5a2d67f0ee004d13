//! Vocal - Voice Command Interpretation
//!
//! Turns a transcribed utterance into a playback command and, for PLAY
//! commands, resolves the spoken track query against a music catalog.
//!
//! # Architecture
//!
//! Three components run in sequence for each utterance:
//! - Intent classifier: ordered trigger table over the normalized text
//! - Query extractor: strips command and filler words from PLAY utterances
//! - Catalog matcher: multi-field fuzzy scoring against catalog entries
//!
//! All three are pure and hold only immutable configuration, so a single
//! instance can be shared across threads.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod matcher;
pub mod pipeline;

pub use command::{Command, CommandParser, Intent, IntentClassifier, QueryExtractor, Vocabulary};
pub use config::VocalConfig;
pub use error::{Result, VocalError};
pub use matcher::{CatalogEntry, CatalogMatcher, ScoredEntry};
pub use pipeline::{CatalogSource, JsonCatalog, Recognition, Recognizer};
