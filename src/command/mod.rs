//! Voice command interpretation
//!
//! This module provides:
//! - Intent classification over an ordered trigger table
//! - Track query extraction for PLAY commands
//! - The editable French/English vocabulary both rely on

mod intent;
mod parser;
mod query;
mod vocabulary;

pub use intent::{normalize, Intent, IntentClassifier};
pub use parser::{Command, CommandParser};
pub use query::{strip_punctuation, QueryExtractor, MIN_QUERY_CHARS};
pub use vocabulary::{Disambiguation, IntentRule, Vocabulary};
