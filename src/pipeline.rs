//! Recognition pipeline
//!
//! Transcript → command → (PLAY with a query only) catalog match. The
//! catalog is reached through [`CatalogSource`] so the HTTP service, a
//! file or an in-memory list can stand behind it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::command::{Command, CommandParser, Intent};
use crate::config::VocalConfig;
use crate::error::{Result, VocalError};
use crate::matcher::{CatalogEntry, CatalogMatcher, ScoredEntry};

/// Supplies a fresh snapshot of the catalog on each call
pub trait CatalogSource {
    fn entries(&self) -> Result<Vec<CatalogEntry>>;
}

impl CatalogSource for [CatalogEntry] {
    fn entries(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.to_vec())
    }
}

impl CatalogSource for Vec<CatalogEntry> {
    fn entries(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.clone())
    }
}

/// Catalog stored as a JSON array of entries
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalog {
    fn entries(&self) -> Result<Vec<CatalogEntry>> {
        let content = VocalError::read_file(&self.path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&content)?;
        log::debug!("Read {} catalog entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }
}

/// Outcome of one utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    /// False only when there was no speech to interpret
    pub success: bool,
    pub transcript: Option<String>,
    pub intent: Intent,
    pub query: Option<String>,
    pub entry: Option<CatalogEntry>,
    /// User-facing explanation when nothing was resolved
    pub error: Option<String>,
}

impl Recognition {
    fn no_speech() -> Self {
        Self {
            success: false,
            transcript: None,
            intent: Intent::Unknown,
            query: None,
            entry: None,
            error: Some("No speech detected".to_string()),
        }
    }

    /// True when a PLAY query matched nothing above the threshold
    pub fn is_no_match(&self) -> bool {
        self.intent == Intent::Play && self.query.is_some() && self.entry.is_none()
    }
}

/// Parser and matcher built once and shared across calls
pub struct Recognizer {
    parser: CommandParser,
    matcher: CatalogMatcher,
    limit: usize,
}

impl Recognizer {
    pub fn new(config: &VocalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            parser: CommandParser::new(&config.vocabulary()?)?,
            matcher: CatalogMatcher::new(config.fuzzy_threshold)?,
            limit: config.match_limit,
        })
    }

    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    pub fn matcher(&self) -> &CatalogMatcher {
        &self.matcher
    }

    /// Parse a transcript without touching the catalog
    pub fn parse(&self, transcript: Option<&str>) -> Command {
        self.parser.parse(transcript)
    }

    /// Interpret a transcript, fetching the catalog only for PLAY queries.
    ///
    /// Errors come from the catalog source alone.
    pub fn recognize<S>(&self, transcript: Option<&str>, source: &S) -> Result<Recognition>
    where
        S: CatalogSource + ?Sized,
    {
        let transcript = match transcript.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(Recognition::no_speech()),
        };

        let command = self.parser.parse(Some(transcript));
        let mut recognition = Recognition {
            success: true,
            transcript: Some(transcript.to_string()),
            intent: command.intent,
            query: command.query.clone(),
            entry: None,
            error: None,
        };

        if let Some(query) = command.track_query() {
            let catalog = source.entries()?;
            match self.matcher.find_best(query, &catalog) {
                Some(entry) => recognition.entry = Some(entry.clone()),
                None => {
                    log::info!("No track found for '{}'", query);
                    recognition.error = Some(format!("No track found for '{}'", query));
                }
            }
        }

        Ok(recognition)
    }

    /// Ranked alternatives for a query, capped at the configured limit
    pub fn alternatives<S>(&self, query: &str, source: &S) -> Result<Vec<ScoredEntry>>
    where
        S: CatalogSource + ?Sized,
    {
        let catalog = source.entries()?;
        Ok(self.matcher.find_top_n(query, &catalog, self.limit))
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self {
            parser: CommandParser::default(),
            matcher: CatalogMatcher::default(),
            limit: crate::matcher::DEFAULT_LIMIT,
        }
    }
}
