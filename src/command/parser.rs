//! Command parser: intent plus track query in one pass

use serde::{Deserialize, Serialize};

use super::intent::{Intent, IntentClassifier};
use super::query::QueryExtractor;
use super::vocabulary::Vocabulary;
use crate::error::Result;

/// Structured command produced for one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub intent: Intent,
    /// Residual search text, only for PLAY
    pub query: Option<String>,
}

impl Command {
    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            query: None,
        }
    }

    /// Query to resolve against the catalog, if this command selects a track
    pub fn track_query(&self) -> Option<&str> {
        match self.intent {
            Intent::Play => self.query.as_deref(),
            _ => None,
        }
    }
}

/// Parses transcripts into commands
pub struct CommandParser {
    classifier: IntentClassifier,
    extractor: QueryExtractor,
}

impl CommandParser {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            classifier: IntentClassifier::new(vocabulary)?,
            extractor: QueryExtractor::new(vocabulary),
        })
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &QueryExtractor {
        &self.extractor
    }

    /// Parse a transcript. A missing transcript is an unknown command.
    pub fn parse(&self, text: Option<&str>) -> Command {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Command::unknown(),
        };

        log::info!("Parsing command: '{}'", text.trim());

        let intent = self.classifier.classify(text);
        log::info!("Detected intent: {}", intent);

        let query = if intent == Intent::Play {
            let query = self.extractor.extract(text);
            log::info!("Extracted music query: {:?}", query);
            query
        } else {
            None
        };

        Command { intent, query }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self {
            classifier: IntentClassifier::default(),
            extractor: QueryExtractor::default(),
        }
    }
}
