//! Intent classification for transcribed utterances
//!
//! Maps normalized text to a playback intent using the ordered trigger
//! table of a [`Vocabulary`].

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::vocabulary::{Disambiguation, Vocabulary};
use crate::error::{Result, VocalError};

/// Playback intent detected in an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    Play,
    Stop,
    Pause,
    Resume,
    Next,
    Previous,
    Unknown,
}

impl Intent {
    pub const ALL: [Intent; 7] = [
        Intent::Play,
        Intent::Stop,
        Intent::Pause,
        Intent::Resume,
        Intent::Next,
        Intent::Previous,
        Intent::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Play => "PLAY",
            Intent::Stop => "STOP",
            Intent::Pause => "PAUSE",
            Intent::Resume => "RESUME",
            Intent::Next => "NEXT",
            Intent::Previous => "PREVIOUS",
            Intent::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = VocalError;

    fn from_str(s: &str) -> Result<Self> {
        Intent::ALL
            .iter()
            .copied()
            .find(|intent| intent.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VocalError::InvalidConfig {
                key: "intent".to_string(),
                reason: format!("unknown intent '{}'", s),
            })
    }
}

/// Lowercase and trim an utterance
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| VocalError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

struct CompiledRule {
    intent: Intent,
    triggers: Vec<Regex>,
}

impl CompiledRule {
    fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|t| t.is_match(text))
    }
}

struct CompiledDisambiguation {
    trigger: Regex,
    track_words: Regex,
    when_followed: Intent,
    otherwise: Intent,
}

impl CompiledDisambiguation {
    fn compile(rule: &Disambiguation) -> Result<Self> {
        Ok(Self {
            trigger: compile(&rule.trigger)?,
            track_words: compile(&rule.track_words)?,
            when_followed: rule.when_followed,
            otherwise: rule.otherwise,
        })
    }

    /// `None` when the shared trigger does not occur at all
    fn resolve(&self, text: &str) -> Option<Intent> {
        let found = self.trigger.find(text)?;
        if self.track_words.is_match(&text[found.end()..]) {
            Some(self.when_followed)
        } else {
            Some(self.otherwise)
        }
    }
}

/// Total classifier over any input text
pub struct IntentClassifier {
    rules: Vec<CompiledRule>,
    disambiguation: Option<CompiledDisambiguation>,
}

impl IntentClassifier {
    /// Compile the trigger table of a vocabulary
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let rules = vocabulary
            .rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    intent: rule.intent,
                    triggers: rule
                        .triggers
                        .iter()
                        .map(|t| compile(t))
                        .collect::<Result<Vec<_>>>()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let disambiguation = vocabulary
            .disambiguation
            .as_ref()
            .map(CompiledDisambiguation::compile)
            .transpose()?;

        Ok(Self {
            rules,
            disambiguation,
        })
    }

    /// Intents in the order they are tried
    pub fn priority(&self) -> Vec<Intent> {
        self.rules.iter().map(|r| r.intent).collect()
    }

    /// Classify an utterance. Empty text is `Unknown`.
    pub fn classify(&self, text: &str) -> Intent {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Intent::Unknown;
        }

        if let Some(intent) = self.match_table(&normalized) {
            return intent;
        }

        // Several words and no control verb: most likely a track name
        if normalized.split_whitespace().count() > 1 {
            Intent::Play
        } else {
            Intent::Unknown
        }
    }

    fn match_table(&self, text: &str) -> Option<Intent> {
        let mut slotted = false;

        for rule in &self.rules {
            if let Some(shared) = &self.disambiguation {
                if shared.otherwise == rule.intent && !slotted {
                    slotted = true;
                    if let Some(intent) = shared.resolve(text) {
                        return Some(intent);
                    }
                }
            }
            if rule.matches(text) {
                return Some(rule.intent);
            }
        }

        // The shared trigger's intent has no row of its own: try it last
        match &self.disambiguation {
            Some(shared) if !slotted => shared.resolve(text),
            _ => None,
        }
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(&Vocabulary::default()).expect("built-in vocabulary patterns are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::vocabulary::IntentRule;

    #[test]
    fn test_empty_is_unknown() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.classify(""), Intent::Unknown);
        assert_eq!(classifier.classify("   "), Intent::Unknown);
    }

    #[test]
    fn test_single_unmatched_token() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.classify("xyz"), Intent::Unknown);
    }

    #[test]
    fn test_multi_word_defaults_to_play() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.classify("bohemian rhapsody"), Intent::Play);
    }

    #[test]
    fn test_passe_disambiguation() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.classify("passe"), Intent::Next);
        assert_eq!(classifier.classify("passe à la suite"), Intent::Next);
        assert_eq!(classifier.classify("passe la chanson imagine"), Intent::Play);
        assert_eq!(classifier.classify("passer la musique de queen"), Intent::Play);
        // Track word before the trigger does not count
        assert_eq!(classifier.classify("cette musique passe"), Intent::Next);
    }

    #[test]
    fn test_word_boundaries() {
        let classifier = IntentClassifier::default();
        // "relance" is RESUME, not PLAY through "lance"
        assert_eq!(classifier.classify("relance"), Intent::Resume);
        assert_eq!(classifier.classify("mets en pause"), Intent::Pause);
    }

    #[test]
    fn test_play_outranks_bare_pause() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.classify("joue la chanson pause café"), Intent::Play);
        assert_eq!(classifier.classify("mets pause café"), Intent::Play);
        assert_eq!(classifier.classify("suspends la musique"), Intent::Pause);
    }

    #[test]
    fn test_table_order_is_priority() {
        let vocabulary = Vocabulary {
            rules: vec![
                IntentRule::new(Intent::Stop, &[r"\bhalt\b"]),
                IntentRule::new(Intent::Pause, &[r"\bhalt\b"]),
            ],
            disambiguation: None,
            stop_words: vec![],
        };
        let classifier = IntentClassifier::new(&vocabulary).unwrap();
        assert_eq!(classifier.priority(), vec![Intent::Stop, Intent::Pause]);
        assert_eq!(classifier.classify("halt"), Intent::Stop);
    }

    #[test]
    fn test_disambiguation_without_slot() {
        let vocabulary = Vocabulary {
            rules: vec![IntentRule::new(Intent::Stop, &[r"\bstop\b"])],
            disambiguation: Some(Disambiguation {
                trigger: r"\bpasse\b".to_string(),
                track_words: r"\bchanson\b".to_string(),
                when_followed: Intent::Play,
                otherwise: Intent::Next,
            }),
            stop_words: vec![],
        };
        let classifier = IntentClassifier::new(&vocabulary).unwrap();
        assert_eq!(classifier.classify("passe"), Intent::Next);
        assert_eq!(classifier.classify("stop"), Intent::Stop);
    }

    #[test]
    fn test_invalid_pattern() {
        let vocabulary = Vocabulary {
            rules: vec![IntentRule::new(Intent::Stop, &["(unclosed"])],
            disambiguation: None,
            stop_words: vec![],
        };
        let err = IntentClassifier::new(&vocabulary).err().unwrap();
        assert_eq!(err.error_code(), "INVALID_PATTERN");
    }

    #[test]
    fn test_intent_from_str() {
        assert_eq!("play".parse::<Intent>().unwrap(), Intent::Play);
        assert_eq!("PREVIOUS".parse::<Intent>().unwrap(), Intent::Previous);
        assert!("rewind".parse::<Intent>().is_err());
        assert_eq!(Intent::Resume.to_string(), "RESUME");
    }
}
