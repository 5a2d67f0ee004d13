//! Command vocabulary
//!
//! Trigger table, the passe/passer disambiguation rule and the stop-word
//! list, kept as data so another language can be added without touching
//! the classifier or the extractor.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::intent::Intent;
use crate::error::{Result, VocalError};

/// One row of the ordered trigger table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub intent: Intent,
    /// Regular expressions matched against the normalized utterance
    pub triggers: Vec<String>,
}

impl IntentRule {
    pub fn new(intent: Intent, triggers: &[&str]) -> Self {
        Self {
            intent,
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A trigger shared by two intents, resolved by what follows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disambiguation {
    /// Ambiguous trigger pattern
    pub trigger: String,
    /// Pattern that must appear after the trigger to pick `when_followed`
    pub track_words: String,
    pub when_followed: Intent,
    /// Intent whose table slot this rule occupies
    pub otherwise: Intent,
}

/// Bounded multilingual command vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Evaluated top to bottom, first match wins
    pub rules: Vec<IntentRule>,
    #[serde(default)]
    pub disambiguation: Option<Disambiguation>,
    /// Words dropped when extracting a track query
    #[serde(default)]
    pub stop_words: Vec<String>,
}

impl Vocabulary {
    /// Built-in French and English vocabulary
    pub fn french_english() -> Self {
        let rules = vec![
            // Only this phrase outranks PLAY, otherwise "mets" would claim it
            IntentRule::new(Intent::Pause, &[r"\bmets en pause\b"]),
            IntentRule::new(
                Intent::Play,
                &[
                    r"\b(joue|jouer)\b",
                    r"\b(mets|mettre)\b",
                    r"\b(lance|lancer)\b",
                    r"\bje veux (écouter|ecouter)\b",
                    r"\b(écouter|ecouter)\b",
                    r"\bplay\b",
                    r"\bfais jouer\b",
                ],
            ),
            IntentRule::new(
                Intent::Stop,
                &[
                    r"\bstop\b",
                    r"\b(arrête|arrete|arrêter|arreter)\b",
                    r"\bcoupe\b",
                    r"\b(termine|terminer)\b",
                    r"\bfin\b",
                ],
            ),
            IntentRule::new(
                Intent::Pause,
                &[r"\bpause\b", r"\b(suspends|suspendre)\b"],
            ),
            IntentRule::new(
                Intent::Resume,
                &[
                    r"\b(reprends|reprendre)\b",
                    r"\bcontinue\b",
                    r"\b(relance|relancer)\b",
                    r"\bresume\b",
                ],
            ),
            IntentRule::new(
                Intent::Next,
                &[
                    r"\b(suivant|suivante)\b",
                    r"\bskip\b",
                    r"\bnext\b",
                    r"\bprochaine?\b",
                ],
            ),
            IntentRule::new(
                Intent::Previous,
                &[
                    r"\b(précédent|precedent|précédente|precedente)\b",
                    r"\b(reviens|revenir)\b",
                    r"\bavant\b",
                    r"\bprevious\b",
                    r"\bback\b",
                ],
            ),
        ];

        let disambiguation = Disambiguation {
            trigger: r"\b(passe|passer)\b".to_string(),
            track_words: r"\b(musique|chanson|titre)\b".to_string(),
            when_followed: Intent::Play,
            otherwise: Intent::Next,
        };

        const STOP_WORDS: &[&str] = &[
            // French command verbs
            "joue", "jouer", "mets", "mettre", "lance", "lancer", "écouter", "ecouter",
            "fais", "passe", "passer", "veux",
            // French articles and fillers
            "la", "le", "les", "un", "une", "de", "du", "des",
            "musique", "chanson", "titre", "morceau",
            // French politeness and pronouns
            "s'il", "te", "vous", "plait", "plaît", "je", "me", "moi",
            // English
            "play", "put", "listen", "want", "the", "a", "an", "some",
            "song", "track", "please", "i",
        ];

        Self {
            rules,
            disambiguation: Some(disambiguation),
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a vocabulary from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = VocalError::read_file(path)?;
        let vocabulary: Vocabulary = serde_json::from_str(&content)?;
        log::info!(
            "Loaded vocabulary from {} ({} rules, {} stop words)",
            path.display(),
            vocabulary.rules.len(),
            vocabulary.stop_words.len()
        );
        Ok(vocabulary)
    }

    /// Save the vocabulary as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::french_english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_priority_order() {
        let order: Vec<Intent> = Vocabulary::default().rules.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::Pause,
                Intent::Play,
                Intent::Stop,
                Intent::Pause,
                Intent::Resume,
                Intent::Next,
                Intent::Previous
            ]
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");

        let mut vocabulary = Vocabulary::default();
        vocabulary.stop_words.push("bitte".to_string());
        vocabulary.save(&path).unwrap();

        let loaded = Vocabulary::load(&path).unwrap();
        assert_eq!(loaded, vocabulary);
    }

    #[test]
    fn test_optional_sections_default() {
        let json = r#"{"rules": [{"intent": "STOP", "triggers": ["\\bhalt\\b"]}]}"#;
        let vocabulary: Vocabulary = serde_json::from_str(json).unwrap();
        assert!(vocabulary.disambiguation.is_none());
        assert!(vocabulary.stop_words.is_empty());
    }
}
