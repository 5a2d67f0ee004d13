//! Track query extraction
//!
//! Strips command and filler vocabulary from a PLAY utterance to leave the
//! words that name a track, an artist or an album.

use std::collections::HashSet;

use super::intent::normalize;
use super::vocabulary::Vocabulary;

/// Shortest residual (in characters) worth searching for
pub const MIN_QUERY_CHARS: usize = 2;

/// Keep word characters and whitespace, as used for stop-word comparison
pub fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Removes stop words from an utterance
#[derive(Debug, Clone)]
pub struct QueryExtractor {
    stop_words: HashSet<String>,
}

impl QueryExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        // Stored stripped: tokens are looked up as "sil", not "s'il"
        let stop_words = vocabulary
            .stop_words
            .iter()
            .map(|w| strip_punctuation(&w.to_lowercase()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { stop_words }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words
            .contains(&strip_punctuation(word).to_lowercase())
    }

    /// Residual query, or `None` when nothing usable is left
    pub fn extract(&self, text: &str) -> Option<String> {
        let normalized = normalize(text);

        let kept: Vec<&str> = normalized
            .split_whitespace()
            .filter(|token| {
                let clean = strip_punctuation(token);
                !clean.is_empty() && !self.stop_words.contains(&clean.to_lowercase())
            })
            .collect();

        let query = kept.join(" ");
        if query.chars().count() < MIN_QUERY_CHARS {
            return None;
        }
        Some(query)
    }
}

impl Default for QueryExtractor {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("queen!"), "queen");
        assert_eq!(strip_punctuation("s'il"), "sil");
        assert_eq!(strip_punctuation("ac/dc"), "acdc");
        assert_eq!(strip_punctuation("..."), "");
    }

    #[test]
    fn test_removes_command_words() {
        let extractor = QueryExtractor::default();
        assert_eq!(
            extractor.extract("joue la musique de queen").as_deref(),
            Some("queen")
        );
    }

    #[test]
    fn test_keeps_original_token_spelling() {
        let extractor = QueryExtractor::default();
        assert_eq!(
            extractor.extract("mets ac/dc, s'il te plaît").as_deref(),
            Some("ac/dc,")
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        let extractor = QueryExtractor::default();
        assert_eq!(
            extractor.extract("  joue   bohemian   rhapsody  ").as_deref(),
            Some("bohemian rhapsody")
        );
    }

    #[test]
    fn test_too_short_is_none() {
        let extractor = QueryExtractor::default();
        assert_eq!(extractor.extract("joue x"), None);
        assert_eq!(extractor.extract("joue la musique"), None);
        assert_eq!(extractor.extract(""), None);
        assert_eq!(extractor.extract("joue ?!"), None);
    }

    #[test]
    fn test_stop_word_lookup() {
        let extractor = QueryExtractor::default();
        assert!(extractor.is_stop_word("Joue"));
        assert!(extractor.is_stop_word("plaît."));
        assert!(!extractor.is_stop_word("queen"));
    }
}
