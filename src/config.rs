//! Configuration for the command parser and catalog matcher
//!
//! Sources, lowest priority first: built-in defaults, a JSON file, then
//! environment variables. The CLI applies its flags on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::command::Vocabulary;
use crate::error::{Result, VocalError};
use crate::matcher::{DEFAULT_LIMIT, DEFAULT_THRESHOLD};

pub const ENV_THRESHOLD: &str = "FUZZY_THRESHOLD";
pub const ENV_LIMIT: &str = "MATCH_LIMIT";
pub const ENV_VOCABULARY: &str = "VOCABULARY_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocalConfig {
    /// Minimum similarity (0-100) for a catalog match
    #[serde(default = "default_threshold")]
    pub fuzzy_threshold: u8,
    /// Number of ranked alternatives
    #[serde(default = "default_limit")]
    pub match_limit: usize,
    /// JSON vocabulary replacing the built-in one
    #[serde(default)]
    pub vocabulary_path: Option<PathBuf>,
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for VocalConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_threshold(),
            match_limit: default_limit(),
            vocabulary_path: None,
        }
    }
}

impl VocalConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_vars(|key| std::env::var(key).ok())
    }

    /// Load from a JSON file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = VocalError::read_file(path)?;
        let config: VocalConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub fn with_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_THRESHOLD) {
            let value: u32 = raw.trim().parse().map_err(|_| VocalError::InvalidConfig {
                key: ENV_THRESHOLD.to_string(),
                reason: format!("'{}' is not an integer", raw),
            })?;
            self.fuzzy_threshold =
                u8::try_from(value).map_err(|_| VocalError::InvalidThreshold { value })?;
        }

        if let Some(raw) = lookup(ENV_LIMIT) {
            self.match_limit = raw.trim().parse().map_err(|_| VocalError::InvalidConfig {
                key: ENV_LIMIT.to_string(),
                reason: format!("'{}' is not a positive integer", raw),
            })?;
        }

        if let Some(raw) = lookup(ENV_VOCABULARY) {
            if !raw.trim().is_empty() {
                self.vocabulary_path = Some(PathBuf::from(raw.trim()));
            }
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fuzzy_threshold > 100 {
            return Err(VocalError::InvalidThreshold {
                value: u32::from(self.fuzzy_threshold),
            });
        }
        if self.match_limit == 0 {
            return Err(VocalError::InvalidLimit);
        }
        Ok(())
    }

    /// The configured vocabulary, or the built-in one
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary_path {
            Some(path) => Vocabulary::load(path),
            None => Ok(Vocabulary::default()),
        }
    }
}
