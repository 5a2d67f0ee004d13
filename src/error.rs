//! Error handling for Vocal
//!
//! Classification and matching are total and never fail. Errors only come
//! from the edges: configuration, vocabulary files and catalog files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Vocal operations
pub type Result<T> = std::result::Result<T, VocalError>;

/// Main error type for Vocal operations
#[derive(Error, Debug)]
pub enum VocalError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration Errors
    #[error("Invalid similarity threshold: {value} (expected 0-100)")]
    InvalidThreshold { value: u32 },

    #[error("Result limit must be at least 1")]
    InvalidLimit,

    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    // Vocabulary Errors
    #[error("Invalid trigger pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VocalError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            VocalError::FileNotFound { .. } => "FILE_NOT_FOUND",
            VocalError::FileReadError { .. } => "FILE_READ_ERROR",
            VocalError::InvalidThreshold { .. } => "INVALID_THRESHOLD",
            VocalError::InvalidLimit => "INVALID_LIMIT",
            VocalError::InvalidConfig { .. } => "INVALID_CONFIG",
            VocalError::InvalidPattern { .. } => "INVALID_PATTERN",
            VocalError::Io(_) => "IO_ERROR",
            VocalError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable by falling back to defaults
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            VocalError::FileNotFound { .. }
                | VocalError::InvalidThreshold { .. }
                | VocalError::InvalidLimit
                | VocalError::InvalidConfig { .. }
        )
    }

    /// Read a file, mapping a missing path to `FileNotFound`
    pub(crate) fn read_file(path: &std::path::Path) -> Result<String> {
        if !path.exists() {
            return Err(VocalError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        std::fs::read_to_string(path).map_err(|source| VocalError::FileReadError {
            path: path.to_path_buf(),
            source,
        })
    }
}
