//! CLI Command Implementations

use std::path::Path;

use log::info;
use serde::Serialize;

use crate::config::VocalConfig;
use crate::error::Result;
use crate::pipeline::{JsonCatalog, Recognizer};

use super::Cli;

/// Build the effective configuration: file or environment, then flags.
pub fn resolve_config(cli: &Cli) -> Result<VocalConfig> {
    let mut config = match &cli.config {
        Some(path) => VocalConfig::load(path)?,
        None => VocalConfig::from_env()?,
    };

    if let Some(threshold) = cli.threshold {
        config.fuzzy_threshold = threshold;
    }
    if let Some(path) = &cli.vocabulary {
        config.vocabulary_path = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the parsed command for a transcript.
pub fn classify(config: &VocalConfig, text: &str) -> Result<()> {
    let recognizer = Recognizer::new(config)?;
    let command = recognizer.parse(Some(text));
    print_json(&command)
}

/// Print the full recognition result for a transcript.
pub fn recognize(config: &VocalConfig, catalog: &Path, text: &str) -> Result<()> {
    info!("Recognizing against catalog: {}", catalog.display());

    let recognizer = Recognizer::new(config)?;
    let recognition = recognizer.recognize(Some(text), &JsonCatalog::new(catalog))?;
    print_json(&recognition)
}

/// Print ranked matches for a query.
pub fn search(config: &VocalConfig, catalog: &Path, limit: Option<usize>, query: &str) -> Result<()> {
    let mut config = config.clone();
    if let Some(limit) = limit {
        config.match_limit = limit;
    }

    let recognizer = Recognizer::new(&config)?;
    let matches = recognizer.alternatives(query, &JsonCatalog::new(catalog))?;

    if matches.is_empty() {
        info!("No matches for '{}' above {}", query, config.fuzzy_threshold);
    }
    print_json(&matches)
}
