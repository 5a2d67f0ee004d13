//! CLI Module
//!
//! Command-line interface for interpreting transcripts offline.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vocal - voice command interpreter and music catalog matcher
#[derive(Parser, Debug)]
#[command(name = "vocal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Similarity threshold (0-100), overrides the configuration
    #[arg(short, long, global = true)]
    pub threshold: Option<u8>,

    /// JSON vocabulary file, overrides the configuration
    #[arg(long, global = true)]
    pub vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the intent and track query of a transcript
    #[command(name = "classify")]
    Classify {
        /// Transcribed utterance
        text: String,
    },

    /// Interpret a transcript and resolve PLAY queries against a catalog
    #[command(name = "recognize")]
    Recognize {
        /// JSON catalog file
        #[arg(long)]
        catalog: PathBuf,

        /// Transcribed utterance
        text: String,
    },

    /// List ranked catalog matches for a query
    #[command(name = "search")]
    Search {
        /// JSON catalog file
        #[arg(long)]
        catalog: PathBuf,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Free-text music query
        query: String,
    },
}
