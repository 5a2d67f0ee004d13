//! Vocal CLI
//!
//! Command-line interface for the Vocal command interpreter.

use clap::Parser;
use env_logger::Env;
use log::info;

use vocal::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Vocal v{}", env!("CARGO_PKG_VERSION"));

    let config = commands::resolve_config(&cli)?;

    match cli.command {
        Commands::Classify { text } => commands::classify(&config, &text)?,
        Commands::Recognize { catalog, text } => commands::recognize(&config, &catalog, &text)?,
        Commands::Search {
            catalog,
            limit,
            query,
        } => commands::search(&config, &catalog, limit, &query)?,
    }

    Ok(())
}
