//! xcmaint - maintenance chores for an iOS app's assets and localizations.

mod cli;
mod config;
mod image;
mod logger;
mod strings;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::MaintConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = MaintConfig::load(&cli)?;
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Dedup { paths, dry } => cli::dedup::run_dedup(&config, paths, *dry).map(|_| ()),
        Commands::Icons { only, dry, .. } => cli::icons::run_icons(&config, only, *dry).map(|_| ()),
        Commands::Translate { dry } => cli::translate::run_translate(&config, *dry).map(|_| ()),
    }
}
