//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::is_valid_tolerance;

/// Asset and localization maintenance for an iOS app
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "xcmaint.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Remove duplicated keys from string resource files (last definition wins)
    #[command(visible_alias = "d")]
    Dedup {
        /// Files or directories to clean instead of `[strings].root`
        #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
        paths: Vec<PathBuf>,

        /// Report duplicates without rewriting files
        #[arg(short, long)]
        dry: bool,
    },

    /// Generate asset catalog images with the background removed
    #[command(visible_alias = "i")]
    Icons {
        /// Only generate the named assets (repeatable)
        #[arg(short, long, value_name = "NAME")]
        only: Vec<String>,

        /// Override `[icons].tolerance`
        #[arg(short, long, value_parser = parse_tolerance)]
        tolerance: Option<f32>,

        /// Report what would be written without decoding or writing images
        #[arg(short, long)]
        dry: bool,
    },

    /// Replace the marker block in each language's string resource file
    #[command(visible_alias = "t")]
    Translate {
        /// Plan patches and report them without writing
        #[arg(short, long)]
        dry: bool,
    },
}

fn parse_tolerance(value: &str) -> Result<f32, String> {
    let tolerance: f32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if is_valid_tolerance(tolerance) {
        Ok(tolerance)
    } else {
        Err(format!("tolerance must be positive, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dedup_with_paths() {
        let cli = Cli::try_parse_from(["xcmaint", "dedup", "--dry", "a", "b"]).unwrap();
        match cli.command {
            Commands::Dedup { paths, dry } => {
                assert!(dry);
                assert_eq!(paths, [PathBuf::from("a"), PathBuf::from("b")]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_icons_alias_and_options() {
        let cli = Cli::try_parse_from([
            "xcmaint", "-v", "i", "--only", "planet_ketu", "-o", "planet_sun", "-t", "25",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Icons {
                only,
                tolerance,
                dry,
            } => {
                assert_eq!(only, ["planet_ketu", "planet_sun"]);
                assert_eq!(tolerance, Some(25.0));
                assert!(!dry);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_tolerance() {
        assert!(Cli::try_parse_from(["xcmaint", "icons", "--tolerance", "0"]).is_err());
        assert!(Cli::try_parse_from(["xcmaint", "icons", "--tolerance", "abc"]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["xcmaint", "translate", "-C", "other.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Commands::Translate { dry: false }));
    }
}
