//! Project configuration management for `xcmaint.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── strings    # [strings]
//! │   ├── icons      # [icons] and [[icons.assets]]
//! │   └── translations # [translations] and [[translations.languages]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # MaintConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                        |
//! |--------------------|------------------------------------------------|
//! | `[strings]`        | Where `dedup` looks for resource files         |
//! | `[icons]`          | Source artwork, asset catalog, flood settings  |
//! | `[translations]`   | Marker line and per-language blocks            |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AssetMapping, IconsConfig, StringsConfig, TranslationsConfig, is_valid_tolerance,
};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing xcmaint.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaintConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Keyed string resource discovery
    #[serde(default)]
    pub strings: StringsConfig,

    /// Asset generation
    #[serde(default)]
    pub icons: IconsConfig,

    /// Translation block patching
    #[serde(default)]
    pub translations: TranslationsConfig,
}

impl MaintConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file, then applies
    /// command-line overrides and validates the result.
    pub fn load(cli: &Cli) -> Result<Self> {
        crate::logger::set_verbose(cli.verbose);

        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found in this directory or any parent",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.finalize(&config_path);
        config.apply_command_options(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load and finalize a config file without CLI overrides.
    #[cfg(test)]
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.finalize(path);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root (for display)
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Record where the config came from and resolve all section paths.
    fn finalize(&mut self, config_path: &Path) {
        self.config_path = crate::utils::path::normalize_path(config_path);
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let root = self.root.clone();
        self.strings.normalize(&root);
        self.icons.normalize(&root);
        self.translations.normalize(&root);
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Icons { tolerance, .. } => {
                Self::update_option(&mut self.icons.tolerance, tolerance.as_ref());
            }
            // Dedup paths and --dry flags are read directly by the commands
            Commands::Dedup { .. } | Commands::Translate { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, collecting all errors before failing.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.strings.validate(&mut diag);
        self.icons.validate(&mut diag);
        self.translations.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config and panic on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> MaintConfig {
    let (parsed, ignored) = MaintConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_invalid_toml() {
        let err = MaintConfig::parse_with_ignored("[strings\nroot = \"ios_app\"").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_config_default() {
        let config = MaintConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.icons.tolerance, 30.0);
        assert_eq!(config.strings.file_name, "Localizable.strings");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[strings]\nroot = \"ios_app\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = MaintConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.strings.root, PathBuf::from("ios_app"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[icons]\ntolerance = 25.0";
        let (_, ignored) = MaintConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_from_resolves_paths_against_root() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("ios_app")).unwrap();
        let path = dir.path().join("xcmaint.toml");
        std::fs::write(
            &path,
            "[strings]\nroot = \"ios_app\"\n[translations]\nroot = \"ios_app\"",
        )
        .unwrap();

        let config = MaintConfig::load_from(&path).unwrap();
        let root = crate::utils::path::normalize_path(dir.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.strings.root, root.join("ios_app"));
        assert_eq!(config.translations.root, root.join("ios_app"));
        assert_eq!(
            config.root_relative(&config.strings.root),
            PathBuf::from("ios_app")
        );
    }

    #[test]
    fn test_load_from_reports_validation_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("xcmaint.toml");
        std::fs::write(&path, "[icons]\ntolerance = -3.0\n[translations]\nmarker = \"\"").unwrap();

        let err = MaintConfig::load_from(&path).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        match config_err {
            ConfigError::Diagnostics(diag) => assert_eq!(diag.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let config = test_parse_config(include_str!("../../xcmaint.toml"));
        config.validate().unwrap();

        let ketu = config
            .icons
            .assets
            .iter()
            .find(|m| m.name == "planet_ketu")
            .unwrap();
        assert_eq!(ketu.rotate.degrees(), 180);
        assert_eq!(config.translations.languages.len(), 11);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = MaintConfig::load_from(&dir.path().join("xcmaint.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }
}
