//! `[strings]` section configuration.
//!
//! Where `xcmaint dedup` looks for keyed string resource files.
//!
//! # Example
//!
//! ```toml
//! [strings]
//! root = "ios_app"                    # Walked recursively
//! file_name = "Localizable.strings"   # Exact file name to match
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::expand_path;

/// Default name of a keyed string resource file.
pub const DEFAULT_STRINGS_FILE: &str = "Localizable.strings";

/// Resource file discovery settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StringsConfig {
    /// Directory walked for resource files (relative to the project root).
    pub root: PathBuf,

    /// File name that identifies a resource file.
    pub file_name: String,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file_name: DEFAULT_STRINGS_FILE.to_string(),
        }
    }
}

impl StringsConfig {
    pub(in crate::config) fn normalize(&mut self, root: &Path) {
        self.root = expand_path(&self.root, root);
    }

    pub(in crate::config) fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.file_name.trim().is_empty() {
            diag.error(
                FieldPath::new("strings.file_name"),
                "file name must not be empty",
            );
        }
    }
}
