//! `[translations]` section configuration.
//!
//! Per-language blocks that `xcmaint translate` writes after the marker line.
//!
//! # Example
//!
//! ```toml
//! [translations]
//! root = "ios_app"                       # Contains `<code>.lproj/` folders
//! file_name = "Localizable.strings"
//! marker = "// Match Result Additions"   # First line of the managed block
//!
//! [[translations.languages]]
//! code = "es"
//! block = """
//! // Match Result Additions
//! "charts" = "Cartas";
//! """
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::strings::DEFAULT_STRINGS_FILE;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::expand_path;

/// Marker comment used when the config does not set one.
pub const DEFAULT_MARKER: &str = "// Match Result Additions";

/// Translation block patch settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationsConfig {
    /// Directory containing the `<code>.lproj` folders.
    pub root: PathBuf,

    /// Resource file name inside each `.lproj` folder.
    pub file_name: String,

    /// Line content that starts the managed block.
    pub marker: String,

    /// Blocks to write, processed in order.
    pub languages: Vec<LanguageBlock>,
}

/// Replacement block for one language.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageBlock {
    /// Language code, e.g. `es` or `zh-Hans`.
    pub code: String,

    /// Lines written in place of the old block.
    pub block: String,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file_name: DEFAULT_STRINGS_FILE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            languages: Vec::new(),
        }
    }
}

impl TranslationsConfig {
    /// Resource file patched for `language`.
    pub fn target_path(&self, language: &LanguageBlock) -> PathBuf {
        self.root
            .join(format!("{}.lproj", language.code))
            .join(&self.file_name)
    }

    pub(in crate::config) fn normalize(&mut self, root: &Path) {
        self.root = expand_path(&self.root, root);
    }

    pub(in crate::config) fn validate(&self, diag: &mut ConfigDiagnostics) {
        let section = FieldPath::new("translations");

        if self.file_name.trim().is_empty() {
            diag.error(section.field("file_name"), "file name must not be empty");
        }

        let marker = self.marker.trim();
        if marker.is_empty() {
            diag.error(section.field("marker"), "marker must not be empty");
        }

        let languages = section.field("languages");
        let mut seen = FxHashSet::default();
        for (i, language) in self.languages.iter().enumerate() {
            let field = languages.index(i);
            if language.code.trim().is_empty() {
                diag.error(field.field("code"), "language code must not be empty");
            } else if !seen.insert(language.code.as_str()) {
                diag.error(
                    field.field("code"),
                    format!("language `{}` is listed more than once", language.code),
                );
            }

            // The next run truncates at the marker, so it must open the block
            let first_line = language.block.trim().lines().next().unwrap_or_default();
            if !marker.is_empty() && !first_line.contains(marker) {
                diag.error_with_hint(
                    field.field("block"),
                    format!("block for `{}` does not start with the marker line", language.code),
                    format!("start the block with `{marker}`"),
                );
            }
        }
    }
}
