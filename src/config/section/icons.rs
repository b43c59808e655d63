//! `[icons]` section configuration.
//!
//! Maps generated artwork files to asset catalog image sets.
//!
//! # Example
//!
//! ```toml
//! [icons]
//! source_dir = "~/artwork"                  # Where generated artwork lives
//! assets_dir = "ios_app/Assets.xcassets"    # Asset catalog root
//! tolerance = 30.0                          # RGB distance for background match
//! # background = [255, 255, 255]            # Override the top-left sample
//!
//! [[icons.assets]]
//! source = "planet_rahu_v2.png"
//! name = "planet_ketu"
//! rotate = 180
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::expand_path;
use crate::image::{FloodOptions, Rotation};

/// Tolerance used when the config does not set one.
pub const DEFAULT_TOLERANCE: f32 = 30.0;

/// Asset generation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Directory holding the source artwork.
    pub source_dir: PathBuf,

    /// Asset catalog directory (`*.xcassets`).
    pub assets_dir: PathBuf,

    /// Euclidean RGB distance below which a pixel counts as background.
    pub tolerance: f32,

    /// Explicit background color. `None` samples the top-left pixel.
    pub background: Option<[u8; 3]>,

    /// Source-to-asset mappings, processed in order.
    pub assets: Vec<AssetMapping>,
}

/// One generated asset.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetMapping {
    /// Source file name, relative to `source_dir`.
    pub source: PathBuf,

    /// Asset name; output goes to `<name>.imageset/<name>.png`.
    pub name: String,

    /// Rotation applied after background removal.
    #[serde(default)]
    pub rotate: Rotation,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            assets_dir: PathBuf::from("Assets.xcassets"),
            tolerance: DEFAULT_TOLERANCE,
            background: None,
            assets: Vec::new(),
        }
    }
}

impl IconsConfig {
    /// Flood-fill parameters for background removal.
    pub fn flood_options(&self) -> FloodOptions {
        FloodOptions {
            background: self.background,
            ..FloodOptions::with_tolerance(self.tolerance)
        }
    }

    /// Absolute path of the source artwork for `mapping`.
    pub fn source_path(&self, mapping: &AssetMapping) -> PathBuf {
        self.source_dir.join(&mapping.source)
    }

    /// Absolute path of the image set PNG for `mapping`.
    pub fn destination_path(&self, mapping: &AssetMapping) -> PathBuf {
        self.assets_dir
            .join(format!("{}.imageset", mapping.name))
            .join(format!("{}.png", mapping.name))
    }

    pub(in crate::config) fn normalize(&mut self, root: &Path) {
        self.source_dir = expand_path(&self.source_dir, root);
        self.assets_dir = expand_path(&self.assets_dir, root);
    }

    pub(in crate::config) fn validate(&self, diag: &mut ConfigDiagnostics) {
        let section = FieldPath::new("icons");

        if !is_valid_tolerance(self.tolerance) {
            diag.error_with_hint(
                section.field("tolerance"),
                format!("tolerance must be a positive number, got {}", self.tolerance),
                "values around 30.0 work for flat generated backgrounds",
            );
        }

        let assets = section.field("assets");
        let mut seen = FxHashSet::default();
        for (i, mapping) in self.assets.iter().enumerate() {
            let field = assets.index(i);
            if mapping.name.trim().is_empty() {
                diag.error(field.field("name"), "asset name must not be empty");
            } else if !is_plain_name(&mapping.name) {
                diag.error_with_hint(
                    field.field("name"),
                    format!("asset name `{}` is not a plain file name", mapping.name),
                    "names become `<name>.imageset/<name>.png`, so `/`, `\\` and `..` are not allowed",
                );
            } else if !seen.insert(mapping.name.as_str()) {
                diag.error(
                    field.field("name"),
                    format!("asset `{}` is mapped more than once", mapping.name),
                );
            }
            if mapping.source.as_os_str().is_empty() {
                diag.error(field.field("source"), "source file must not be empty");
            }
        }
    }
}

/// Asset names stay inside their `.imageset` directory.
fn is_plain_name(name: &str) -> bool {
    !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// Tolerance must be finite and strictly positive.
pub fn is_valid_tolerance(tolerance: f32) -> bool {
    tolerance.is_finite() && tolerance > 0.0
}
