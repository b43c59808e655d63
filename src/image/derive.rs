//! Derive asset catalog images from source artwork.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage, imageops};
use serde::Deserialize;

use crate::image::background::{FloodOptions, erase_background};

/// Rotation applied after background removal.
///
/// Stored in config as degrees; only 0 and 180 keep the image dimensions,
/// which is what an image set expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u16")]
pub enum Rotation {
    #[default]
    None,
    Half,
}

impl Rotation {
    pub fn apply(self, img: RgbaImage) -> RgbaImage {
        match self {
            Self::None => img,
            Self::Half => imageops::rotate180(&img),
        }
    }

    pub const fn degrees(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Half => 180,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::None),
            180 => Ok(Self::Half),
            other => Err(format!("unsupported rotation {other}, expected 0 or 180")),
        }
    }
}

/// Outcome of a successful derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAsset {
    pub width: u32,
    pub height: u32,
    /// Pixels made transparent by the background fill.
    pub cleared: usize,
}

/// Decode `source`, clear its background, rotate, and write PNG to `output`.
///
/// Parent directories of `output` are created as needed.
pub fn derive_asset(
    source: &Path,
    output: &Path,
    options: &FloodOptions,
    rotation: Rotation,
) -> Result<DerivedAsset> {
    let img = image::open(source)
        .with_context(|| format!("failed to decode {}", source.display()))?;

    let mut rgba = img.to_rgba8();
    let cleared = erase_background(&mut rgba, options);
    let processed = rotation.apply(rgba);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    processed
        .save_with_format(output, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(DerivedAsset {
        width: processed.width(),
        height: processed.height(),
        cleared,
    })
}
