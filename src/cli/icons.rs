//! Icons command - generate asset catalog images from source artwork.
//!
//! One failing asset never stops the run: missing sources and decode or
//! write errors are logged, counted, and reported in the final summary.

use anyhow::{Result, bail};

use crate::config::{AssetMapping, IconsConfig, MaintConfig};
use crate::image::derive_asset;
use crate::logger::ProgressLine;
use crate::{debug, log};

/// Totals for one icons run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconsSummary {
    pub processed: usize,
    pub failed: usize,
    pub missing: usize,
}

enum AssetResult {
    Processed,
    Failed,
    Missing,
}

/// Run the icons command.
///
/// `only` restricts the run to the named assets; an unknown name is an error.
pub fn run_icons(config: &MaintConfig, only: &[String], dry: bool) -> Result<IconsSummary> {
    let icons = &config.icons;
    let mappings = select_assets(icons, only)?;

    if mappings.is_empty() {
        log!("icons"; "no assets configured");
        return Ok(IconsSummary::default());
    }

    debug!(
        "icons";
        "tolerance {}, background {}",
        icons.tolerance,
        icons
            .background
            .map_or_else(|| "sampled".to_string(), |[r, g, b]| format!("rgb({r}, {g}, {b})"))
    );

    let mut summary = IconsSummary::default();
    let progress = ProgressLine::new("icons", &[("assets", mappings.len())]);

    for mapping in mappings {
        match process_asset(config, mapping, dry) {
            AssetResult::Processed => summary.processed += 1,
            AssetResult::Failed => summary.failed += 1,
            AssetResult::Missing => summary.missing += 1,
        }
        progress.inc("assets");
    }
    progress.finish();

    log!(
        "done";
        "processed {}, failed {}, missing {}",
        summary.processed,
        summary.failed,
        summary.missing
    );
    Ok(summary)
}

/// Mappings to process, in configured order.
fn select_assets<'a>(icons: &'a IconsConfig, only: &[String]) -> Result<Vec<&'a AssetMapping>> {
    if only.is_empty() {
        return Ok(icons.assets.iter().collect());
    }

    if let Some(unknown) = only
        .iter()
        .find(|name| !icons.assets.iter().any(|m| &m.name == *name))
    {
        bail!("unknown asset `{unknown}` in --only");
    }

    Ok(icons
        .assets
        .iter()
        .filter(|m| only.contains(&m.name))
        .collect())
}

fn process_asset(config: &MaintConfig, mapping: &AssetMapping, dry: bool) -> AssetResult {
    let icons = &config.icons;
    let source = icons.source_path(mapping);
    let destination = icons.destination_path(mapping);

    if !source.is_file() {
        log!("icons"; "source not found: {}", source.display());
        return AssetResult::Missing;
    }

    if dry {
        log!(
            "icons";
            "would write {} (rotate {})",
            config.root_relative(&destination).display(),
            mapping.rotate.degrees()
        );
        return AssetResult::Processed;
    }

    match derive_asset(&source, &destination, &icons.flood_options(), mapping.rotate) {
        Ok(asset) => {
            debug!(
                "icons";
                "{}: {}x{}, cleared {} pixels",
                mapping.name,
                asset.width,
                asset.height,
                asset.cleared
            );
            log!("icons"; "generated {}", config.root_relative(&destination).display());
            AssetResult::Processed
        }
        Err(err) => {
            log!("error"; "{}: {:#}", mapping.name, err);
            AssetResult::Failed
        }
    }
}
