//! Translate command - rewrite the managed block in each language file.
//!
//! Every target is planned before anything is written, so a file missing
//! the marker aborts the whole run with all files untouched.

use anyhow::Result;

use crate::config::MaintConfig;
use crate::strings::{PlannedPatch, apply_patch, plan_patch};
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// Totals for one translate run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

/// Run the translate command.
pub fn run_translate(config: &MaintConfig, dry: bool) -> Result<TranslateSummary> {
    let translations = &config.translations;
    let mut summary = TranslateSummary::default();

    let mut plans: Vec<(&str, PlannedPatch)> = Vec::with_capacity(translations.languages.len());
    for language in &translations.languages {
        let path = translations.target_path(language);
        if !path.is_file() {
            debug!("translate"; "skipping {}: {} not found", language.code, path.display());
            summary.skipped += 1;
            continue;
        }
        plans.push((
            language.code.as_str(),
            plan_patch(&path, &translations.marker, &language.block)?,
        ));
    }

    for (code, plan) in &plans {
        let display = config.root_relative(&plan.path);
        if !plan.changed {
            log!("translate"; "{code}: up to date");
            summary.unchanged += 1;
            continue;
        }

        if dry {
            log!(
                "translate";
                "{code}: would update {} (keeping {})",
                display.display(),
                plural_count(plan.kept_lines, "line")
            );
        } else {
            apply_patch(plan)?;
            log!("translate"; "{code}: updated {}", display.display());
        }
        summary.updated += 1;
    }

    log!(
        "done";
        "{} updated, {} unchanged, {} skipped",
        plural_count(summary.updated, "file"),
        summary.unchanged,
        summary.skipped
    );
    Ok(summary)
}
