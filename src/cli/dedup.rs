//! Dedup command - drop superseded keys from string resource files.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::MaintConfig;
use crate::strings::{clean_strings_file, collect_resource_files};
use crate::utils::path::resolve_path;
use crate::utils::plural::{plural_count, plural_s};
use crate::{debug, log};

/// Totals for one dedup run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupSummary {
    pub files: usize,
    pub cleaned: usize,
    pub removed: usize,
}

/// Run the dedup command.
///
/// `paths` replace `[strings].root` when non-empty. Any read or write
/// failure aborts the run.
pub fn run_dedup(config: &MaintConfig, paths: &[PathBuf], dry: bool) -> Result<DedupSummary> {
    let files = target_files(config, paths);
    if files.is_empty() {
        log!("dedup"; "no {} files found", config.strings.file_name);
        return Ok(DedupSummary::default());
    }

    let mut summary = DedupSummary {
        files: files.len(),
        ..Default::default()
    };

    for path in &files {
        let removed = clean_strings_file(path, dry)?;
        let display = config.root_relative(path);

        if removed.is_empty() {
            log!("dedup"; "no duplicates in {}", display.display());
            continue;
        }

        for entry in &removed {
            debug!("dedup"; "{}:{} superseded `{}`", display.display(), entry.line, entry.key);
        }
        let verb = if dry { "would clean" } else { "cleaned" };
        log!(
            "dedup";
            "{verb} {} ({} duplicate{})",
            display.display(),
            removed.len(),
            plural_s(removed.len())
        );

        summary.cleaned += 1;
        summary.removed += removed.len();
    }

    log!(
        "done";
        "{} removed across {} ({} checked)",
        plural_count(summary.removed, "duplicate"),
        plural_count(summary.cleaned, "file"),
        summary.files
    );
    Ok(summary)
}

/// Resource files to clean, in path order.
fn target_files(config: &MaintConfig, paths: &[PathBuf]) -> Vec<PathBuf> {
    let file_name = &config.strings.file_name;
    if paths.is_empty() {
        return collect_resource_files(&config.strings.root, file_name);
    }

    let roots = paths.iter().map(|p| resolve_path(p, config.get_root()));
    let mut files: Vec<_> = roots
        .flat_map(|root| collect_from(&root, file_name))
        .collect();
    files.sort();
    files.dedup();
    files
}

/// Explicit paths that do not exist are kept so the read reports them.
fn collect_from(root: &Path, file_name: &str) -> Vec<PathBuf> {
    if root.exists() {
        collect_resource_files(root, file_name)
    } else {
        vec![root.to_path_buf()]
    }
}
