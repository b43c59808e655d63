//! Replace the marker-delimited block at the end of a resource file.
//!
//! Everything from the first line containing the marker to the end of the
//! file is dropped and replaced by the new block:
//!
//! ```text
//! "title" = "Title";          ← kept
//!                             ← blank separator (reused if present)
//! // Match Result Additions   ← new block (starts with the marker)
//! "charts" = "Cartas";
//! ```
//!
//! A file without the marker is an error, never a silent append.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::entry::split_lines;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("marker `{marker}` not found in `{}`", path.display())]
    MarkerNotFound { path: PathBuf, marker: String },
}

/// New content for one file, computed but not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPatch {
    pub path: PathBuf,
    pub content: String,
    /// Lines kept ahead of the block.
    pub kept_lines: usize,
    /// Whether `content` differs from what is on disk.
    pub changed: bool,
}

/// Truncate `content` at the first line containing `marker` and append `block`.
///
/// Every line before the marker is kept as-is. A blank separator line is
/// added unless the kept lines already end with one, and the block is
/// written with the file's line terminator.
///
/// Returns `None` when no line contains the marker.
pub fn patch_block(content: &str, marker: &str, block: &str) -> Option<(String, usize)> {
    let marker = marker.trim();
    let lines = split_lines(content);
    let marker_line = lines.iter().position(|line| line.contains(marker))?;
    let kept = &lines[..marker_line];

    let eol = line_ending(kept.last().unwrap_or(&lines[marker_line]));

    let mut output = kept.concat();
    if kept.last().is_some_and(|last| !is_empty_line(last)) {
        output.push_str(eol);
    }
    for line in block.trim().lines() {
        output.push_str(line);
        output.push_str(eol);
    }

    Some((output, kept.len()))
}

/// Terminator of `line`, defaulting to `\n` for the last line of a file.
fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") { "\r\n" } else { "\n" }
}

/// A line holding nothing but its terminator.
fn is_empty_line(line: &str) -> bool {
    line == "\n" || line == "\r\n"
}

/// Read `path` and compute its patched content.
pub fn plan_patch(path: &Path, marker: &str, block: &str) -> Result<PlannedPatch> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let (patched, kept_lines) =
        patch_block(&content, marker, block).ok_or_else(|| PatchError::MarkerNotFound {
            path: path.to_path_buf(),
            marker: marker.trim().to_string(),
        })?;

    Ok(PlannedPatch {
        path: path.to_path_buf(),
        changed: patched != content,
        content: patched,
        kept_lines,
    })
}

/// Write a planned patch. Unchanged files are left alone.
pub fn apply_patch(plan: &PlannedPatch) -> Result<()> {
    if plan.changed {
        fs::write(&plan.path, &plan.content)
            .with_context(|| format!("failed to write {}", plan.path.display()))?;
    }
    Ok(())
}
