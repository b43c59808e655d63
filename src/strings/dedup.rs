//! Remove duplicated keys from keyed string resource files.
//!
//! When a key is defined more than once, the last definition wins and every
//! earlier line for that key is dropped. Lines that are not entries
//! (comments, blanks, multi-line values) are never touched.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};

use super::entry::{entry_key, split_lines};

/// A line dropped because the same key is defined again later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEntry {
    /// 1-based line number in the original file.
    pub line: usize,
    pub key: String,
}

/// Result of deduplicating a sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupOutcome<'a> {
    /// Retained lines, in original order.
    pub lines: Vec<&'a str>,
    /// Dropped lines, in original order.
    pub removed: Vec<RemovedEntry>,
}

impl DedupOutcome<'_> {
    /// Whether any line was removed.
    pub fn changed(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Keep only the last line for every key.
pub fn dedup_lines<'a>(lines: &[&'a str]) -> DedupOutcome<'a> {
    let mut last_seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut superseded = FxHashSet::default();

    for (i, &line) in lines.iter().enumerate() {
        if let Some(key) = entry_key(line)
            && let Some(previous) = last_seen.insert(key, i)
        {
            superseded.insert(previous);
        }
    }

    let mut outcome = DedupOutcome::default();
    for (i, &line) in lines.iter().enumerate() {
        if superseded.contains(&i) {
            outcome.removed.push(RemovedEntry {
                line: i + 1,
                key: entry_key(line).unwrap_or_default().to_string(),
            });
        } else {
            outcome.lines.push(line);
        }
    }
    outcome
}

/// Deduplicate a resource file in place.
///
/// The file is rewritten only when something was removed and `dry` is false.
/// Returns the removed entries (empty when the file had no duplicates).
pub fn clean_strings_file(path: &Path, dry: bool) -> Result<Vec<RemovedEntry>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let lines = split_lines(&content);
    let outcome = dedup_lines(&lines);

    if outcome.changed() && !dry {
        fs::write(path, outcome.lines.concat())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(outcome.removed)
}
