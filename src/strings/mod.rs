//! Keyed string resource files (`Localizable.strings`).
//!
//! # Modules
//!
//! - [`entry`]: `"key" = "value";` line recognition
//! - [`dedup`]: Drop superseded definitions of the same key
//! - [`patch`]: Replace the marker-delimited block at the end of a file

pub mod dedup;
pub mod entry;
pub mod patch;

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

pub use dedup::clean_strings_file;
pub use patch::{PlannedPatch, apply_patch, plan_patch};

/// Collect every file named `file_name` below `root`, sorted by path.
///
/// A `root` that is itself a file is returned as-is.
pub fn collect_resource_files(root: &Path, file_name: &str) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut files: Vec<_> = WalkDir::new(root)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str() == Some(file_name))
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::collect_resource_files;

    #[test]
    fn test_collect_finds_nested_files_sorted() {
        let dir = TempDir::new().unwrap();
        for lang in ["fr", "de", "zh-Hans"] {
            let lproj = dir.path().join(format!("ios_app/{lang}.lproj"));
            fs::create_dir_all(&lproj).unwrap();
            fs::write(lproj.join("Localizable.strings"), "").unwrap();
            fs::write(lproj.join("InfoPlist.strings"), "").unwrap();
        }

        let files = collect_resource_files(dir.path(), "Localizable.strings");
        let langs: Vec<_> = files
            .iter()
            .map(|p| {
                p.parent()
                    .unwrap()
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(langs, ["de.lproj", "fr.lproj", "zh-Hans.lproj"]);
    }

    #[test]
    fn test_collect_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Custom.strings");
        fs::write(&file, "").unwrap();

        assert_eq!(
            collect_resource_files(&file, "Localizable.strings"),
            [file.clone()]
        );
    }

    #[test]
    fn test_collect_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(collect_resource_files(&dir.path().join("nope"), "Localizable.strings").is_empty());
    }
}
