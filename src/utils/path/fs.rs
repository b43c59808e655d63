//! Absolute path resolution for config values and command arguments.

use std::path::{Path, PathBuf};

/// Make `path` absolute.
///
/// Existing paths are canonicalized. Anything else is joined onto the
/// current directory when relative and returned unchanged when absolute.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a command-line path against the cwd, then `fallback_dir`.
///
/// `xcmaint dedup ios_app/fr.lproj` works both from the project root and
/// from a subdirectory, as long as the path exists relative to one of them.
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if path.exists() {
        return normalize_path(path);
    }
    normalize_path(&fallback_dir.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_missing_relative_is_absolute() {
        let normalized = normalize_path(Path::new("ios_app/missing.strings"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("ios_app/missing.strings"));
    }

    #[test]
    fn test_normalize_missing_absolute_unchanged() {
        let path = Path::new("/no/such/Assets.xcassets");
        assert_eq!(normalize_path(path), path);
    }

    #[test]
    fn test_resolve_absolute_unchanged() {
        let resolved = resolve_path(Path::new("/abs/fr.lproj"), Path::new("/project"));
        assert_eq!(resolved, PathBuf::from("/abs/fr.lproj"));
    }

    #[test]
    fn test_resolve_falls_back_to_project_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("xcmaint_only_here/fr.lproj")).unwrap();

        let resolved = resolve_path(Path::new("xcmaint_only_here/fr.lproj"), dir.path());
        assert!(resolved.is_dir());
        assert!(resolved.ends_with("xcmaint_only_here/fr.lproj"));
    }
}
