//! Filesystem path helpers.

mod fs;

pub use fs::{normalize_path, resolve_path};
