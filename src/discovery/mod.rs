//! Asset discovery for palette extraction.
//!
//! Expands user-supplied targets (files or directories) into an ordered,
//! deduplicated list of supported asset files. Relative targets are resolved
//! against an explicit root directory.
//!
//! # Example
//!
//! ```ignore
//! use swatch::discovery::{locate, LocateOptions};
//!
//! let options = LocateOptions::new("/work/brand");
//! let files = locate(&["logos".to_string()], &options);
//! ```

mod manifest;
mod scanner;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use manifest::{Manifest, DEFAULT_SAMPLE, DEFAULT_SOURCE, DEFAULT_TOP};
pub use scanner::{detect_asset_kind, scan_directory, supported_extension, SUPPORTED_EXTENSIONS};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "swatch.yaml";

/// Settings for [`locate`].
#[derive(Debug, Clone)]
pub struct LocateOptions {
    /// Directory relative targets are resolved against.
    pub root: PathBuf,

    /// Manifest supplying exclude patterns for directory expansion.
    pub manifest: Manifest,
}

impl LocateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest: Manifest::default(),
        }
    }

    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = manifest;
        self
    }
}

/// Resolve a raw target: expand `~` and join relative paths onto `root`.
///
/// The result is rebuilt from its components, so `.` segments and repeated
/// separators do not reach the report.
pub fn resolve_target(raw: &str, root: &Path) -> PathBuf {
    let path = expand_home(raw);
    let joined = if path.is_absolute() {
        path
    } else {
        root.join(path)
    };
    joined.components().collect()
}

fn expand_home(raw: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    match home {
        Some(home) if raw == "~" => home,
        Some(home) => match raw.strip_prefix("~/") {
            Some(rest) => home.join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}

/// Expand targets into the list of asset files to scan.
///
/// Missing targets and files with unsupported extensions are skipped.
/// Directories are expanded recursively. The result keeps the first
/// occurrence of each path.
pub fn locate(targets: &[String], options: &LocateOptions) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for raw in targets {
        let path = resolve_target(raw, &options.root);
        if !path.exists() {
            continue;
        }
        if path.is_file() {
            if supported_extension(&path).is_some() {
                paths.push(path);
            }
            continue;
        }
        paths.extend(scan_directory(&path, &options.manifest));
    }

    let mut seen = HashSet::new();
    paths.retain(|p| seen.insert(p.clone()));
    paths
}
