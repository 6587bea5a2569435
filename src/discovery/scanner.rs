//! File system scanner for discovering image assets.
//!
//! Recursively scans directories to find every supported asset file
//! (`.svg`, `.png`, `.jpg`, `.jpeg`, `.webp`).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::decode::AssetKind;

use super::manifest::Manifest;

/// Supported asset extensions, in the order directory expansion emits them.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["svg", "png", "jpg", "jpeg", "webp"];

/// Lowercased extension of `path`, if it is one of [`SUPPORTED_EXTENSIONS`].
pub fn supported_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.iter().copied().find(|s| *s == ext)
}

/// Detect how an asset must be decoded based on its extension.
pub fn detect_asset_kind(path: &Path) -> Option<AssetKind> {
    match supported_extension(path)? {
        "svg" => Some(AssetKind::Svg),
        _ => Some(AssetKind::Raster),
    }
}

/// Scan a directory for supported asset files.
///
/// Files are grouped by extension following [`SUPPORTED_EXTENSIONS`];
/// within one extension they are sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut buckets: Vec<Vec<PathBuf>> = vec![Vec::new(); SUPPORTED_EXTENSIONS.len()];

    if !root.exists() {
        return Vec::new();
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if manifest.is_excluded(path) {
            continue;
        }

        let Some(ext) = supported_extension(path) else {
            continue;
        };
        if let Some(idx) = SUPPORTED_EXTENSIONS.iter().position(|s| *s == ext) {
            buckets[idx].push(path.to_path_buf());
        }
    }

    buckets
        .into_iter()
        .flat_map(|mut bucket| {
            bucket.sort();
            bucket
        })
        .collect()
}
