//! Extracted palette for a single asset.

use std::path::Path;

use serde::Serialize;

use super::Colour;

/// The colours extracted from one asset, most frequent first.
///
/// Built once by the extractor and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteItem {
    name: String,
    source: String,
    colors: Vec<Colour>,
}

impl PaletteItem {
    /// Create an item for `path`, named after its file stem.
    pub fn new(path: &Path, colors: Vec<Colour>) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            source: path.display().to_string(),
            colors,
        }
    }

    /// Asset file name without extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asset path as given to the extractor.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn colors(&self) -> &[Colour] {
        &self.colors
    }
}
