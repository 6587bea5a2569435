//! Palette extraction.
//!
//! Decodes an asset, ranks the colours of each raster it contains, and merges
//! the per-image rankings into one capped, deduplicated palette.

mod rank;

use std::collections::HashSet;
use std::path::Path;

use image::RgbImage;
use serde::Serialize;

use crate::decode::decode;
use crate::discovery::{DEFAULT_SAMPLE, DEFAULT_TOP};
use crate::error::Result;
use crate::types::{Colour, PaletteItem};

pub use rank::{count_colours, rank, sample_image};

/// Extraction settings, echoed in the detailed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Maximum colours per asset.
    pub top: usize,
    /// Side length of the sampling square.
    pub sample: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            sample: DEFAULT_SAMPLE,
        }
    }
}

/// Keep the first occurrence of each colour, stopping at `limit`.
pub fn unique_colours(colours: impl IntoIterator<Item = Colour>, limit: usize) -> Vec<Colour> {
    let mut seen = HashSet::new();
    colours
        .into_iter()
        .filter(|c| seen.insert(*c))
        .take(limit)
        .collect()
}

/// Build the palette for `path` from its decoded images.
///
/// The limit applies to the merged palette, so later images only contribute
/// colours while there is room left. Returns `None` when nothing was ranked.
pub fn palette_from_images(
    path: &Path,
    images: &[RgbImage],
    settings: Settings,
) -> Option<PaletteItem> {
    let merged = images
        .iter()
        .flat_map(|img| rank(img, settings.sample, settings.top));
    let colours = unique_colours(merged, settings.top);

    if colours.is_empty() {
        return None;
    }
    Some(PaletteItem::new(path, colours))
}

/// Extract the palette of a single asset.
///
/// Returns `Ok(None)` when the asset holds no decodable raster data, and an
/// error when a raster file itself cannot be opened.
pub fn extract(path: &Path, settings: Settings) -> Result<Option<PaletteItem>> {
    let decoded = decode(path)?;
    Ok(palette_from_images(path, &decoded.images, settings))
}
