//! Asset decoding.
//!
//! Turns one asset file into the RGB rasters it contains: a single image for
//! raster files, or every embedded base64 PNG/JPEG for SVG documents.

mod raster;
mod svg;

use std::path::Path;

use image::RgbImage;

use crate::discovery::detect_asset_kind;
use crate::error::{Result, SwatchError};

pub use raster::decode_raster;
pub use svg::{decode_payload, decode_svg, decode_svg_text, embedded_payloads};

/// How an asset is turned into rasters, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A raster file decoded directly.
    Raster,
    /// An SVG document whose embedded raster payloads are extracted.
    Svg,
}

impl AssetKind {
    /// Decode `path` according to this kind.
    pub fn decode(self, path: &Path) -> Result<DecodedAsset> {
        match self {
            AssetKind::Raster => Ok(DecodedAsset {
                images: vec![decode_raster(path)?],
                skipped: Vec::new(),
            }),
            AssetKind::Svg => decode_svg(path),
        }
    }
}

/// Rasters recovered from one asset.
#[derive(Debug, Default)]
pub struct DecodedAsset {
    /// Images in document order.
    pub images: Vec<RgbImage>,
    /// Embedded payloads that could not be decoded.
    pub skipped: Vec<SkippedPayload>,
}

impl DecodedAsset {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// An embedded payload that contributed no image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPayload {
    /// Zero-based position of the payload among the document's matches.
    pub index: usize,
    pub reason: String,
}

/// Decode an asset into zero or more RGB images.
pub fn decode(path: &Path) -> Result<DecodedAsset> {
    let kind = detect_asset_kind(path).ok_or_else(|| SwatchError::Decode {
        path: path.to_path_buf(),
        message: "unsupported file extension".to_string(),
    })?;
    kind.decode(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_decode_dispatches_raster() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(3, 2, image::Rgb([255, 0, 0])).save(&path).unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.images.len(), 1);
        assert_eq!(decoded.images[0].dimensions(), (3, 2));
        assert!(decoded.skipped.is_empty());
    }

    #[test]
    fn test_decode_dispatches_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shape.svg");
        fs::write(&path, r#"<svg><rect fill="red"/></svg>"#).unwrap();

        let decoded = decode(&path).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_unsupported_extension() {
        let result = decode(Path::new("notes.txt"));
        assert!(matches!(result, Err(SwatchError::Decode { .. })));
    }

    #[test]
    fn test_decode_corrupt_raster_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(decode(&path), Err(SwatchError::Decode { .. })));
    }
}
