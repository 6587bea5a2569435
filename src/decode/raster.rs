//! Direct raster decoding (PNG, JPEG, WebP).

use std::path::Path;

use image::RgbImage;

use crate::error::{Result, SwatchError};

/// Open a raster file and normalize it to 8-bit RGB, dropping alpha.
pub fn decode_raster(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| SwatchError::Decode {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })?;
    Ok(img.to_rgb8())
}
