//! Embedded raster extraction from SVG documents.
//!
//! Only `data:image/{png,jpeg,jpg};base64,...` URIs contribute images; vector
//! content is never rendered.

use std::path::Path;
use std::sync::OnceLock;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use image::RgbImage;
use regex::Regex;

use crate::error::{Result, SwatchError};

use super::{DecodedAsset, SkippedPayload};

/// Standard alphabet, tolerant of missing padding and stray trailing bits.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

fn data_uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)data:image/(?:png|jpeg|jpg);base64,([^"')]+)"#)
            .expect("data URI pattern is valid")
    })
}

/// Base64 payloads of every embedded PNG/JPEG data URI, in document order.
pub fn embedded_payloads(text: &str) -> Vec<&str> {
    data_uri_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Decode one base64 payload into an RGB image.
pub fn decode_payload(payload: &str) -> std::result::Result<RgbImage, String> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = LENIENT
        .decode(compact.as_bytes())
        .map_err(|e| format!("invalid base64: {}", e))?;
    let img = image::load_from_memory(&bytes).map_err(|e| format!("invalid image data: {}", e))?;
    Ok(img.to_rgb8())
}

/// Decode every embedded raster in an SVG document's text.
///
/// A payload that fails to decode is recorded in `skipped`; its siblings are
/// still processed.
pub fn decode_svg_text(text: &str) -> DecodedAsset {
    let mut decoded = DecodedAsset::default();

    for (index, payload) in embedded_payloads(text).into_iter().enumerate() {
        match decode_payload(payload) {
            Ok(img) => decoded.images.push(img),
            Err(reason) => decoded.skipped.push(SkippedPayload { index, reason }),
        }
    }

    decoded
}

/// Read an SVG file and decode its embedded rasters.
pub fn decode_svg(path: &Path) -> Result<DecodedAsset> {
    let text = std::fs::read_to_string(path).map_err(|e| SwatchError::Decode {
        path: path.to_path_buf(),
        message: format!("Failed to read SVG: {}", e),
    })?;
    Ok(decode_svg_text(&text))
}
