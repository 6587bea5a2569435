//! swatch - Dominant colour palettes for image assets
//!
//! A library for extracting frequency-ranked hex palettes from raster files
//! and from raster data embedded in SVG documents.

pub mod cli;
pub mod decode;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod output;
pub mod report;
pub mod types;

pub use decode::{decode, AssetKind, DecodedAsset, SkippedPayload};
pub use discovery::{locate, resolve_target, LocateOptions, Manifest};
pub use error::{Result, SwatchError};
pub use extract::{extract, palette_from_images, rank, unique_colours, Settings};
pub use report::{build, DetailedReport, Report};
pub use types::{Colour, PaletteItem};
