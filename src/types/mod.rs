//! Core value types for swatch.

pub mod colour;
pub mod palette;

pub use colour::Colour;
pub use palette::PaletteItem;
