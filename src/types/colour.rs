//! Colour type and hex formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SwatchError};

/// An opaque 8-bit RGB colour.
///
/// Ordering compares channels in `r`, `g`, `b` order, which is what the
/// ranker uses to break frequency ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#rrggbb` hex string (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(SwatchError::Config {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RRGGBB format".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }
}

impl From<image::Rgb<u8>> for Colour {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::rgb(r, g, b)
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::Config {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#ff0000");
        assert_eq!(Colour::rgb(0x1a, 0xbc, 0x2e).to_string(), "#1abc2e");
        assert_eq!(Colour::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Colour::from_hex("#FF0000").unwrap(), Colour::rgb(255, 0, 0));
        assert_eq!(Colour::from_hex("1a1a2e").unwrap(), Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#F00").is_err());
        assert!(Colour::from_hex("#GGGGGG").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_ordering_is_channelwise() {
        assert!(Colour::rgb(0, 255, 0) > Colour::rgb(0, 0, 255));
        assert!(Colour::rgb(1, 0, 0) > Colour::rgb(0, 255, 255));
        assert!(Colour::WHITE > Colour::BLACK);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Colour::rgb(0, 128, 255)).unwrap();
        assert_eq!(json, "\"#0080ff\"");

        let back: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Colour::rgb(0, 128, 255));
    }
}
