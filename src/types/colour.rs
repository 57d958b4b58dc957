//! Colour type and the fixed art palette.
//!
//! Boards and cards draw from a small named palette; colours serialize into
//! SVG `style` attributes as lowercase six-digit hex, matching the shipped
//! assets byte-for-byte.

use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, Result};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
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

    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const CORNFLOWER_BLUE: Self = Self::rgb(0x64, 0x95, 0xed);
    pub const DAFFODIL: Self = Self::rgb(0xff, 0xff, 0x31);
    pub const GOLD: Self = Self::rgb(0xff, 0xd7, 0x00);
    pub const GREEN: Self = Self::rgb(0x00, 0x80, 0x00);
    pub const IVORY: Self = Self::rgb(0xff, 0xff, 0xf0);
    pub const PALE_AQUA: Self = Self::rgb(0xbc, 0xd4, 0xe6);
    pub const SAND: Self = Self::rgb(0xc2, 0xb2, 0x80);
    pub const SCARLET: Self = Self::rgb(0xff, 0x24, 0x00);
    pub const SIENNA: Self = Self::rgb(0xa0, 0x52, 0x2d);
    pub const SLATE: Self = Self::rgb(0x70, 0x80, 0x90);
    pub const TEA_GREEN: Self = Self::rgb(0xd0, 0xf0, 0xc0);

    /// Land polygon fill.
    pub const LAND: Self = Self::rgb(0x00, 0xff, 0x00);
    /// River polygon fill.
    pub const RIVER: Self = Self::rgb(0x00, 0x99, 0xff);
    /// Landmark marker fill.
    pub const LANDMARK: Self = Self::rgb(0xcc, 0x99, 0x99);
    /// Dry square fill on the grid board.
    pub const PARCHMENT: Self = Self::rgb(0xfc, 0xef, 0xde);
    /// Water square fill on the grid board.
    pub const WATER: Self = Self::rgb(0x67, 0xa7, 0xc4);

    /// Parse a six-digit hex colour string, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
        if hex.len() != 6 {
            return Err(BoardError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use RRGGBB format".to_string()),
            });
        }
        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// SVG style attribute for a filled, stroked shape.
    pub fn fill_style(self, stroke: Colour, stroke_width: &str) -> String {
        format!(
            "fill:#{};stroke:#{};stroke-width:{}px",
            self, stroke, stroke_width
        )
    }

    /// SVG style attribute for an unfilled stroke (lines).
    pub fn stroke_style(self, stroke_width: &str) -> String {
        format!("stroke:#{};stroke-width:{}px", self, stroke_width)
    }
}

impl FromStr for Colour {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| BoardError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Colour::from_hex("#00ff00").unwrap(), Colour::LAND);
        assert_eq!(Colour::from_hex("0099ff").unwrap(), Colour::RIVER);
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("zzzzzz").is_err());
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Colour::TEA_GREEN.to_string(), "d0f0c0");
        assert_eq!(Colour::BLACK.to_string(), "000000");
    }

    #[test]
    fn test_fill_style() {
        assert_eq!(
            Colour::LAND.fill_style(Colour::BLACK, "1"),
            "fill:#00ff00;stroke:#000000;stroke-width:1px"
        );
    }

    #[test]
    fn test_stroke_style() {
        assert_eq!(
            Colour::BLACK.stroke_style("0.3"),
            "stroke:#000000;stroke-width:0.3px"
        );
    }
}
