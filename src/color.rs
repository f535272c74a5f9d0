//! # Colors
//!
//! Color specifiers and the deterministic foreground/background selection.
//!
//! ## Accepted Specifiers
//!
//! | Form | Example |
//! |------|---------|
//! | `#rgb` / `#rgba` | `#fa0`, `#fa08` |
//! | `#rrggbb` / `#rrggbbaa` | `#ffaa00`, `#ffaa0080` |
//! | `rgb(r, g, b)` | `rgb(45,79,255)` |
//! | `rgba(r, g, b, a)` | `rgba(45,79,255,128)` |
//! | Named | `black`, `white`, `navy`, ... |
//!
//! ## Selection
//!
//! Raster output picks `palette[color_byte % palette.len()]` against the
//! configured background. Text output ignores the palette and uses `+` on `-`.
//! Inversion swaps the pair.

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdenticonError;

/// Foreground character for text output.
pub const TEXT_FOREGROUND: char = '+';

/// Background character for text output.
pub const TEXT_BACKGROUND: char = '-';

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to an `image` pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    fn parse_function(args: &str, with_alpha: bool) -> Option<Self> {
        let parts: Vec<u8> = args
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        match (parts.as_slice(), with_alpha) {
            ([r, g, b], false) => Some(Self::rgb(*r, *g, *b)),
            ([r, g, b, a], true) => Some(Self::rgba(*r, *g, *b, *a)),
            _ => None,
        }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::rgb(0, 0, 0),
            "white" => Self::rgb(255, 255, 255),
            "red" => Self::rgb(255, 0, 0),
            "lime" => Self::rgb(0, 255, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "cyan" | "aqua" => Self::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Self::rgb(255, 0, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "silver" => Self::rgb(192, 192, 192),
            "maroon" => Self::rgb(128, 0, 0),
            "olive" => Self::rgb(128, 128, 0),
            "teal" => Self::rgb(0, 128, 128),
            "navy" => Self::rgb(0, 0, 128),
            "purple" => Self::rgb(128, 0, 128),
            "orange" => Self::rgb(255, 165, 0),
            "transparent" => Self::rgba(0, 0, 0, 0),
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for Color {
    type Err = IdenticonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim().to_lowercase();

        let parsed = if let Some(hex) = spec.strip_prefix('#') {
            Self::parse_hex(hex)
        } else if let Some(args) = spec.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            Self::parse_function(args, true)
        } else if let Some(args) = spec.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            Self::parse_function(args, false)
        } else {
            Self::named(&spec)
        };

        parsed.ok_or_else(|| IdenticonError::Color(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = IdenticonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Foreground colors of the sigil palette.
pub const SIGIL_PALETTE: [Color; 7] = [
    Color::rgb(45, 79, 255),
    Color::rgb(254, 180, 44),
    Color::rgb(226, 121, 234),
    Color::rgb(30, 179, 253),
    Color::rgb(232, 77, 65),
    Color::rgb(49, 203, 115),
    Color::rgb(141, 69, 170),
];

/// Background matching [`SIGIL_PALETTE`].
pub const SIGIL_BACKGROUND: Color = Color::rgb(224, 224, 224);

/// A foreground/background pair chosen for one identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch<T> {
    pub foreground: T,
    pub background: T,
}

impl<T> Swatch<T> {
    /// Swap foreground and background when `inverted` is set.
    pub fn inverted(self, inverted: bool) -> Self {
        if inverted {
            Self {
                foreground: self.background,
                background: self.foreground,
            }
        } else {
            self
        }
    }
}

/// Pick raster colors for `color_byte`. `palette` must be non-empty.
pub fn select_raster(color_byte: u8, palette: &[Color], background: Color, inverted: bool) -> Swatch<Color> {
    let foreground = palette[color_byte as usize % palette.len()];
    Swatch {
        foreground,
        background,
    }
    .inverted(inverted)
}

/// Pick text sentinels.
pub fn select_text(inverted: bool) -> Swatch<char> {
    Swatch {
        foreground: TEXT_FOREGROUND,
        background: TEXT_BACKGROUND,
    }
    .inverted(inverted)
}
