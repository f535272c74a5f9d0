//! # Rendering Module
//!
//! Turns a [`BlockMatrix`] plus a color [`Swatch`] into an output artifact.
//!
//! ## Modules
//!
//! - [`raster`]: encoded images via a [`RasterBackend`] (default: the `image` crate)
//! - [`text`]: plain-text matrices, one character per block
//!
//! ## Output Formats
//!
//! | Name | Output |
//! |------|--------|
//! | `ascii` | [`Identicon::Text`] |
//! | anything else | [`Identicon::Image`], if the backend knows the format |
//!
//! The `ascii` name is matched exactly; every other name is resolved by the
//! raster backend (case-insensitive for [`ImageBackend`]).
//!
//! [`BlockMatrix`]: crate::matrix::BlockMatrix
//! [`Swatch`]: crate::color::Swatch

pub mod raster;
pub mod text;

pub use raster::{ImageBackend, RasterBackend, render_raster};
pub use text::render_text;

/// Format name selecting text output.
pub const ASCII: &str = "ascii";

/// Requested output, resolved from a format name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat<'a> {
    /// Plain-text matrix.
    Ascii,
    /// Encoded image, format name passed to the raster backend.
    Raster(&'a str),
}

impl<'a> OutputFormat<'a> {
    pub fn parse(name: &'a str) -> Self {
        if name == ASCII {
            Self::Ascii
        } else {
            Self::Raster(name)
        }
    }
}

/// Pixel margin around the identicon, filled with the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    /// Same margin on all four sides.
    pub const fn uniform(pixels: u32) -> Self {
        Self {
            top: pixels,
            bottom: pixels,
            left: pixels,
            right: pixels,
        }
    }
}

/// `(top, bottom, left, right)`
impl From<(u32, u32, u32, u32)> for Padding {
    fn from((top, bottom, left, right): (u32, u32, u32, u32)) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// A generated identicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identicon {
    /// Encoded image bytes.
    Image(Vec<u8>),
    /// Text rendering.
    Text(String),
}

impl Identicon {
    /// Encoded image bytes, if this is an image.
    pub fn as_image(&self) -> Option<&[u8]> {
        match self {
            Self::Image(bytes) => Some(bytes),
            Self::Text(_) => None,
        }
    }

    /// Text rendering, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }

    /// Raw bytes of either variant (UTF-8 for text).
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Image(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("ascii"), OutputFormat::Ascii);
        assert_eq!(OutputFormat::parse("png"), OutputFormat::Raster("png"));
        // Only the exact name selects text output.
        assert_eq!(OutputFormat::parse("ASCII"), OutputFormat::Raster("ASCII"));
    }

    #[test]
    fn test_padding_from_tuple() {
        let padding = Padding::from((1, 2, 3, 4));
        assert_eq!(padding.top, 1);
        assert_eq!(padding.bottom, 2);
        assert_eq!(padding.left, 3);
        assert_eq!(padding.right, 4);
        assert_eq!(Padding::uniform(20), Padding::from((20, 20, 20, 20)));
    }

    #[test]
    fn test_identicon_accessors() {
        let text = Identicon::Text("+-".to_string());
        assert_eq!(text.as_text(), Some("+-"));
        assert!(text.as_image().is_none());
        assert_eq!(text.into_bytes(), b"+-".to_vec());

        let image = Identicon::Image(vec![1, 2, 3]);
        assert_eq!(image.as_image(), Some(&[1u8, 2, 3][..]));
        assert!(image.as_text().is_none());
    }
}
