//! # Raster Rendering
//!
//! Paints the block matrix onto a padded canvas and encodes it.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────── width + left + right ────────────────┐
//! │                      top padding                     │
//! │      ┌────────┬────────┬────────┬────────┬────────┐  │
//! │ left │ block  │ block  │  ...   │        │        │  │ right
//! │      ├────────┼────────┼────────┼────────┼────────┤  │
//! │      │        │        │        │        │        │  │
//! │      └────────┴────────┴────────┴────────┴────────┘  │
//! │                    bottom padding                    │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Block size is `width / columns` by `height / rows` (integer division), so
//! any remainder stays background on the right and bottom edges.
//!
//! Drawing and encoding go through [`RasterBackend`]; [`ImageBackend`] is the
//! implementation on top of the `image` crate.

use image::{DynamicImage, GenericImage, ImageError, ImageFormat, RgbaImage};
use log::{debug, trace};
use std::io::Cursor;

use crate::color::{Color, Swatch};
use crate::error::{IdenticonError, Result};
use crate::matrix::BlockMatrix;

use super::Padding;

/// Minimal 2D drawing and encoding capability.
pub trait RasterBackend {
    type Canvas;
    type Format: Copy;

    /// Resolve a format name. Unknown names fail with [`IdenticonError::Format`].
    fn format(&self, name: &str) -> Result<Self::Format>;

    /// New RGBA canvas filled with `background`.
    fn new_canvas(&self, width: u32, height: u32, background: Color) -> Self::Canvas;

    /// Fill the inclusive rectangle `(x1, y1)..=(x2, y2)`.
    fn fill_rect(&self, canvas: &mut Self::Canvas, x1: u32, y1: u32, x2: u32, y2: u32, color: Color);

    /// Convert the RGBA canvas to the color mode `format` encodes. Formats
    /// without an alpha channel get an opaque canvas.
    fn prepare(&self, canvas: Self::Canvas, format: Self::Format) -> Self::Canvas;

    /// Encode `canvas` into `format`.
    fn encode(&self, canvas: &Self::Canvas, format: Self::Format) -> Result<Vec<u8>>;
}

/// [`RasterBackend`] backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageBackend;

impl RasterBackend for ImageBackend {
    type Canvas = DynamicImage;
    type Format = ImageFormat;

    fn format(&self, name: &str) -> Result<ImageFormat> {
        match ImageFormat::from_extension(name) {
            Some(format) if format.writing_enabled() => Ok(format),
            _ => Err(IdenticonError::Format(name.to_string())),
        }
    }

    fn new_canvas(&self, width: u32, height: u32, background: Color) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, background.to_rgba()))
    }

    fn fill_rect(&self, canvas: &mut DynamicImage, x1: u32, y1: u32, x2: u32, y2: u32, color: Color) {
        if canvas.width() == 0 || canvas.height() == 0 {
            return;
        }
        let pixel = color.to_rgba();
        let x_end = x2.min(canvas.width() - 1);
        let y_end = y2.min(canvas.height() - 1);
        for y in y1..=y_end {
            for x in x1..=x_end {
                canvas.put_pixel(x, y, pixel);
            }
        }
    }

    fn prepare(&self, canvas: DynamicImage, format: ImageFormat) -> DynamicImage {
        match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(canvas.to_rgb8()),
            ImageFormat::Farbfeld => DynamicImage::ImageRgba16(canvas.to_rgba16()),
            ImageFormat::Hdr => DynamicImage::ImageRgb32F(canvas.to_rgb32f()),
            ImageFormat::OpenExr => DynamicImage::ImageRgba32F(canvas.to_rgba32f()),
            _ => canvas,
        }
    }

    fn encode(&self, canvas: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        match canvas.write_to(&mut Cursor::new(&mut bytes), format) {
            Ok(()) => Ok(bytes),
            Err(ImageError::Unsupported(e)) => Err(IdenticonError::Format(e.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Render `matrix` as an encoded image.
///
/// `width` and `height` size the block area; padding is added around it.
pub fn render_raster<B: RasterBackend>(
    backend: &B,
    matrix: &BlockMatrix,
    width: u32,
    height: u32,
    padding: Padding,
    swatch: Swatch<Color>,
    format_name: &str,
) -> Result<Vec<u8>> {
    // Resolve first so unknown formats fail before any drawing.
    let format = backend.format(format_name)?;

    let canvas_width = width
        .checked_add(padding.left)
        .and_then(|w| w.checked_add(padding.right))
        .ok_or_else(|| IdenticonError::Dimensions(format!("width {} with padding {:?}", width, padding)))?;
    let canvas_height = height
        .checked_add(padding.top)
        .and_then(|h| h.checked_add(padding.bottom))
        .ok_or_else(|| IdenticonError::Dimensions(format!("height {} with padding {:?}", height, padding)))?;
    let mut canvas = backend.new_canvas(canvas_width, canvas_height, swatch.background);

    let block_width = width / matrix.columns().max(1) as u32;
    let block_height = height / matrix.rows().max(1) as u32;
    trace!(
        "rendering {}x{} blocks of {}x{}px onto {}x{} canvas",
        matrix.rows(),
        matrix.columns(),
        block_width,
        block_height,
        canvas_width,
        canvas_height
    );

    if block_width > 0 && block_height > 0 {
        for (row, column) in matrix.filled() {
            let (row, column) = (row as u32, column as u32);
            let x1 = padding.left + column * block_width;
            let y1 = padding.top + row * block_height;
            let x2 = padding.left + (column + 1) * block_width - 1;
            let y2 = padding.top + (row + 1) * block_height - 1;
            backend.fill_rect(&mut canvas, x1, y1, x2, y2, swatch.foreground);
        }
    }

    let canvas = backend.prepare(canvas, format);
    backend.encode(&canvas, format).map_err(|e| match e {
        IdenticonError::Format(reason) => {
            debug!("{} encoder rejected the canvas: {}", format_name, reason);
            IdenticonError::Format(format_name.to_string())
        }
        other => other,
    })
}
