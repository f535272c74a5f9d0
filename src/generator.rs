//! # Identicon Generator
//!
//! Composes the pipeline for each request:
//!
//! ```text
//! data ─→ resolve ─→ DigestBytes ─┬─→ matrix::build ─→ BlockMatrix ─┐
//!                                 └─→ color::select ─→ Swatch ──────┴─→ render ─→ Identicon
//! ```
//!
//! A generator only holds its configuration and never mutates it, so one
//! instance can serve any number of threads.

use log::{debug, trace};

use crate::color;
use crate::config::GeneratorConfig;
use crate::digest::{DigestBytes, resolve};
use crate::entropy;
use crate::error::Result;
use crate::matrix::{self, BlockMatrix};
use crate::render::{self, ImageBackend, Identicon, OutputFormat, Padding, RasterBackend};

/// Parameters of a single identicon request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Width of the block area in pixels, excluding padding.
    pub width: u32,
    /// Height of the block area in pixels, excluding padding.
    pub height: u32,
    pub padding: Padding,
    /// Raster format name (`png`, `jpeg`, `gif`, ...) or `ascii`.
    pub format: String,
    /// Swap foreground and background.
    pub inverted: bool,
}

impl RenderRequest {
    /// PNG request with no padding.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
            format: "png".to_string(),
            inverted: false,
        }
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

/// Deterministic identicon factory.
///
/// ```
/// use denticon::{Generator, GeneratorConfig, RenderRequest};
///
/// let generator = Generator::new(GeneratorConfig::new(5, 5))?;
/// let text = generator.generate("this is a test\n", &RenderRequest::new(200, 200).format("ascii"))?;
/// assert_eq!(text.as_text().map(|t| t.lines().count()), Some(5));
/// # Ok::<(), denticon::IdenticonError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator<B = ImageBackend> {
    config: GeneratorConfig,
    backend: B,
}

impl Generator<ImageBackend> {
    /// Validate `config` and create a generator using the `image` backend.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_backend(config, ImageBackend)
    }
}

impl<B: RasterBackend> Generator<B> {
    /// Validate `config` and create a generator drawing through `backend`.
    pub fn with_backend(config: GeneratorConfig, backend: B) -> Result<Self> {
        config.validate()?;
        debug!(
            "identicon generator: {}x{} grid, digest {} ({} of {} bits needed), {} foreground color(s)",
            config.rows(),
            config.columns(),
            config.digest().name(),
            entropy::required_bits(config.rows(), config.columns()),
            entropy::provided_bits(config.digest_len()),
            config.palette().len()
        );
        Ok(Self { config, backend })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Digest bytes `data` resolves to.
    pub fn digest_bytes(&self, data: &str) -> DigestBytes {
        resolve(data, self.config.digest(), self.config.digest_len())
    }

    /// Block matrix for `data`.
    pub fn matrix(&self, data: &str) -> BlockMatrix {
        self.build_matrix(&self.digest_bytes(data))
    }

    fn build_matrix(&self, bytes: &DigestBytes) -> BlockMatrix {
        matrix::build(bytes.grid_bytes(), self.config.rows(), self.config.columns())
    }

    /// Generate the identicon for `data`.
    ///
    /// Fails with [`IdenticonError::Format`](crate::IdenticonError::Format)
    /// when the backend does not know `request.format`.
    pub fn generate(&self, data: &str, request: &RenderRequest) -> Result<Identicon> {
        let bytes = self.digest_bytes(data);
        let matrix = self.build_matrix(&bytes);
        trace!("generating {} identicon (inverted: {})", request.format, request.inverted);

        match OutputFormat::parse(&request.format) {
            OutputFormat::Ascii => {
                let swatch = color::select_text(request.inverted);
                Ok(Identicon::Text(render::render_text(&matrix, swatch)))
            }
            OutputFormat::Raster(name) => {
                let swatch = color::select_raster(
                    bytes.color_byte(),
                    self.config.palette(),
                    self.config.background(),
                    request.inverted,
                );
                let image = render::render_raster(
                    &self.backend,
                    &matrix,
                    request.width,
                    request.height,
                    request.padding,
                    swatch,
                    name,
                )?;
                Ok(Identicon::Image(image))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::IdenticonError;
    use pretty_assertions::assert_eq;
    use crate::digest::{DigestAlgorithm, HashAlgorithm};
    use std::cell::RefCell;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records the colors it is asked to draw with; encodes nothing.
    #[derive(Debug, Default)]
    struct RecordingBackend {
        backgrounds: RefCell<Vec<Color>>,
        foregrounds: RefCell<Vec<Color>>,
    }

    impl RasterBackend for RecordingBackend {
        type Canvas = ();
        type Format = ();

        fn format(&self, name: &str) -> Result<()> {
            if name == "png" {
                Ok(())
            } else {
                Err(IdenticonError::Format(name.to_string()))
            }
        }

        fn new_canvas(&self, _width: u32, _height: u32, background: Color) {
            self.backgrounds.borrow_mut().push(background);
        }

        fn fill_rect(&self, _canvas: &mut (), _x1: u32, _y1: u32, _x2: u32, _y2: u32, color: Color) {
            self.foregrounds.borrow_mut().push(color);
        }

        fn prepare(&self, canvas: (), _format: ()) {
            canvas
        }

        fn encode(&self, _canvas: &(), _format: ()) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    fn recording(config: GeneratorConfig) -> Generator<RecordingBackend> {
        Generator::with_backend(config, RecordingBackend::default()).unwrap()
    }

    /// md5 that counts how often it runs.
    #[derive(Debug, Default)]
    struct CountingMd5 {
        calls: Arc<AtomicUsize>,
    }

    impl DigestAlgorithm for CountingMd5 {
        fn name(&self) -> &str {
            "counting-md5"
        }

        fn digest(&self, data: &[u8]) -> Vec<u8> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            HashAlgorithm::Md5.digest(data)
        }
    }

    #[test]
    fn test_digest_length_computed_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = GeneratorConfig::new(5, 5).with_digest(CountingMd5 { calls: Arc::clone(&calls) });
        let generator = Generator::new(config).unwrap();
        assert_eq!(generator.config().digest_len(), 16);
        let setup_calls = calls.load(Ordering::SeqCst);

        let request = RenderRequest::new(10, 10).format("ascii");
        for _ in 0..3 {
            generator.generate("some test data", &request).unwrap();
        }
        // One hash per request, no extra length checks.
        assert_eq!(calls.load(Ordering::SeqCst), setup_calls + 3);

        // Hex digests skip hashing entirely.
        generator.generate("79c03eb6dc4506fe20155061e7692258", &request).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), setup_calls + 3);
    }

    #[test]
    fn test_request_defaults() {
        let request = RenderRequest::new(200, 100);
        assert_eq!(request.format, "png");
        assert_eq!(request.padding, Padding::default());
        assert!(!request.inverted);
    }

    #[test]
    fn test_inverted_swaps_raster_colors() {
        let foreground = Color::WHITE;
        let background = Color::BLACK;
        let config = GeneratorConfig::new(5, 5)
            .with_palette([foreground])
            .with_background(background);

        let generator = recording(config.clone());
        generator.generate("Some test data", &RenderRequest::new(200, 200)).unwrap();
        assert_eq!(generator.backend.backgrounds.borrow().as_slice(), &[background]);
        assert!(generator.backend.foregrounds.borrow().iter().all(|&c| c == foreground));

        let generator = recording(config);
        generator
            .generate("Some test data", &RenderRequest::new(200, 200).inverted(true))
            .unwrap();
        assert_eq!(generator.backend.backgrounds.borrow().as_slice(), &[foreground]);
        assert!(generator.backend.foregrounds.borrow().iter().all(|&c| c == background));
    }

    #[test]
    fn test_foreground_selected_from_first_byte() {
        let palette: Vec<Color> = (0..6u8).map(|i| Color::rgb(i * 0x11, i * 0x11, i * 0x11)).collect();
        let config = GeneratorConfig::new(5, 5).with_palette(palette.clone());

        // md5("some test data")[0] == 121, 121 % 6 == 1
        let generator = recording(config.clone());
        generator.generate("some test data", &RenderRequest::new(200, 200)).unwrap();
        assert!(!generator.backend.foregrounds.borrow().is_empty());
        assert!(generator.backend.foregrounds.borrow().iter().all(|&c| c == palette[1]));

        // md5("some other test data")[0] == 149, 149 % 6 == 5
        let generator = recording(config);
        generator.generate("some other test data", &RenderRequest::new(200, 200)).unwrap();
        assert!(generator.backend.foregrounds.borrow().iter().all(|&c| c == palette[5]));
    }

    #[test]
    fn test_ascii_never_touches_backend() {
        let generator = recording(GeneratorConfig::new(5, 5));
        let result = generator
            .generate("some test data", &RenderRequest::new(200, 200).format("ascii"))
            .unwrap();
        assert!(result.as_text().is_some());
        assert!(generator.backend.backgrounds.borrow().is_empty());
    }

    #[test]
    fn test_ascii_inversion_swaps_sentinels() {
        let generator = Generator::new(GeneratorConfig::new(5, 5)).unwrap();
        let request = RenderRequest::new(200, 200).format("ascii");
        let normal = generator.generate("Some test data", &request).unwrap();
        let inverted = generator.generate("Some test data", &request.inverted(true)).unwrap();

        let swapped: String = normal
            .as_text()
            .unwrap()
            .chars()
            .map(|c| match c {
                '+' => '-',
                '-' => '+',
                other => other,
            })
            .collect();
        assert_eq!(inverted.as_text().unwrap(), swapped);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let generator = Generator::new(GeneratorConfig::new(5, 5)).unwrap();
        let err = generator
            .generate("some test data", &RenderRequest::new(200, 200).format("invalid"))
            .unwrap_err();
        assert!(matches!(err, IdenticonError::Format(ref name) if name == "invalid"));
    }

    #[test]
    fn test_matrix_matches_text_output() {
        let generator = Generator::new(GeneratorConfig::new(5, 5)).unwrap();
        let matrix = generator.matrix("test1");
        let text = generator
            .generate("test1", &RenderRequest::new(10, 10).format("ascii"))
            .unwrap();
        let expected = render::render_text(&matrix, color::select_text(false));
        assert_eq!(text.as_text().unwrap(), expected);
        assert!(matrix.is_symmetric());
    }
}
