//! # Generator Configuration
//!
//! Immutable settings a [`Generator`](crate::Generator) is built from.
//!
//! ## Defaults
//!
//! | Setting | Default |
//! |---------|---------|
//! | digest | `md5` |
//! | foreground palette | `["#000000"]` |
//! | background | `#ffffff` |
//!
//! ## Loading From JSON
//!
//! ```
//! use denticon::config::GeneratorSettings;
//!
//! let settings = GeneratorSettings::from_json(r##"{
//!     "rows": 6,
//!     "columns": 6,
//!     "digest": "sha1",
//!     "foreground": ["rgb(45,79,255)", "#feb42c"],
//!     "background": "#e0e0e0"
//! }"##)?;
//! let config = settings.into_config();
//! assert_eq!(config.rows(), 6);
//! # Ok::<(), denticon::IdenticonError>(())
//! ```

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::color::{Color, SIGIL_BACKGROUND, SIGIL_PALETTE};
use crate::digest::{DIGEST_WINDOW, DigestAlgorithm, HashAlgorithm};
use crate::entropy;
use crate::error::{IdenticonError, Result};

/// Grid dimensions, digest algorithm and colors for a generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    rows: usize,
    columns: usize,
    digest: Arc<dyn DigestAlgorithm>,
    digest_len: usize,
    palette: Vec<Color>,
    background: Color,
}

impl GeneratorConfig {
    /// `rows × columns` grid with the default digest and colors.
    pub fn new(rows: usize, columns: usize) -> Self {
        let digest = HashAlgorithm::default();
        Self {
            rows,
            columns,
            digest_len: digest.output_len(),
            digest: Arc::new(digest),
            palette: vec![Color::BLACK],
            background: Color::WHITE,
        }
    }

    /// Digest algorithm. Its output length is computed once, here.
    pub fn with_digest(mut self, digest: impl DigestAlgorithm + 'static) -> Self {
        self.digest_len = digest.output_len();
        self.digest = Arc::new(digest);
        self
    }

    /// Foreground colors; one is picked per identicon.
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn digest(&self) -> &dyn DigestAlgorithm {
        self.digest.as_ref()
    }

    /// Native output length of the digest, in bytes.
    pub fn digest_len(&self) -> usize {
        self.digest_len
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Check the configuration can produce identicons.
    ///
    /// The entropy check uses the digest's native length, but only the first
    /// [`DIGEST_WINDOW`] bytes are ever consumed. A digest longer than the
    /// window passes for grids it cannot fully drive; those trailing cells
    /// stay background. Kept for output compatibility.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(IdenticonError::Configuration(format!(
                "grid must have at least one block, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.palette.is_empty() {
            return Err(IdenticonError::Configuration(
                "foreground palette is empty".to_string(),
            ));
        }

        let digest_len = self.digest_len;
        entropy::check(self.digest.name(), digest_len, self.rows, self.columns)?;

        if digest_len < DIGEST_WINDOW {
            return Err(IdenticonError::Configuration(format!(
                "digest '{}' produces {} bytes, at least {} are required",
                self.digest.name(),
                digest_len,
                DIGEST_WINDOW
            )));
        }

        let usable = entropy::provided_bits(DIGEST_WINDOW);
        let required = entropy::required_bits(self.rows, self.columns);
        if required > usable {
            warn!(
                "{}x{} grid needs {} bits but only {} are consumed; trailing cells stay background",
                self.rows, self.columns, required, usable
            );
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorSettings::default().into_config()
    }
}

// ============================================================================
// SERIALIZED SETTINGS
// ============================================================================

/// Serializable form of [`GeneratorConfig`] restricted to built-in digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub rows: usize,
    pub columns: usize,
    pub digest: HashAlgorithm,
    pub foreground: Vec<Color>,
    pub background: Color,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 5,
            digest: HashAlgorithm::Md5,
            foreground: vec![Color::BLACK],
            background: Color::WHITE,
        }
    }
}

impl GeneratorSettings {
    /// Seven bright colors on light grey, 5x5.
    pub fn sigil() -> Self {
        Self {
            foreground: SIGIL_PALETTE.to_vec(),
            background: SIGIL_BACKGROUND,
            ..Default::default()
        }
    }

    /// Look up a built-in preset by name (`"default"`, `"sigil"`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "sigil" => Some(Self::sigil()),
            _ => None,
        }
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn into_config(self) -> GeneratorConfig {
        GeneratorConfig::new(self.rows, self.columns)
            .with_digest(self.digest)
            .with_palette(self.foreground)
            .with_background(self.background)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct TwoBytes;

    impl DigestAlgorithm for TwoBytes {
        fn name(&self) -> &str {
            "two-bytes"
        }

        fn digest(&self, _data: &[u8]) -> Vec<u8> {
            vec![0xaa, 0xbb]
        }
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new(5, 5);
        assert_eq!(config.digest().name(), "md5");
        assert_eq!(config.palette(), &[Color::BLACK]);
        assert_eq!(config.background(), Color::WHITE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = GeneratorConfig::new(5, 5)
            .with_digest(HashAlgorithm::Sha1)
            .with_palette([Color::rgb(0x11, 0x11, 0x11), Color::rgb(0x22, 0x22, 0x22)])
            .with_background(Color::rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(config.digest().output_len() * 8, 160);
        assert_eq!(config.palette().len(), 2);
        assert_eq!(config.background().to_string(), "#aabbcc");
    }

    #[test]
    fn test_insufficient_entropy() {
        let err = GeneratorConfig::new(5, 5).with_digest(TwoBytes).validate().unwrap_err();
        assert!(matches!(err, IdenticonError::Configuration(_)));
    }

    #[test]
    fn test_digest_shorter_than_window() {
        // 1x1 needs only 9 bits, but 16 bytes are always consumed.
        let err = GeneratorConfig::new(1, 1).with_digest(TwoBytes).validate().unwrap_err();
        assert!(err.to_string().contains("at least 16"));
    }

    #[test]
    fn test_zero_grid_rejected() {
        assert!(GeneratorConfig::new(0, 5).validate().is_err());
        assert!(GeneratorConfig::new(5, 0).validate().is_err());
    }

    #[test]
    fn test_empty_palette_rejected() {
        let err = GeneratorConfig::new(5, 5).with_palette([]).validate().unwrap_err();
        assert!(err.to_string().contains("palette"));
    }

    #[test]
    fn test_md5_grid_limit() {
        // ceil(15/2) * 15 + 8 = 128
        assert!(GeneratorConfig::new(15, 15).validate().is_ok());
        assert!(GeneratorConfig::new(16, 15).validate().is_err());
    }

    #[test]
    fn test_settings_from_json() {
        let settings = GeneratorSettings::from_json(
            r##"{"rows": 7, "digest": "sha256", "foreground": ["#111111", "navy"]}"##,
        )
        .unwrap();
        assert_eq!(settings.rows, 7);
        assert_eq!(settings.columns, 5);
        assert_eq!(settings.digest, HashAlgorithm::Sha256);
        assert_eq!(settings.foreground, vec![Color::rgb(0x11, 0x11, 0x11), Color::rgb(0, 0, 128)]);
        assert_eq!(settings.background, Color::WHITE);
    }

    #[test]
    fn test_settings_invalid_color() {
        let err = GeneratorSettings::from_json(r#"{"background": "nope"}"#).unwrap_err();
        assert!(matches!(err, IdenticonError::Settings(_)));
    }

    #[test]
    fn test_settings_unknown_digest() {
        assert!(GeneratorSettings::from_json(r#"{"digest": "crc32"}"#).is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(GeneratorSettings::preset("default"), Some(GeneratorSettings::default()));
        let sigil = GeneratorSettings::preset("SIGIL").unwrap();
        assert_eq!(sigil.foreground.len(), 7);
        assert_eq!(sigil.background, Color::rgb(224, 224, 224));
        assert!(GeneratorSettings::preset("unknown").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorSettings::load("/nonexistent/denticon.json").unwrap_err();
        assert!(matches!(err, IdenticonError::Io(_)));
    }
}
