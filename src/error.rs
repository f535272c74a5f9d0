//! # Error Types
//!
//! This module defines error types used throughout the denticon library.

use thiserror::Error;

/// Main error type for identicon operations
#[derive(Debug, Error)]
pub enum IdenticonError {
    /// Generator configuration cannot produce identicons (entropy, grid, palette)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Requested output format is not supported by the raster backend
    #[error("Unsupported image format: {0}")]
    Format(String),

    /// Canvas dimensions do not fit the raster backend
    #[error("Invalid dimensions: {0}")]
    Dimensions(String),

    /// Color specifier could not be parsed
    #[error("Invalid color: {0}")]
    Color(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Settings (JSON) parse error
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, IdenticonError>;
