//! # Denticon - Deterministic Identicons
//!
//! Denticon derives a small, vertically symmetric mosaic from arbitrary data.
//! The same input always produces the same identicon, and different inputs
//! differ with high probability. It provides:
//!
//! - **Digest resolution**: hash raw data, or accept an existing hex digest
//! - **Block matrices**: mirrored boolean grids driven by digest bits
//! - **Color selection**: palette pick from the digest, optional inversion
//! - **Rendering**: any raster format the `image` crate encodes, or plain text
//!
//! ## Quick Start
//!
//! ```
//! use denticon::{Color, Generator, GeneratorConfig, Padding, RenderRequest};
//!
//! let config = GeneratorConfig::new(5, 5)
//!     .with_palette([Color::rgb(45, 79, 255), Color::rgb(254, 180, 44)])
//!     .with_background(Color::rgb(224, 224, 224));
//! let generator = Generator::new(config)?;
//!
//! let request = RenderRequest::new(200, 200).padding(Padding::uniform(20));
//! let png = generator.generate("alice@example.com", &request)?;
//! assert!(png.as_image().is_some());
//!
//! let text = generator.generate("alice@example.com", &request.format("ascii"))?;
//! println!("{}", text.as_text().unwrap_or_default());
//! # Ok::<(), denticon::IdenticonError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`digest`] | Digest algorithms and input resolution |
//! | [`entropy`] | Configuration-time entropy budget |
//! | [`matrix`] | Symmetric block matrix construction |
//! | [`color`] | Color parsing and selection |
//! | [`render`] | Raster and text renderers |
//! | [`config`] | Generator configuration and JSON settings |
//! | [`generator`] | Per-request pipeline |
//! | [`error`] | Error types |

pub mod color;
pub mod config;
pub mod digest;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod render;

// Re-exports for convenience
pub use color::Color;
pub use config::{GeneratorConfig, GeneratorSettings};
pub use digest::{DigestAlgorithm, HashAlgorithm};
pub use error::IdenticonError;
pub use generator::{Generator, RenderRequest};
pub use matrix::BlockMatrix;
pub use render::{Identicon, Padding};
