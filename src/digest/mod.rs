//! # Digest Algorithms
//!
//! Hash functions that turn input data into the bytes an identicon is built
//! from. Every algorithm implements [`DigestAlgorithm`]; the built-in ones are
//! collected in [`HashAlgorithm`].
//!
//! ## Built-in Algorithms
//!
//! | Name | Output | Max cells (`bits - 8`) |
//! |------|--------|------------------------|
//! | `md5` (default) | 16 bytes | 120 |
//! | `sha1` | 20 bytes | 152 |
//! | `sha256` | 32 bytes | 248 |
//! | `sha512` | 64 bytes | 504 |
//! | `blake2b` | 64 bytes | 504 |
//!
//! Only the first 16 bytes of any digest are consumed (see [`resolve`]), so
//! the larger budgets above are what the entropy check accepts, not what the
//! grid can actually use.
//!
//! ## Custom Algorithms
//!
//! ```
//! use denticon::digest::DigestAlgorithm;
//!
//! #[derive(Debug)]
//! struct Xor16;
//!
//! impl DigestAlgorithm for Xor16 {
//!     fn name(&self) -> &str {
//!         "xor16"
//!     }
//!
//!     fn digest(&self, data: &[u8]) -> Vec<u8> {
//!         let mut out = vec![0u8; 16];
//!         for (i, b) in data.iter().enumerate() {
//!             out[i % 16] ^= b;
//!         }
//!         out
//!     }
//! }
//!
//! assert_eq!(Xor16.output_len(), 16);
//! ```

pub mod resolve;

use serde::{Deserialize, Serialize};
use sha2::Digest;
use std::fmt;

use crate::error::IdenticonError;

pub use resolve::{DIGEST_WINDOW, DigestBytes, resolve};

/// All built-in algorithm names, in display order.
pub const ALGORITHMS: &[&str] = &["md5", "sha1", "sha256", "sha512", "blake2b"];

/// Capability producing a fixed-length byte digest from bytes.
pub trait DigestAlgorithm: Send + Sync + fmt::Debug {
    /// Algorithm name (lowercase, e.g., "md5").
    fn name(&self) -> &str;

    /// Digest `data`. Must always return the same number of bytes.
    fn digest(&self, data: &[u8]) -> Vec<u8>;

    /// Native digest size in bytes.
    ///
    /// Measured by hashing a fixed input unless the implementation knows better.
    fn output_len(&self) -> usize {
        self.digest(b"test").len()
    }
}

/// Built-in RustCrypto hash functions.
///
/// Deserializes through [`by_name`], so settings accept the same names and
/// aliases as lookups do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Blake2b,
}

impl TryFrom<String> for HashAlgorithm {
    type Error = IdenticonError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        by_name(&name).ok_or_else(|| {
            IdenticonError::Configuration(format!(
                "unknown digest algorithm '{}', expected one of {}",
                name,
                ALGORITHMS.join(", ")
            ))
        })
    }
}

impl DigestAlgorithm for HashAlgorithm {
    fn name(&self) -> &str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Blake2b => "blake2b",
        }
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => hash::<md5::Md5>(data),
            Self::Sha1 => hash::<sha1::Sha1>(data),
            Self::Sha256 => hash::<sha2::Sha256>(data),
            Self::Sha512 => hash::<sha2::Sha512>(data),
            Self::Blake2b => hash::<blake2::Blake2b512>(data),
        }
    }

    fn output_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 | Self::Blake2b => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn hash<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

/// Get a built-in algorithm by name (case-insensitive).
pub fn by_name(name: &str) -> Option<HashAlgorithm> {
    match name.to_lowercase().as_str() {
        "md5" => Some(HashAlgorithm::Md5),
        "sha1" | "sha-1" => Some(HashAlgorithm::Sha1),
        "sha256" | "sha-256" => Some(HashAlgorithm::Sha256),
        "sha512" | "sha-512" => Some(HashAlgorithm::Sha512),
        "blake2b" | "blake2b512" => Some(HashAlgorithm::Blake2b),
        _ => None,
    }
}
