//! # Digest Resolution
//!
//! Turns request data into the 16 bytes the rest of the pipeline consumes.
//!
//! Data is treated as an already computed digest when it is exactly as long as
//! the hex encoding of the configured algorithm's output *and* decodes as hex.
//! Anything else, including hex-length strings that are not hex, is hashed.
//!
//! ```text
//! "e19c1283c925b3206685ff522acfe3e6"  (32 hex chars, md5)  → used as-is
//! "qqwweerrttyyuuiiooppaassddffgghh"  (32 chars, not hex)   → md5(data)
//! "this is a test\n"                  (15 chars)            → md5(data)
//! ```

use log::trace;

use super::DigestAlgorithm;

/// Number of digest bytes consumed per identicon.
///
/// Fixed regardless of the configured algorithm's native size. Bytes past the
/// window are discarded, so the construction-time entropy check (which looks
/// at the native size) does not bound grids for digests longer than this.
pub const DIGEST_WINDOW: usize = 16;

/// The 16 digest bytes an identicon is derived from.
///
/// Byte 0 selects the foreground color; bytes 1..16 feed the block matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestBytes([u8; DIGEST_WINDOW]);

impl DigestBytes {
    /// Take the leading window of `digest`. Missing bytes stay zero.
    pub fn from_digest(digest: &[u8]) -> Self {
        let mut bytes = [0u8; DIGEST_WINDOW];
        let n = digest.len().min(DIGEST_WINDOW);
        bytes[..n].copy_from_slice(&digest[..n]);
        Self(bytes)
    }

    /// Byte reserved for color selection.
    pub fn color_byte(&self) -> u8 {
        self.0[0]
    }

    /// Bytes used for grid construction.
    pub fn grid_bytes(&self) -> &[u8] {
        &self.0[1..]
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_WINDOW] {
        &self.0
    }
}

/// Resolve `data` into digest bytes using `algorithm`, whose native output
/// is `digest_len` bytes.
///
/// Never fails. Digests shorter than [`DIGEST_WINDOW`] are zero-extended;
/// [`crate::Generator`] rejects such algorithms up front.
pub fn resolve(data: &str, algorithm: &dyn DigestAlgorithm, digest_len: usize) -> DigestBytes {
    let digest = match decode_hex_digest(data, digest_len) {
        Some(digest) => {
            trace!("input is a {} hex digest, skipping hash", algorithm.name());
            digest
        }
        None => {
            trace!("hashing {} bytes of input with {}", data.len(), algorithm.name());
            algorithm.digest(data.as_bytes())
        }
    };

    DigestBytes::from_digest(&digest)
}

/// Decode `data` as a hex digest when it has the length of one.
fn decode_hex_digest(data: &str, digest_len: usize) -> Option<Vec<u8>> {
    if data.chars().count() / 2 != digest_len {
        return None;
    }
    hex::decode(data).ok()
}
