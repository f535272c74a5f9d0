//! # Entropy Budget
//!
//! A grid of `rows × columns` blocks is built from one bit per cell of the
//! left half (center column included), plus one whole byte reserved for the
//! foreground color:
//!
//! ```text
//! required = ceil(columns / 2) * rows + 8
//! provided = digest_len * 8
//! ```
//!
//! The budget is a property of the algorithm, not of any input, so it is
//! checked once when a generator is configured.

use crate::error::{IdenticonError, Result};

/// Bits needed to fill a `rows × columns` grid and pick a color.
pub fn required_bits(rows: usize, columns: usize) -> usize {
    columns.div_ceil(2) * rows + 8
}

/// Bits a digest of `digest_len` bytes provides.
pub fn provided_bits(digest_len: usize) -> usize {
    digest_len * 8
}

/// Fail with [`IdenticonError::Configuration`] if the digest is too small.
pub fn check(algorithm: &str, digest_len: usize, rows: usize, columns: usize) -> Result<()> {
    let required = required_bits(rows, columns);
    let provided = provided_bits(digest_len);
    if provided < required {
        return Err(IdenticonError::Configuration(format!(
            "digest '{}' provides {} bits of entropy, {}x{} grid needs {}",
            algorithm, provided, rows, columns, required
        )));
    }
    Ok(())
}
