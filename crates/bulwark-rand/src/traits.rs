// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Implementations must provide randomness suitable for key and nonce
/// generation. Typically backed by OS-level CSPRNGs.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the entropy source
    /// is unavailable or fails to generate random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns a uniformly distributed `u32`.
    fn random_u32(&self) -> Result<u32, EntropyError> {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes)?;

        Ok(u32::from_le_bytes(bytes))
    }

    /// Returns a value uniformly distributed in `0..upper_bound`.
    ///
    /// Draws are rejected until they fall in a range that is an exact
    /// multiple of `upper_bound`, so no residue is favoured. Returns 0 when
    /// `upper_bound < 2` without consuming entropy.
    fn uniform(&self, upper_bound: u32) -> Result<u32, EntropyError> {
        if upper_bound < 2 {
            return Ok(0);
        }

        // 2^32 mod upper_bound: values below it would bias the result.
        let min = upper_bound.wrapping_neg() % upper_bound;

        loop {
            let r = self.random_u32()?;

            if r >= min {
                return Ok(r % upper_bound);
            }
        }
    }
}
