// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::error::EntropyError;

/// Length in bytes of the seed accepted by [`fill_deterministic`].
pub const SEED_BYTES: usize = 32;

/// Fills `buf` with the ChaCha20 keystream keyed by `seed`.
///
/// The same seed always yields the same bytes, and a shorter output is a
/// prefix of a longer one. Meant for reproducible test vectors and
/// key expansion from an already secret seed; it adds no entropy.
///
/// # Errors
///
/// Returns [`EntropyError::InvalidSeedLength`] unless `seed` is exactly
/// [`SEED_BYTES`] long; `buf` is left untouched.
///
/// # Example
///
/// ```
/// use bulwark_rand::{SEED_BYTES, fill_deterministic};
///
/// let seed = [7u8; SEED_BYTES];
/// let mut a = [0u8; 64];
/// let mut b = [0u8; 16];
///
/// fill_deterministic(&mut a, &seed).unwrap();
/// fill_deterministic(&mut b, &seed).unwrap();
///
/// assert_eq!(&a[..16], &b);
/// ```
pub fn fill_deterministic(buf: &mut [u8], seed: &[u8]) -> Result<(), EntropyError> {
    bulwark_guard::ensure_ready();

    let mut key: [u8; SEED_BYTES] = seed
        .try_into()
        .map_err(|_| EntropyError::InvalidSeedLength {
            expected: SEED_BYTES,
            actual: seed.len(),
        })?;

    let mut rng = ChaCha20Rng::from_seed(key);
    bulwark_ct::zeroize(&mut key);

    rng.fill_bytes(buf);

    Ok(())
}
