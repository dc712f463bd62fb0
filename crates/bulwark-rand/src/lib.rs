// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # bulwark_rand
//!
//! Random bytes for keys, nonces and seeds stored in bulwark buffers.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`), also a
//!   `rand_core::TryCryptoRng`
//! - [`EntropySource`]: interface for CSPRNGs, with [`random_u32`] and
//!   unbiased [`uniform`] sampling on top of `fill_bytes`
//!
//! ## Functions
//!
//! - [`fill`]: fill a buffer from the system CSPRNG
//! - [`fill_deterministic`]: fill a buffer from a ChaCha20 keystream keyed
//!   by a [`SEED_BYTES`] seed
//!
//! ## Example
//!
//! ```rust
//! use bulwark_rand::{SEED_BYTES, fill, fill_deterministic, uniform};
//!
//! let mut key = [0u8; 32];
//! fill(&mut key).expect("Failed to fill(..)");
//!
//! let mut stream = [0u8; 16];
//! fill_deterministic(&mut stream, &[0u8; SEED_BYTES]).expect("Failed to fill_deterministic(..)");
//!
//! let die = uniform(6).expect("Failed to uniform(..)");
//! assert!(die < 6);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod deterministic;
mod error;
mod support;
mod system;
mod traits;

pub use deterministic::{SEED_BYTES, fill_deterministic};
pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

/// Fills `buf` from the system CSPRNG.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the OS source fails.
pub fn fill(buf: &mut [u8]) -> Result<(), EntropyError> {
    bulwark_guard::ensure_ready();
    SystemEntropySource {}.fill_bytes(buf)
}

/// Returns a random `u32` from the system CSPRNG.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the OS source fails.
pub fn random_u32() -> Result<u32, EntropyError> {
    bulwark_guard::ensure_ready();
    SystemEntropySource {}.random_u32()
}

/// Returns a value uniformly distributed in `0..upper_bound` from the
/// system CSPRNG, or 0 when `upper_bound < 2`.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the OS source fails.
pub fn uniform(upper_bound: u32) -> Result<u32, EntropyError> {
    bulwark_guard::ensure_ready();
    SystemEntropySource {}.uniform(upper_bound)
}
