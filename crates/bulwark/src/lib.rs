// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Building blocks for code that handles keys, nonces and plaintext.
//!
//! This crate re-exports the bulwark components under short module names
//! and adds a single [`Error`] type that every component error converts
//! into, so application code can use `?` across all of them.
//!
//! | Module     | Contents |
//! |------------|----------|
//! | [`guard`]  | One-time process initialization (`ensure_ready`) |
//! | [`ct`]     | Constant-time `equals`, `compare`, `is_zero` and little-endian counters |
//! | [`codec`]  | Constant-time hex and Base64 (four variants) |
//! | [`pad`]    | ISO/IEC 7816-4 block padding |
//! | [`buffer`] | Guard-paged, lockable, read-only-capable `SecureBuffer` |
//! | [`rand`]   | System CSPRNG and seeded deterministic fill |
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! bulwark = { version = "0.1.0-rc.1", features = ["full"] }
//! ```
//!
//! The `hardening` feature (included in `full`) makes initialization also
//! disable core dumps and ptrace attach on Linux.
//!
//! # Quick Start
//!
//! ```rust
//! use bulwark::buffer::SecureBuffer;
//! use bulwark::codec::{Base64Variant, bin_to_base64};
//! use bulwark::{ct, pad, rand};
//!
//! fn main() -> Result<(), bulwark::Error> {
//!     bulwark::guard::ensure_ready();
//!
//!     // Key material lives in its own guarded mapping.
//!     let mut key = SecureBuffer::allocate(32)?;
//!     rand::fill(key.expose_mut()?)?;
//!     key.protect_read_only()?;
//!
//!     // Per-message nonce: random once, then incremented.
//!     let mut nonce = [0u8; 24];
//!     rand::fill(&mut nonce)?;
//!     ct::increment(&mut nonce);
//!     let _wire_nonce = bin_to_base64(&nonce, Base64Variant::UrlSafeNoPadding);
//!
//!     // Hide the message length behind a 16-byte boundary.
//!     let mut message = [0u8; 32];
//!     message[..5].copy_from_slice(b"hello");
//!     let padded = pad::pad(&mut message, 5, 16)?;
//!     assert_eq!(padded, 16);
//!     assert_eq!(pad::unpad(&message[..padded], 16)?, 5);
//!
//!     // Tag verification never short-circuits.
//!     assert!(ct::equals(&[1, 2, 3], &[1, 2, 3]));
//!
//!     key.free()?;
//!     Ok(())
//! }
//! ```
//!
//! # Platform support
//!
//! | Platform | Buffers |
//! |----------|---------|
//! | Linux | Guard pages, `mlock`, `mprotect`, excluded from core dumps |
//! | Other Unix | Guard pages, `mlock`, `mprotect` |
//! | Elsewhere | Heap memory, read-only enforced by the API, locking unsupported |
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;

pub mod support;

pub use bulwark_buffer as buffer;
pub use bulwark_codec as codec;
pub use bulwark_ct as ct;
pub use bulwark_guard as guard;
pub use bulwark_pad as pad;
pub use bulwark_rand as rand;

pub use error::Error;

/// Version of this crate, from the package metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major component of [`VERSION`].
pub fn version_major() -> u32 {
    parse_component(env!("CARGO_PKG_VERSION_MAJOR"))
}

/// Minor component of [`VERSION`].
pub fn version_minor() -> u32 {
    parse_component(env!("CARGO_PKG_VERSION_MINOR"))
}

const fn parse_component(digits: &str) -> u32 {
    let bytes = digits.as_bytes();
    let mut value = 0u32;
    let mut i = 0;

    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }

    value
}
