// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constant-time hexadecimal and Base64 codecs.
//!
//! Encoders translate every 4- or 6-bit group through branchless mask
//! arithmetic instead of table lookups, so no memory access depends on the
//! value being encoded. Decoders scan the whole input before reporting an
//! error and wipe whatever they already wrote to the destination.
//!
//! Base64 comes in four variants ([`Base64Variant`]) sharing one framing
//! routine and differing only in alphabet and padding policy.
//!
//! Decoders accept a set of ignorable bytes (e.g. `b":"` or `b" \n"`) that
//! may appear anywhere in the input.
//!
//! # Example
//!
//! ```rust
//! use bulwark_codec::{Base64Variant, base64_decode, bin_to_base64, bin_to_hex, hex_decode};
//!
//! let key = [0xde, 0xad, 0xbe, 0xef];
//!
//! let hex = bin_to_hex(&key);
//! assert_eq!(hex, "deadbeef");
//! assert_eq!(hex_decode("DE AD BE EF", b" ").unwrap(), key);
//!
//! let b64 = bin_to_base64(&key, Base64Variant::UrlSafe);
//! assert_eq!(b64, "3q2-7w==");
//! assert_eq!(base64_decode(&b64, Base64Variant::UrlSafe, b"").unwrap(), key);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod base64;
mod ct_char;
mod error;
mod hex;

pub use base64::{
    Base64Variant, base64_decode, base64_to_bin, bin_to_base64, bin_to_base64_into,
    decoded_max_len, encoded_len,
};
pub use error::CodecError;
pub use hex::{bin_to_hex, bin_to_hex_into, hex_decode, hex_to_bin};
