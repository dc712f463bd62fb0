// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ISO/IEC 7816-4 block padding.
//!
//! A padded message is the payload, one `0x80` marker byte, then zero
//! bytes up to the next multiple of the block size. Padding always adds at
//! least one byte, so an aligned payload gains a whole block.
//!
//! Both directions work in place on caller buffers and never allocate.
//!
//! # Example
//!
//! ```rust
//! use bulwark_pad::{pad, padded_len, unpad};
//!
//! let msg = b"hello";
//! let mut buf = [0u8; 16];
//! buf[..msg.len()].copy_from_slice(msg);
//!
//! let len = pad(&mut buf, msg.len(), 8).unwrap();
//! assert_eq!(len, padded_len(msg.len(), 8).unwrap());
//! assert_eq!(&buf[..len], b"hello\x80\x00\x00");
//!
//! assert_eq!(unpad(&buf[..len], 8), Ok(msg.len()));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod padding;

pub use error::PadError;
pub use padding::{pad, padded_len, unpad};

/// Byte that terminates the payload inside a padded block.
pub const MARKER: u8 = 0x80;
