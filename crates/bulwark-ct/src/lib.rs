// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constant-time operations over byte slices.
//!
//! Two families of primitives whose running time depends only on operand
//! lengths, never on their contents:
//!
//! - **Comparison**: [`equals`], [`compare`], [`is_zero`]. Used for
//!   authentication-tag verification and nonce ordering.
//! - **Fixed-width counters**: [`increment`], [`increment_by`], [`add`],
//!   [`sub`]. A slice of N bytes is an unsigned integer with byte 0 as the
//!   least significant byte. Carries and borrows are computed
//!   arithmetically across all N bytes and wrap silently on overflow.
//!
//! [`zeroize`] is the non-elidable wipe used by the rest of the workspace.
//!
//! # Example
//!
//! ```rust
//! use core::cmp::Ordering;
//! use bulwark_ct::{compare, equals, increment};
//!
//! let mut nonce = [0xFFu8, 0x00, 0x00, 0x00];
//! increment(&mut nonce);
//! assert_eq!(nonce, [0x00, 0x01, 0x00, 0x00]);
//!
//! assert!(equals(&nonce, &[0x00, 0x01, 0x00, 0x00]));
//! assert_eq!(compare(&nonce, &[0xFF, 0x00, 0x00, 0x00]), Ok(Ordering::Greater));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compare;
mod counter;
mod eq;
mod error;
mod zero;

pub use compare::compare;
pub use counter::{add, increment, increment_by, sub};
pub use eq::{equals, is_zero};
pub use error::CtError;
pub use zero::{is_zeroized, zeroize};
