// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-codec.
use thiserror::Error;

/// Errors from encoding and decoding.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CodecError {
    /// Input contains a character outside the alphabet that is not ignorable,
    /// an odd number of hex digits, or malformed Base64 padding.
    #[error("malformed encoded input")]
    Decode,

    /// Destination cannot hold the result.
    #[error("destination too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes available in the destination.
        capacity: usize,
    },
}
