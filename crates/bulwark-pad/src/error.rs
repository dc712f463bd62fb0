// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-pad.
use thiserror::Error;

/// Errors from padding and unpadding.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum PadError {
    /// Block size is zero, or the padded length would overflow `usize`.
    #[error("invalid block size")]
    InvalidBlockSize,

    /// Payload length claims more bytes than the buffer holds.
    #[error("unpadded length {unpadded_len} exceeds buffer length {buffer_len}")]
    UnpaddedLenOutOfRange {
        /// Claimed payload length.
        unpadded_len: usize,
        /// Length of the buffer.
        buffer_len: usize,
    },

    /// Buffer cannot hold the padded message.
    #[error("buffer too short for padding: need {needed} bytes, have {capacity}")]
    BufferTooShort {
        /// Padded length.
        needed: usize,
        /// Buffer length.
        capacity: usize,
    },

    /// Trailing bytes are not a `0x80` marker followed by zeros within the
    /// last block, or the buffer is not a whole number of blocks.
    #[error("invalid padding")]
    InvalidPadding,
}
