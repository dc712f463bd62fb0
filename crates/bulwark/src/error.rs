// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use bulwark_buffer::BufferError;
use bulwark_codec::CodecError;
use bulwark_ct::CtError;
use bulwark_pad::PadError;
use bulwark_rand::EntropyError;

/// Any error raised by a bulwark component.
#[derive(Debug, Error)]
pub enum Error {
    /// Constant-time comparison or counter arithmetic failed.
    #[error("constant-time operation failed: {0}")]
    Ct(#[from] CtError),

    /// Hex or Base64 encoding or decoding failed.
    #[error("codec failed: {0}")]
    Codec(#[from] CodecError),

    /// Padding or unpadding failed.
    #[error("padding failed: {0}")]
    Pad(#[from] PadError),

    /// A secure buffer operation failed.
    #[error("secure buffer failed: {0}")]
    Buffer(#[from] BufferError),

    /// The random source failed.
    #[error("entropy failed: {0}")]
    Entropy(#[from] EntropyError),
}
