// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-ct.
use thiserror::Error;

/// Errors from constant-time operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CtError {
    /// Operands that must share a width have different lengths.
    #[error("operand lengths differ: {left} != {right}")]
    LengthMismatch {
        /// Length of the first operand.
        left: usize,
        /// Length of the second operand.
        right: usize,
    },

    /// A scalar has non-zero bytes beyond the width of the target counter.
    #[error("scalar does not fit in a {width}-byte counter")]
    ScalarTooWide {
        /// Width of the target counter in bytes.
        width: usize,
    },
}

#[inline(always)]
pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<(), CtError> {
    if left != right {
        return Err(CtError::LengthMismatch { left, right });
    }

    Ok(())
}
