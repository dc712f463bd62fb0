// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from bulwark-buffer and bulwark-rand.

/// Failure-injecting page allocator.
#[cfg(feature = "test-utils")]
pub mod buffer {
    pub use bulwark_buffer::test_utils::*;
}

/// Failure-injecting entropy source.
#[cfg(feature = "test-utils")]
pub mod rand {
    pub use bulwark_rand::test_utils::*;
}
