// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{Ordering, compiler_fence};

/// Overwrites every byte of `buf` with zero.
///
/// Uses `write_bytes` (memset) followed by a volatile read and a compiler
/// fence so the store cannot be removed as dead, even when `buf` is about
/// to be released.
///
/// # Example
///
/// ```
/// use bulwark_ct::{is_zeroized, zeroize};
///
/// let mut key = [0xA5u8; 32];
/// zeroize(&mut key);
/// assert!(is_zeroized(&key));
/// ```
#[inline(never)]
pub fn zeroize(buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }

    unsafe {
        core::ptr::write_bytes(buf.as_mut_ptr(), 0, buf.len());
        // Volatile read prevents the optimizer from removing the write_bytes
        core::ptr::read_volatile(buf.as_ptr());
    }

    compiler_fence(Ordering::SeqCst);
}

/// Verifies that a slice is zeroized.
///
/// Intended for assertions and tests; unlike [`is_zero`](crate::is_zero)
/// it stops at the first non-zero byte.
#[inline(always)]
pub fn is_zeroized(buf: &[u8]) -> bool {
    buf.iter().all(|&b| b == 0)
}
