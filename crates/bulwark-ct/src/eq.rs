// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Returns `false` immediately when lengths differ (length is not secret).
/// Otherwise every byte pair is XORed into an accumulator, with no early
/// exit on mismatch, so the comparison time does not reveal where the
/// first difference occurs.
///
/// This is the comparison to use for authentication-tag verification.
///
/// # Example
///
/// ```
/// use bulwark_ct::equals;
///
/// assert!(equals(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!equals(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// assert!(!equals(&[1, 2, 3, 4], &[1, 2, 3]));
/// ```
#[inline(never)]
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    bulwark_guard::ensure_ready();

    if a.len() != b.len() {
        return false;
    }

    let mut acc = 0u8;

    for i in 0..a.len() {
        // Volatile reads keep the loop from being turned into memcmp.
        let (x, y) = unsafe {
            (
                core::ptr::read_volatile(a.as_ptr().add(i)),
                core::ptr::read_volatile(b.as_ptr().add(i)),
            )
        };
        acc |= x ^ y;
    }

    acc.ct_eq(&0u8).into()
}

/// Returns true if every byte of `b` is zero, in constant time.
///
/// All bytes are ORed together before the single final test; the scan
/// always covers the full length. An empty slice is zero.
///
/// # Example
///
/// ```
/// use bulwark_ct::is_zero;
///
/// assert!(is_zero(&[0, 0, 0, 0]));
/// assert!(!is_zero(&[1, 0, 0, 0]));
/// ```
#[inline(never)]
pub fn is_zero(b: &[u8]) -> bool {
    bulwark_guard::ensure_ready();

    let mut acc = 0u8;

    for i in 0..b.len() {
        acc |= unsafe { core::ptr::read_volatile(b.as_ptr().add(i)) };
    }

    acc.ct_eq(&0u8).into()
}
