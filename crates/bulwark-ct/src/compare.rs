// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;

use crate::error::{CtError, ensure_same_len};

/// Compares two equal-length fixed-width integers in constant time.
///
/// Both slices are little-endian: the last byte is the most significant.
/// The scan runs once from the most significant byte down to byte 0 and
/// records the sign of the most significant differing byte using only
/// arithmetic masks, so the loop shape never depends on the data.
///
/// # Errors
///
/// Returns [`CtError::LengthMismatch`] if the operands differ in length.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use bulwark_ct::compare;
///
/// assert_eq!(compare(&[1, 2, 3, 4], &[4, 3, 2, 1]), Ok(Ordering::Greater));
/// assert_eq!(compare(&[4, 3, 2, 1], &[1, 2, 3, 4]), Ok(Ordering::Less));
/// assert_eq!(compare(&[7, 7], &[7, 7]), Ok(Ordering::Equal));
/// ```
#[inline(never)]
pub fn compare(a: &[u8], b: &[u8]) -> Result<Ordering, CtError> {
    bulwark_guard::ensure_ready();
    ensure_same_len(a.len(), b.len())?;

    // gt: a > b at the most significant differing byte seen so far.
    // eq: every byte seen so far matched.
    let mut gt = 0u16;
    let mut eq = 1u16;

    for i in (0..a.len()).rev() {
        let x = a[i] as u16;
        let y = b[i] as u16;

        // y - x underflows (high byte set) exactly when x > y.
        gt |= (y.wrapping_sub(x) >> 8) & eq;
        // (x ^ y) - 1 underflows exactly when x == y.
        eq &= ((x ^ y).wrapping_sub(1) >> 8) & 1;
    }

    let gt = core::hint::black_box(gt & 1);
    let eq = core::hint::black_box(eq);

    // gt + gt + eq - 1 is 1, 0 or -1.
    Ok(((gt + gt + eq) as i8 - 1).cmp(&0))
}
