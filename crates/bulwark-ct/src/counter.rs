// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width little-endian counter arithmetic.
//!
//! Every operation visits each byte position exactly once, carrying in a
//! 16-bit accumulator. No branch depends on a byte value.

use crate::error::{CtError, ensure_same_len};

/// Adds 1 to the counter in `n`, wrapping to zero on overflow.
///
/// # Example
///
/// ```
/// use bulwark_ct::increment;
///
/// let mut n = [0xFFu8; 8];
/// increment(&mut n);
/// assert_eq!(n, [0u8; 8]);
/// ```
#[inline(never)]
pub fn increment(n: &mut [u8]) {
    bulwark_guard::ensure_ready();

    let mut carry = 1u16;

    for byte in n.iter_mut() {
        carry += *byte as u16;
        *byte = carry as u8;
        carry >>= 8;
    }

    core::hint::black_box(carry);
}

/// Adds `scalar` to the counter in `n`, wrapping on overflow.
///
/// The scalar is taken as a little-endian integer zero-extended to the
/// width of `n`. Counters narrower than 8 bytes accept any scalar that fits
/// in their width.
///
/// # Errors
///
/// Returns [`CtError::ScalarTooWide`] if `scalar` has non-zero bytes beyond
/// `n.len()`; the counter is left untouched.
///
/// # Example
///
/// ```
/// use bulwark_ct::increment_by;
///
/// let mut n = [0u8; 8];
/// increment_by(&mut n, i64::MAX as u64).unwrap();
/// assert_eq!(n, [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]);
///
/// let mut narrow = [0u8; 2];
/// assert!(increment_by(&mut narrow, 0x1_0000).is_err());
/// ```
#[inline(never)]
pub fn increment_by(n: &mut [u8], scalar: u64) -> Result<(), CtError> {
    bulwark_guard::ensure_ready();

    let width = n.len();

    if width < 8 && (scalar >> (8 * width)) != 0 {
        return Err(CtError::ScalarTooWide { width });
    }

    let mut carry = 0u16;

    for (i, byte) in n.iter_mut().enumerate() {
        // Index is public; only the scalar's bytes are mixed in.
        let addend = if i < 8 { (scalar >> (8 * i)) as u8 } else { 0 };

        carry += *byte as u16 + addend as u16;
        *byte = carry as u8;
        carry >>= 8;
    }

    core::hint::black_box(carry);

    Ok(())
}

/// Adds `b` into `a` in place, wrapping on overflow.
///
/// # Errors
///
/// Returns [`CtError::LengthMismatch`] if `a` and `b` differ in length.
///
/// # Example
///
/// ```
/// use bulwark_ct::add;
///
/// let mut a = [0xFF, 0xFF, 0, 0];
/// add(&mut a, &[1, 0, 0, 0]).unwrap();
/// assert_eq!(a, [0, 0, 1, 0]);
/// ```
#[inline(never)]
pub fn add(a: &mut [u8], b: &[u8]) -> Result<(), CtError> {
    bulwark_guard::ensure_ready();
    ensure_same_len(a.len(), b.len())?;

    let mut carry = 0u16;

    for (x, y) in a.iter_mut().zip(b.iter()) {
        carry += *x as u16 + *y as u16;
        *x = carry as u8;
        carry >>= 8;
    }

    core::hint::black_box(carry);

    Ok(())
}

/// Subtracts `b` from `a` in place, wrapping on underflow.
///
/// # Errors
///
/// Returns [`CtError::LengthMismatch`] if `a` and `b` differ in length.
///
/// # Example
///
/// ```
/// use bulwark_ct::sub;
///
/// let mut a = [0u8; 4];
/// sub(&mut a, &[1, 0, 0, 0]).unwrap();
/// assert_eq!(a, [0xFF; 4]);
/// ```
#[inline(never)]
pub fn sub(a: &mut [u8], b: &[u8]) -> Result<(), CtError> {
    bulwark_guard::ensure_ready();
    ensure_same_len(a.len(), b.len())?;

    let mut borrow = 0u16;

    for (x, y) in a.iter_mut().zip(b.iter()) {
        let diff = (*x as u16).wrapping_sub(*y as u16).wrapping_sub(borrow);
        *x = diff as u8;
        borrow = (diff >> 8) & 1;
    }

    core::hint::black_box(borrow);

    Ok(())
}
