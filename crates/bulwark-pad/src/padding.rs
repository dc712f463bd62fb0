// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::MARKER;
use crate::error::PadError;

/// Length `pad` produces for `unpadded_len` payload bytes: the smallest
/// multiple of `block_size` strictly greater than `unpadded_len`.
///
/// # Errors
///
/// Returns [`PadError::InvalidBlockSize`] if `block_size` is zero or the
/// result would overflow.
///
/// # Example
///
/// ```
/// use bulwark_pad::padded_len;
///
/// assert_eq!(padded_len(7, 8), Ok(8));
/// assert_eq!(padded_len(8, 8), Ok(16));
/// assert_eq!(padded_len(0, 16), Ok(16));
/// ```
pub fn padded_len(unpadded_len: usize, block_size: usize) -> Result<usize, PadError> {
    if block_size == 0 {
        return Err(PadError::InvalidBlockSize);
    }

    (unpadded_len / block_size)
        .checked_add(1)
        .and_then(|blocks| blocks.checked_mul(block_size))
        .ok_or(PadError::InvalidBlockSize)
}

/// Pads the first `unpadded_len` bytes of `buf` in place to the next
/// multiple of `block_size`, returning the padded length.
///
/// Writes `0x80` at `unpadded_len` followed by zeros. A payload that is
/// already block-aligned still gains a full block. The last `block_size`
/// bytes are all rewritten through masks, so the position of the marker is
/// not revealed by the store pattern.
///
/// # Errors
///
/// - [`PadError::InvalidBlockSize`] if `block_size` is zero.
/// - [`PadError::UnpaddedLenOutOfRange`] if `unpadded_len > buf.len()`.
/// - [`PadError::BufferTooShort`] if `buf` cannot hold the padded length.
///
/// # Example
///
/// ```
/// use bulwark_pad::pad;
///
/// let mut buf = [1, 2, 3, 4, 5, 6, 7, 8, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA];
/// let len = pad(&mut buf, 8, 8).unwrap();
///
/// assert_eq!(len, 16);
/// assert_eq!(&buf[8..], &[0x80, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn pad(buf: &mut [u8], unpadded_len: usize, block_size: usize) -> Result<usize, PadError> {
    bulwark_guard::ensure_ready();

    if block_size == 0 {
        return Err(PadError::InvalidBlockSize);
    }

    if unpadded_len > buf.len() {
        return Err(PadError::UnpaddedLenOutOfRange {
            unpadded_len,
            buffer_len: buf.len(),
        });
    }

    let needed = padded_len(unpadded_len, block_size)?;

    if needed > buf.len() {
        return Err(PadError::BufferTooShort {
            needed,
            capacity: buf.len(),
        });
    }

    // Zero bytes between the marker and the end of the block.
    let zeros = block_size - 1 - unpadded_len % block_size;
    let last = needed - 1;
    let mut keep = 0u8;

    for i in 0..block_size {
        let idx = last - i;
        // 0xFF exactly when i == zeros, i.e. idx == unpadded_len.
        let barrier = ((i ^ zeros).wrapping_sub(1) >> (usize::BITS - 8)) as u8;

        buf[idx] = (buf[idx] & keep) | (MARKER & barrier);
        keep |= barrier;
    }

    Ok(needed)
}

/// Returns the payload length of a padded `buf`.
///
/// Scans the last `block_size` bytes backwards for the `0x80` marker,
/// accepting only zeros after it. Every byte of the final block is visited
/// whatever its value.
///
/// # Errors
///
/// - [`PadError::InvalidBlockSize`] if `block_size` is zero.
/// - [`PadError::InvalidPadding`] if `buf` is not a non-empty whole number
///   of blocks, no marker is found in the final block, or a non-zero byte
///   follows it.
///
/// # Example
///
/// ```
/// use bulwark_pad::{PadError, unpad};
///
/// assert_eq!(unpad(&[1, 2, 3, 0x80, 0, 0, 0, 0], 8), Ok(3));
/// assert_eq!(unpad(&[1, 2, 3, 0, 0, 0, 0, 0], 8), Err(PadError::InvalidPadding));
/// ```
pub fn unpad(buf: &[u8], block_size: usize) -> Result<usize, PadError> {
    bulwark_guard::ensure_ready();

    if block_size == 0 {
        return Err(PadError::InvalidBlockSize);
    }

    let len = buf.len();

    if len < block_size || len % block_size != 0 {
        return Err(PadError::InvalidPadding);
    }

    let mut acc = 0usize;
    let mut zeros = 0usize;
    let mut valid = 0usize;

    for i in 0..block_size {
        let c = buf[len - 1 - i] as usize;
        // 1 exactly when everything after c is zero, no marker has been
        // recorded yet, and c is the marker.
        let is_barrier =
            ((acc.wrapping_sub(1) & zeros.wrapping_sub(1) & (c ^ MARKER as usize).wrapping_sub(1))
                >> 8)
                & 1;

        acc |= c;
        zeros |= i & 0usize.wrapping_sub(is_barrier);
        valid |= is_barrier;
    }

    if core::hint::black_box(valid) == 0 {
        return Err(PadError::InvalidPadding);
    }

    Ok(len - 1 - zeros)
}
