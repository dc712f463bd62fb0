// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Branchless character classification.
//!
//! Every function here maps a byte to a byte with masks only, so the cost
//! of translating a secret value never depends on which value it is.

/// 0xFF if `x == y`, else 0.
#[inline(always)]
fn eq(x: u32, y: u32) -> u32 {
    ((0u32.wrapping_sub(x ^ y) >> 8) & 0xFF) ^ 0xFF
}

/// 0xFF if `x > y`, else 0.
#[inline(always)]
fn gt(x: u32, y: u32) -> u32 {
    (y.wrapping_sub(x) >> 8) & 0xFF
}

#[inline(always)]
fn ge(x: u32, y: u32) -> u32 {
    gt(y, x) ^ 0xFF
}

#[inline(always)]
fn lt(x: u32, y: u32) -> u32 {
    gt(y, x)
}

#[inline(always)]
fn le(x: u32, y: u32) -> u32 {
    ge(y, x)
}

/// Lowercase hex digit for a nibble in `0..16`.
#[inline(always)]
pub(crate) fn nibble_to_hex(n: u8) -> u8 {
    let n = n as u32;
    // For n < 10 the mask term shifts the base from 'a' - 10 down to '0'.
    (87u32
        .wrapping_add(n)
        .wrapping_add((n.wrapping_sub(10) >> 8) & !38u32)) as u8
}

/// Decodes one hex digit (either case).
///
/// Returns `(value, valid)` where `valid` is 0xFF for a digit and 0 for
/// anything else.
#[inline(always)]
pub(crate) fn hex_to_nibble(c: u8) -> (u8, u8) {
    let c = c as u32;

    let num = (c ^ 48) & 0xFF;
    let num0 = (num.wrapping_sub(10) >> 8) & 0xFF;

    let alpha = (c & !32u32).wrapping_sub(55) & 0xFF;
    let alpha0 = ((alpha.wrapping_sub(10) ^ alpha.wrapping_sub(16)) >> 8) & 0xFF;

    let value = (num0 & num) | (alpha0 & alpha);

    (value as u8, (num0 | alpha0) as u8)
}

/// Base64 character for a sextet in `0..64`.
#[inline(always)]
pub(crate) fn sextet_to_base64(x: u8, url_safe: bool) -> u8 {
    let x = x as u32;
    let (c62, c63) = if url_safe { (b'-', b'_') } else { (b'+', b'/') };

    ((lt(x, 26) & x.wrapping_add(b'A' as u32))
        | (ge(x, 26) & lt(x, 52) & x.wrapping_add(b'a' as u32 - 26))
        | (ge(x, 52) & lt(x, 62) & x.wrapping_sub(52 - b'0' as u32))
        | (eq(x, 62) & c62 as u32)
        | (eq(x, 63) & c63 as u32)) as u8
}

/// Decodes one Base64 character.
///
/// Returns the sextet value, or 0xFF for a character outside the alphabet
/// (padding included).
#[inline(always)]
pub(crate) fn base64_to_sextet(c: u8, url_safe: bool) -> u8 {
    let c = c as u32;
    let (c62, c63) = if url_safe { (b'-', b'_') } else { (b'+', b'/') };

    let x = (ge(c, b'A' as u32) & le(c, b'Z' as u32) & c.wrapping_sub(b'A' as u32))
        | (ge(c, b'a' as u32) & le(c, b'z' as u32) & c.wrapping_sub(b'a' as u32 - 26))
        | (ge(c, b'0' as u32) & le(c, b'9' as u32) & c.wrapping_add(52 - b'0' as u32))
        | (eq(c, c62 as u32) & 62)
        | (eq(c, c63 as u32) & 63);

    // 'A' legitimately decodes to 0; any other zero means "not found".
    (x | (eq(x, 0) & (eq(c, b'A' as u32) ^ 0xFF))) as u8
}
