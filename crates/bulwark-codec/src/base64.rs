// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::ct_char::{base64_to_sextet, sextet_to_base64};
use crate::error::CodecError;

const PAD: u8 = b'=';

/// Base64 alphabet and padding policy.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Base64Variant {
    /// Standard alphabet (`+`, `/`), padded with `=`.
    Original,
    /// Standard alphabet, no padding.
    OriginalNoPadding,
    /// URL and filename safe alphabet (`-`, `_`), padded with `=`.
    UrlSafe,
    /// URL and filename safe alphabet, no padding.
    UrlSafeNoPadding,
}

impl Base64Variant {
    /// All four variants.
    pub const ALL: [Base64Variant; 4] = [
        Base64Variant::Original,
        Base64Variant::OriginalNoPadding,
        Base64Variant::UrlSafe,
        Base64Variant::UrlSafeNoPadding,
    ];

    /// True for the `-`/`_` alphabet.
    pub fn is_url_safe(self) -> bool {
        matches!(self, Base64Variant::UrlSafe | Base64Variant::UrlSafeNoPadding)
    }

    /// True if encodings end with `=` up to a multiple of 4 characters.
    pub fn has_padding(self) -> bool {
        matches!(self, Base64Variant::Original | Base64Variant::UrlSafe)
    }
}

/// Length of the Base64 encoding of `bin_len` bytes.
///
/// # Example
///
/// ```
/// use bulwark_codec::{Base64Variant, encoded_len};
///
/// assert_eq!(encoded_len(13, Base64Variant::Original), 20);
/// assert_eq!(encoded_len(13, Base64Variant::UrlSafeNoPadding), 18);
/// ```
pub fn encoded_len(bin_len: usize, variant: Base64Variant) -> usize {
    let full = (bin_len / 3) * 4;

    match bin_len % 3 {
        0 => full,
        _ if variant.has_padding() => full + 4,
        rem => full + rem + 1,
    }
}

/// Upper bound on the decoded length of `encoded_len` Base64 characters.
///
/// Overestimates for padded input or when ignorable characters are present.
pub fn decoded_max_len(encoded_len: usize) -> usize {
    encoded_len / 4 * 3 + (encoded_len % 4) * 3 / 4
}

/// Encodes `bin` as Base64.
///
/// # Example
///
/// ```
/// use bulwark_codec::{Base64Variant, bin_to_base64};
///
/// let bin = [1, 249, 248, 71, 228, 73, 20, 217, 235, 63, 242, 175, 66];
///
/// assert_eq!(bin_to_base64(&bin, Base64Variant::Original), "Afn4R+RJFNnrP/KvQg==");
/// assert_eq!(bin_to_base64(&bin, Base64Variant::UrlSafeNoPadding), "Afn4R-RJFNnrP_KvQg");
/// ```
pub fn bin_to_base64(bin: &[u8], variant: Base64Variant) -> String {
    bulwark_guard::ensure_ready();

    let mut out = vec![0u8; encoded_len(bin.len(), variant)];
    write_base64(bin, &mut out, variant);

    // SAFETY: write_base64 only emits characters of the Base64 alphabet and '='.
    unsafe { String::from_utf8_unchecked(out) }
}

/// Encodes `bin` as Base64 into `out`.
///
/// Returns the encoded prefix of `out` as a string slice.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`] if `out` is shorter than
/// [`encoded_len`].
pub fn bin_to_base64_into<'a>(
    bin: &[u8],
    out: &'a mut [u8],
    variant: Base64Variant,
) -> Result<&'a str, CodecError> {
    bulwark_guard::ensure_ready();

    let needed = encoded_len(bin.len(), variant);

    if out.len() < needed {
        return Err(CodecError::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }

    let out = &mut out[..needed];
    write_base64(bin, out, variant);

    // SAFETY: write_base64 only emits characters of the Base64 alphabet and '='.
    Ok(unsafe { core::str::from_utf8_unchecked(out) })
}

/// `out` must be exactly `encoded_len(bin.len(), variant)` bytes.
fn write_base64(bin: &[u8], out: &mut [u8], variant: Base64Variant) {
    let url_safe = variant.is_url_safe();
    let mut acc = 0u32;
    let mut acc_len = 0u32;
    let mut pos = 0usize;

    for &byte in bin {
        acc = (acc << 8) | byte as u32;
        acc_len += 8;

        while acc_len >= 6 {
            acc_len -= 6;
            out[pos] = sextet_to_base64(((acc >> acc_len) & 0x3F) as u8, url_safe);
            pos += 1;
        }
    }

    if acc_len > 0 {
        out[pos] = sextet_to_base64(((acc << (6 - acc_len)) & 0x3F) as u8, url_safe);
        pos += 1;
    }

    out[pos..].fill(PAD);
}

/// Decodes Base64 `text` into `bin`, returning the number of bytes written.
///
/// Bytes listed in `ignore` are skipped wherever they appear, padding
/// included. Padded variants require exactly the padding the final group
/// calls for; unpadded variants reject `=` unless it is ignorable.
///
/// The whole input is scanned before any error is reported. On failure the
/// bytes already written to `bin` are wiped.
///
/// # Errors
///
/// - [`CodecError::Decode`] on a character outside the variant's alphabet,
///   padding before the final group, missing or excess padding, a dangling
///   single character, or non-zero trailing bits.
/// - [`CodecError::BufferTooSmall`] if the decoded length exceeds
///   `bin.len()`. A malformed input reports `Decode` even when the
///   destination is also too small.
///
/// # Example
///
/// ```
/// use bulwark_codec::{Base64Variant, base64_to_bin};
///
/// let mut bin = [0u8; 16];
/// let len = base64_to_bin("Afn4R-RJFNnrP_KvQg", &mut bin, Base64Variant::UrlSafeNoPadding, b"").unwrap();
///
/// assert_eq!(&bin[..len], &[1, 249, 248, 71, 228, 73, 20, 217, 235, 63, 242, 175, 66]);
/// ```
pub fn base64_to_bin(
    text: &str,
    bin: &mut [u8],
    variant: Base64Variant,
    ignore: &[u8],
) -> Result<usize, CodecError> {
    bulwark_guard::ensure_ready();

    let url_safe = variant.is_url_safe();
    let padded = variant.has_padding();
    let capacity = bin.len();
    let text = text.as_bytes();

    let mut malformed = false;
    let mut acc = 0u32;
    let mut acc_len = 0u32;
    let mut written = 0usize;
    let mut pos = 0usize;

    // Data characters, up to the first '=' of a padded variant.
    while pos < text.len() {
        let c = text[pos];
        let d = base64_to_sextet(c, url_safe);

        if d == 0xFF {
            if padded && c == PAD {
                break;
            }
            malformed |= !ignore.contains(&c);
            pos += 1;
            continue;
        }

        acc = (acc << 6) | d as u32;
        acc_len += 6;

        if acc_len >= 8 {
            acc_len -= 8;
            if written < capacity {
                bin[written] = (acc >> acc_len) as u8;
            }
            written += 1;
        }

        pos += 1;
    }

    // At most 4 leftover bits, all zero.
    if acc_len > 4 || (acc & ((1u32 << acc_len) - 1)) != 0 {
        malformed = true;
    }

    if padded {
        let mut missing = acc_len / 2;

        while pos < text.len() && missing > 0 {
            let c = text[pos];

            if c == PAD {
                missing -= 1;
            } else {
                malformed |= !ignore.contains(&c);
            }

            pos += 1;
        }

        malformed |= missing > 0;
    }

    // Only ignorable characters may follow.
    for &c in &text[pos..] {
        malformed |= !ignore.contains(&c);
    }

    core::hint::black_box(acc);

    if malformed {
        bulwark_ct::zeroize(&mut bin[..written.min(capacity)]);
        return Err(CodecError::Decode);
    }

    if written > capacity {
        bulwark_ct::zeroize(bin);
        return Err(CodecError::BufferTooSmall {
            needed: written,
            capacity,
        });
    }

    Ok(written)
}

/// Decodes Base64 `text` into a freshly allocated vector.
///
/// Same rules as [`base64_to_bin`].
pub fn base64_decode(
    text: &str,
    variant: Base64Variant,
    ignore: &[u8],
) -> Result<Vec<u8>, CodecError> {
    let mut bin = vec![0u8; decoded_max_len(text.len())];
    let len = base64_to_bin(text, &mut bin, variant, ignore)?;
    bin.truncate(len);

    Ok(bin)
}
