// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::ct_char::{hex_to_nibble, nibble_to_hex};
use crate::error::CodecError;

/// Encodes `bin` as lowercase hexadecimal.
///
/// # Example
///
/// ```
/// use bulwark_codec::bin_to_hex;
///
/// assert_eq!(bin_to_hex(&[0x01, 0x23, 0xab, 0xef]), "0123abef");
/// assert_eq!(bin_to_hex(&[]), "");
/// ```
pub fn bin_to_hex(bin: &[u8]) -> String {
    bulwark_guard::ensure_ready();

    let mut out = vec![0u8; bin.len() * 2];
    write_hex(bin, &mut out);

    // SAFETY: write_hex only emits ASCII hex digits.
    unsafe { String::from_utf8_unchecked(out) }
}

/// Encodes `bin` as lowercase hexadecimal into `out`.
///
/// Returns the encoded prefix of `out` as a string slice.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`] if `out` is shorter than
/// `2 * bin.len()`.
pub fn bin_to_hex_into<'a>(bin: &[u8], out: &'a mut [u8]) -> Result<&'a str, CodecError> {
    bulwark_guard::ensure_ready();

    let needed = bin.len() * 2;

    if out.len() < needed {
        return Err(CodecError::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }

    let out = &mut out[..needed];
    write_hex(bin, out);

    // SAFETY: write_hex only emits ASCII hex digits.
    Ok(unsafe { core::str::from_utf8_unchecked(out) })
}

fn write_hex(bin: &[u8], out: &mut [u8]) {
    for (byte, pair) in bin.iter().zip(out.chunks_exact_mut(2)) {
        pair[0] = nibble_to_hex(byte >> 4);
        pair[1] = nibble_to_hex(byte & 0x0F);
    }
}

/// Decodes hexadecimal `text` into `bin`, returning the number of bytes
/// written.
///
/// Upper and lower case digits are accepted. Bytes listed in `ignore` are
/// skipped between whole bytes and consume no output; one appearing between
/// the two digits of a byte is malformed.
///
/// The whole input is scanned before any error is reported. On failure the
/// bytes already written to `bin` are wiped.
///
/// # Errors
///
/// - [`CodecError::Decode`] on a character that is neither a hex digit nor
///   ignorable, on an ignorable character inside a byte, or on an odd
///   number of digits.
/// - [`CodecError::BufferTooSmall`] if the decoded length exceeds
///   `bin.len()`. A malformed input reports `Decode` even when the
///   destination is also too small.
///
/// # Example
///
/// ```
/// use bulwark_codec::hex_to_bin;
///
/// let mut bin = [0u8; 8];
/// let len = hex_to_bin("01:23:45:67:89:AB:CD:EF", &mut bin, b":").unwrap();
///
/// assert_eq!(&bin[..len], &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
/// ```
pub fn hex_to_bin(text: &str, bin: &mut [u8], ignore: &[u8]) -> Result<usize, CodecError> {
    bulwark_guard::ensure_ready();

    let capacity = bin.len();
    let mut malformed = false;
    let mut high = 0u8;
    let mut half = false;
    let mut written = 0usize;

    for &c in text.as_bytes() {
        let (value, valid) = hex_to_nibble(c);

        if valid == 0 {
            // Separators are only allowed between whole bytes.
            malformed |= half | !ignore.contains(&c);
            continue;
        }

        if half {
            if written < capacity {
                bin[written] = high | value;
            }
            written += 1;
        } else {
            high = value << 4;
        }

        half = !half;
    }

    if malformed || half {
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

/// Decodes hexadecimal `text` into a freshly allocated vector.
///
/// Same rules as [`hex_to_bin`].
pub fn hex_decode(text: &str, ignore: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut bin = vec![0u8; text.len() / 2];
    let len = hex_to_bin(text, &mut bin, ignore)?;
    bin.truncate(len);

    Ok(bin)
}
