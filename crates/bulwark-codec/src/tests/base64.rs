// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{
    Base64Variant, CodecError, base64_decode, base64_to_bin, bin_to_base64, bin_to_base64_into,
    decoded_max_len, encoded_len,
};

const VECTOR: [u8; 13] = [1, 249, 248, 71, 228, 73, 20, 217, 235, 63, 242, 175, 66];

// =============================================================================
// Base64Variant
// =============================================================================

#[test]
fn test_variant_flags() {
    assert!(!Base64Variant::Original.is_url_safe());
    assert!(Base64Variant::Original.has_padding());
    assert!(!Base64Variant::OriginalNoPadding.has_padding());
    assert!(Base64Variant::UrlSafe.is_url_safe());
    assert!(Base64Variant::UrlSafe.has_padding());
    assert!(Base64Variant::UrlSafeNoPadding.is_url_safe());
    assert!(!Base64Variant::UrlSafeNoPadding.has_padding());
}

// =============================================================================
// encoded_len() / decoded_max_len()
// =============================================================================

#[test]
fn test_encoded_len_padded() {
    let expected = [0, 4, 4, 4, 8, 8, 8, 12];

    for (n, &len) in expected.iter().enumerate() {
        assert_eq!(encoded_len(n, Base64Variant::Original), len);
        assert_eq!(encoded_len(n, Base64Variant::UrlSafe), len);
    }
}

#[test]
fn test_encoded_len_unpadded() {
    let expected = [0, 2, 3, 4, 6, 7, 8, 10];

    for (n, &len) in expected.iter().enumerate() {
        assert_eq!(encoded_len(n, Base64Variant::OriginalNoPadding), len);
        assert_eq!(encoded_len(n, Base64Variant::UrlSafeNoPadding), len);
    }
}

#[test]
fn test_decoded_max_len() {
    assert_eq!(decoded_max_len(0), 0);
    assert_eq!(decoded_max_len(4), 3);
    assert_eq!(decoded_max_len(18), 13);
    assert_eq!(decoded_max_len(20), 15);
}

#[test]
fn test_decoded_max_len_bounds_every_encoding() {
    for n in 0..64 {
        for variant in Base64Variant::ALL {
            assert!(decoded_max_len(encoded_len(n, variant)) >= n);
        }
    }
}

// =============================================================================
// bin_to_base64()
// =============================================================================

#[test]
fn test_bin_to_base64_known_vector_all_variants() {
    assert_eq!(bin_to_base64(&VECTOR, Base64Variant::Original), "Afn4R+RJFNnrP/KvQg==");
    assert_eq!(bin_to_base64(&VECTOR, Base64Variant::OriginalNoPadding), "Afn4R+RJFNnrP/KvQg");
    assert_eq!(bin_to_base64(&VECTOR, Base64Variant::UrlSafe), "Afn4R-RJFNnrP_KvQg==");
    assert_eq!(bin_to_base64(&VECTOR, Base64Variant::UrlSafeNoPadding), "Afn4R-RJFNnrP_KvQg");
}

#[test]
fn test_bin_to_base64_rfc4648_vectors() {
    let cases: [(&[u8], &str); 7] = [
        (b"", ""),
        (b"f", "Zg=="),
        (b"fo", "Zm8="),
        (b"foo", "Zm9v"),
        (b"foob", "Zm9vYg=="),
        (b"fooba", "Zm9vYmE="),
        (b"foobar", "Zm9vYmFy"),
    ];

    for (bin, text) in cases {
        assert_eq!(bin_to_base64(bin, Base64Variant::Original), text);
        assert_eq!(
            bin_to_base64(bin, Base64Variant::OriginalNoPadding),
            text.trim_end_matches('=')
        );
    }
}

#[test]
fn test_bin_to_base64_into_buffer_too_small() {
    let mut out = [0u8; 19];
    let result = bin_to_base64_into(&VECTOR, &mut out, Base64Variant::Original);

    assert_eq!(
        result,
        Err(CodecError::BufferTooSmall {
            needed: 20,
            capacity: 19
        })
    );
}

#[test]
fn test_bin_to_base64_into_exact_capacity() {
    let mut out = [0u8; 18];
    let text = bin_to_base64_into(&VECTOR, &mut out, Base64Variant::UrlSafeNoPadding)
        .expect("Failed to bin_to_base64_into(..)");

    assert_eq!(text, "Afn4R-RJFNnrP_KvQg");
}

// =============================================================================
// base64_to_bin()
// =============================================================================

#[test]
fn test_base64_to_bin_known_vector() {
    let mut bin = [0u8; 13];

    let len = base64_to_bin("Afn4R+RJFNnrP/KvQg==", &mut bin, Base64Variant::Original, b"")
        .expect("Failed to base64_to_bin(..)");
    assert_eq!(len, 13);
    assert_eq!(bin, VECTOR);

    let mut bin = [0u8; 13];
    let len = base64_to_bin("Afn4R-RJFNnrP_KvQg", &mut bin, Base64Variant::UrlSafeNoPadding, b"")
        .expect("Failed to base64_to_bin(..)");
    assert_eq!(len, 13);
    assert_eq!(bin, VECTOR);
}

#[test]
fn test_base64_to_bin_wrong_alphabet() {
    let mut bin = [0u8; 16];

    assert_eq!(
        base64_to_bin("Afn4R-RJFNnrP_KvQg==", &mut bin, Base64Variant::Original, b""),
        Err(CodecError::Decode)
    );
    assert_eq!(
        base64_to_bin("Afn4R+RJFNnrP/KvQg", &mut bin, Base64Variant::UrlSafeNoPadding, b""),
        Err(CodecError::Decode)
    );
}

#[test]
fn test_base64_to_bin_missing_padding() {
    let mut bin = [0u8; 16];

    assert_eq!(
        base64_to_bin("Afn4R+RJFNnrP/KvQg", &mut bin, Base64Variant::Original, b""),
        Err(CodecError::Decode)
    );
    assert_eq!(
        base64_to_bin("Afn4R+RJFNnrP/KvQg=", &mut bin, Base64Variant::Original, b""),
        Err(CodecError::Decode)
    );
}

#[test]
fn test_base64_to_bin_excess_padding() {
    let mut bin = [0u8; 16];

    assert_eq!(
        base64_to_bin("Zm8==", &mut bin, Base64Variant::Original, b""),
        Err(CodecError::Decode)
    );
    assert_eq!(
        base64_to_bin("Zm9v=", &mut bin, Base64Variant::Original, b""),
        Err(CodecError::Decode)
    );
}

#[test]
fn test_base64_to_bin_padding_before_final_group() {
    let mut bin = [0u8; 16];
    let result = base64_to_bin("Zg==Zm9v", &mut bin, Base64Variant::Original, b"");

    assert_eq!(result, Err(CodecError::Decode));
}

#[test]
fn test_base64_to_bin_padding_rejected_by_unpadded_variant() {
    let mut bin = [0u8; 16];
    let result = base64_to_bin("Zg==", &mut bin, Base64Variant::OriginalNoPadding, b"");

    assert_eq!(result, Err(CodecError::Decode));
}

#[test]
fn test_base64_to_bin_dangling_character() {
    let mut bin = [0u8; 16];
    let result = base64_to_bin("Zm9vY", &mut bin, Base64Variant::OriginalNoPadding, b"");

    assert_eq!(result, Err(CodecError::Decode));
}

#[test]
fn test_base64_to_bin_non_canonical_trailing_bits() {
    let mut bin = [0u8; 16];

    // "Zh" carries the low bits 0b0001 that "Zg" leaves at zero.
    let result = base64_to_bin("Zh", &mut bin, Base64Variant::OriginalNoPadding, b"");

    assert_eq!(result, Err(CodecError::Decode));
}

#[test]
fn test_base64_to_bin_ignored_characters_anywhere() {
    let mut bin = [0u8; 16];
    let len = base64_to_bin("Zm9v\nYg =\n=", &mut bin, Base64Variant::Original, b" \n")
        .expect("Failed to base64_to_bin(..)");

    assert_eq!(&bin[..len], b"foob");
}

#[test]
fn test_base64_to_bin_ignored_trailing_characters() {
    let mut bin = [0u8; 16];
    let len = base64_to_bin("Zm9vYg==\r\n", &mut bin, Base64Variant::Original, b"\r\n")
        .expect("Failed to base64_to_bin(..)");

    assert_eq!(&bin[..len], b"foob");
}

#[test]
fn test_base64_to_bin_buffer_too_small() {
    let mut bin = [0xAAu8; 12];
    let result = base64_to_bin("Afn4R+RJFNnrP/KvQg==", &mut bin, Base64Variant::Original, b"");

    assert_eq!(
        result,
        Err(CodecError::BufferTooSmall {
            needed: 13,
            capacity: 12
        })
    );
    assert!(bin.iter().all(|&b| b == 0));
}

#[test]
fn test_base64_to_bin_wipes_prefix_on_error() {
    let mut bin = [0xAAu8; 8];
    let result = base64_to_bin("Zm9vYmFy!", &mut bin, Base64Variant::Original, b"");

    assert_eq!(result, Err(CodecError::Decode));
    assert!(bin[..6].iter().all(|&b| b == 0));
    assert_eq!(&bin[6..], &[0xAA, 0xAA]);
}

// =============================================================================
// base64_decode()
// =============================================================================

#[test]
fn test_base64_decode_all_variants() {
    for variant in Base64Variant::ALL {
        let text = bin_to_base64(&VECTOR, variant);
        let bin = base64_decode(&text, variant, b"").expect("Failed to base64_decode(..)");

        assert_eq!(bin, VECTOR);
    }
}

#[test]
fn test_base64_decode_empty() {
    for variant in Base64Variant::ALL {
        assert_eq!(base64_decode("", variant, b""), Ok(vec![]));
    }
}
