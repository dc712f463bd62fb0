// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{is_zeroized, zeroize};

#[test]
fn test_zeroize_clears_all_data() {
    let mut data = [0xFFu8; 128];
    assert!(!is_zeroized(&data));

    zeroize(&mut data);

    assert!(is_zeroized(&data));
}

#[test]
fn test_zeroize_empty_slice() {
    let mut data: [u8; 0] = [];
    zeroize(&mut data);

    assert!(is_zeroized(&data));
}

#[test]
fn test_zeroize_subslice_leaves_rest_untouched() {
    let mut data = [0xABu8; 16];
    zeroize(&mut data[4..8]);

    assert!(is_zeroized(&data[4..8]));
    assert!(data[..4].iter().all(|&b| b == 0xAB));
    assert!(data[8..].iter().all(|&b| b == 0xAB));
}
