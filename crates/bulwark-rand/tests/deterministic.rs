// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use bulwark_rand::{EntropyError, SEED_BYTES, fill_deterministic};

proptest! {
    #[test]
    fn prop_fill_deterministic_reproducible(seed in prop::array::uniform32(any::<u8>()), len in 0usize..512) {
        let mut a = vec![0u8; len];
        let mut b = vec![0xFFu8; len];

        fill_deterministic(&mut a, &seed).expect("Failed to fill_deterministic(..)");
        fill_deterministic(&mut b, &seed).expect("Failed to fill_deterministic(..)");

        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_fill_deterministic_rejects_wrong_seed_length(seed in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(seed.len() != SEED_BYTES);
        let mut out = [0u8; 4];

        prop_assert_eq!(
            fill_deterministic(&mut out, &seed),
            Err(EntropyError::InvalidSeedLength { expected: SEED_BYTES, actual: seed.len() })
        );
    }
}
