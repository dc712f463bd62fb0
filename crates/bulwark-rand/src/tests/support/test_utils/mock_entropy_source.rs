// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_mock_entropy_source_behaviour_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    assert!(matches!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    ));
    assert!(matches!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    ));
}

#[test]
fn test_mock_entropy_source_behaviour_fail_at_nth() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(matches!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    ));
    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_entropy_source_behaviour_zero_until_nth() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::ZeroUntilNthFillBytes(3));
    let mut buf = [0xAAu8; 32];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#1)");
    assert_eq!(buf, [0u8; 32]);

    buf.fill(0xAA);
    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#2)");
    assert_eq!(buf, [0u8; 32]);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#3)");
    assert_ne!(buf, [0u8; 32]);
}

#[test]
fn test_mock_entropy_source_change_behaviour_and_reset() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 8];

    assert!(mock.fill_bytes(&mut buf).is_err());

    mock.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}
