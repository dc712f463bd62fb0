// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::enums::Protection;
use crate::error::PageError;
use crate::portable_allocator::PortableAllocator;
use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};
use crate::traits::PageAllocator;

#[test]
fn test_mock_allocator_behaviour_none_delegates() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let region = mock.allocate(8).expect("Failed to allocate(..)");

    assert!(mock.protect(&region, Protection::ReadOnly).is_ok());
    assert!(mock.protect(&region, Protection::ReadWrite).is_ok());
    assert_eq!(mock.protect_count(), 2);

    mock.free(region);
    assert_eq!(mock.free_count(), 1);
}

#[test]
fn test_mock_allocator_fail_allocate() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAllocate);

    assert!(matches!(mock.allocate(8), Err(PageError::Create)));
}

#[test]
fn test_mock_allocator_fail_at_nth_protect() {
    let mock = MockAllocator::with_inner(
        PortableAllocator {},
        MockAllocatorBehaviour::FailAtNthProtect(2),
    );
    let region = mock.allocate(8).expect("Failed to allocate(..)");

    assert!(mock.protect(&region, Protection::ReadOnly).is_ok());
    assert_eq!(
        mock.protect(&region, Protection::ReadWrite),
        Err(PageError::Unprotect)
    );
    assert!(mock.protect(&region, Protection::ReadWrite).is_ok());

    mock.free(region);
}

#[test]
fn test_mock_allocator_records_dirty_free() {
    let mock = MockAllocator::with_inner(PortableAllocator {}, MockAllocatorBehaviour::None);
    let mut region = mock.allocate(8).expect("Failed to allocate(..)");

    assert_eq!(mock.last_free_was_zeroized(), None);

    let data = unsafe { region.as_mut_slice() };
    data[3] = 1;
    mock.free(region);

    assert_eq!(mock.last_free_was_zeroized(), Some(false));
}

#[test]
fn test_mock_allocator_fail_lock_and_unlock() {
    let mock = MockAllocator::with_inner(PortableAllocator {}, MockAllocatorBehaviour::FailLock);
    let region = mock.allocate(8).expect("Failed to allocate(..)");

    assert_eq!(mock.lock(&region), Err(PageError::Lock));
    assert_eq!(mock.lock_count(), 1);

    mock.free(region);
}
