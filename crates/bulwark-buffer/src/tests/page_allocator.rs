// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for UnixPageAllocator, including fault behaviour observed from a
//! forked child.

use serial_test::serial;

use crate::enums::Protection;
use crate::page_allocator::UnixPageAllocator;
use crate::traits::PageAllocator;

use super::utils::{is_memory_fault, killing_signal_in_child};

// =============================================================================
// allocate()
// =============================================================================

#[test]
fn test_allocate_region_is_zeroed() {
    let allocator = UnixPageAllocator {};
    let region = allocator.allocate(100).expect("Failed to allocate(..)");

    assert_eq!(region.len(), 100);
    assert!(unsafe { region.as_slice() }.iter().all(|&b| b == 0));

    allocator.free(region);
}

#[test]
fn test_allocate_layout() {
    let page_size = bulwark_guard::page_size();
    let allocator = UnixPageAllocator {};

    for len in [1, 100, page_size - 1, page_size, page_size + 1, 3 * page_size] {
        let region = allocator.allocate(len).expect("Failed to allocate(..)");

        assert_eq!(region.pages_len() % page_size, 0);
        assert!(region.pages_len() >= len);
        assert!(region.pages_len() < len + page_size);
        assert_eq!(region.mapped_len(), region.pages_len() + 2 * page_size);
        assert_eq!(region.pages_ptr() as usize, region.base().as_ptr() as usize + page_size);
        // Data ends flush against the trailing guard page.
        assert_eq!(
            region.data_ptr() as usize + region.len(),
            region.pages_ptr() as usize + region.pages_len()
        );

        allocator.free(region);
    }
}

#[test]
fn test_allocate_overflowing_length() {
    let allocator = UnixPageAllocator {};

    assert!(allocator.allocate(usize::MAX - 1).is_err());
}

// =============================================================================
// lock() / unlock()
// =============================================================================

#[test]
#[serial(mlock)]
fn test_lock_then_unlock() {
    let allocator = UnixPageAllocator {};
    let region = allocator.allocate(32).expect("Failed to allocate(..)");

    allocator.lock(&region).expect("Failed to lock(..)");
    allocator.unlock(&region).expect("Failed to unlock(..)");

    allocator.free(region);
}

// =============================================================================
// protect()
// =============================================================================

#[test]
fn test_protect_read_only_keeps_data_readable() {
    let allocator = UnixPageAllocator {};
    let mut region = allocator.allocate(32).expect("Failed to allocate(..)");
    let data = unsafe { region.as_mut_slice() };
    data.fill(0x42);

    allocator
        .protect(&region, Protection::ReadOnly)
        .expect("Failed to protect(..)");

    assert!(unsafe { region.as_slice() }.iter().all(|&b| b == 0x42));

    allocator
        .protect(&region, Protection::ReadWrite)
        .expect("Failed to protect(..)");
    let data = unsafe { region.as_mut_slice() };
    data[0] = 0;

    allocator.free(region);
}

#[test]
fn test_write_to_read_only_faults() {
    let allocator = UnixPageAllocator {};
    let region = allocator.allocate(32).expect("Failed to allocate(..)");
    allocator
        .protect(&region, Protection::ReadOnly)
        .expect("Failed to protect(..)");

    let ptr = region.data_ptr();
    let signal = killing_signal_in_child(|| unsafe { core::ptr::write_volatile(ptr, 1) });

    assert!(is_memory_fault(signal), "child ended with {signal:?}");

    allocator.free(region);
}

// =============================================================================
// guard pages
// =============================================================================

#[test]
fn test_read_past_end_faults() {
    let allocator = UnixPageAllocator {};
    let region = allocator.allocate(10).expect("Failed to allocate(..)");

    let past_end = unsafe { region.data_ptr().add(region.len()) };
    let signal = killing_signal_in_child(|| unsafe {
        core::ptr::read_volatile(past_end);
    });

    assert!(is_memory_fault(signal), "child ended with {signal:?}");

    allocator.free(region);
}

#[test]
fn test_read_before_pages_faults() {
    let allocator = UnixPageAllocator {};
    let region = allocator.allocate(10).expect("Failed to allocate(..)");

    let before = unsafe { region.pages_ptr().sub(1) };
    let signal = killing_signal_in_child(|| unsafe {
        core::ptr::read_volatile(before);
    });

    assert!(is_memory_fault(signal), "child ended with {signal:?}");

    allocator.free(region);
}

#[test]
fn test_last_data_byte_is_accessible() {
    let allocator = UnixPageAllocator {};
    let region = allocator.allocate(10).expect("Failed to allocate(..)");

    let last = unsafe { region.data_ptr().add(region.len() - 1) };
    let signal = killing_signal_in_child(|| unsafe { core::ptr::write_volatile(last, 0xFF) });

    assert_eq!(signal, None);

    allocator.free(region);
}
