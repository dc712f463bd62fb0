// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PortableAllocator - Standard heap allocation (no OS protections)
//!
//! Works everywhere. Locking is reported as unsupported; protection
//! changes are accepted and enforced by [`SecureBuffer`](crate::SecureBuffer)
//! alone, not by the hardware.

use alloc::boxed::Box;
use alloc::vec;
use core::ptr::NonNull;

use crate::enums::Protection;
use crate::error::PageError;
use crate::region::Region;
use crate::traits::PageAllocator;

/// Heap-backed allocator without guard pages or page locking.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortableAllocator {}

impl PageAllocator for PortableAllocator {
    fn allocate(&self, len: usize) -> Result<Region, PageError> {
        let data: Box<[u8]> = vec![0u8; len].into_boxed_slice();
        let base = NonNull::new(Box::into_raw(data) as *mut u8).ok_or(PageError::Create)?;

        Ok(unsafe { Region::from_raw_parts(base, len, 0, len, 0, len) })
    }

    fn lock(&self, _region: &Region) -> Result<(), PageError> {
        Err(PageError::Lock)
    }

    fn unlock(&self, _region: &Region) -> Result<(), PageError> {
        Err(PageError::Unlock)
    }

    fn protect(&self, _region: &Region, _protection: Protection) -> Result<(), PageError> {
        Ok(())
    }

    fn free(&self, region: Region) {
        let raw = core::ptr::slice_from_raw_parts_mut(region.base().as_ptr(), region.mapped_len());
        // Reclaims the Box leaked by allocate().
        drop(unsafe { Box::from_raw(raw) });
    }
}
