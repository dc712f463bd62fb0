// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;

/// A reserved memory range handed out by a [`PageAllocator`](crate::PageAllocator).
///
/// Three nested spans:
///
/// - the **mapping** (`base .. base + mapped_len`), everything the
///   allocator reserved, guard pages included;
/// - the **pages** (`base + pages_offset`, `pages_len` bytes), the
///   lockable and protectable part;
/// - the **data** (`base + data_offset`, `len` bytes), what the buffer
///   exposes, contained in the pages.
#[derive(Debug)]
pub struct Region {
    base: NonNull<u8>,
    mapped_len: usize,
    pages_offset: usize,
    pages_len: usize,
    data_offset: usize,
    len: usize,
}

// Region is a plain address range; access is mediated by its owner.
unsafe impl Send for Region {}
unsafe impl Sync for Region {}

impl Region {
    /// Describes a reserved range.
    ///
    /// # Safety
    ///
    /// `base .. base + mapped_len` must be a live reservation owned by the
    /// caller, and `data_offset + len <= pages_offset + pages_len <= mapped_len`
    /// with `pages_offset <= data_offset`.
    pub unsafe fn from_raw_parts(
        base: NonNull<u8>,
        mapped_len: usize,
        pages_offset: usize,
        pages_len: usize,
        data_offset: usize,
        len: usize,
    ) -> Self {
        debug_assert!(pages_offset <= data_offset);
        debug_assert!(data_offset + len <= pages_offset + pages_len);
        debug_assert!(pages_offset + pages_len <= mapped_len);

        Self {
            base,
            mapped_len,
            pages_offset,
            pages_len,
            data_offset,
            len,
        }
    }

    /// Start of the whole reservation.
    pub fn base(&self) -> NonNull<u8> {
        self.base
    }

    /// Length of the whole reservation.
    pub fn mapped_len(&self) -> usize {
        self.mapped_len
    }

    /// Start of the lockable pages.
    pub fn pages_ptr(&self) -> *mut u8 {
        unsafe { self.base.as_ptr().add(self.pages_offset) }
    }

    /// Length of the lockable pages.
    pub fn pages_len(&self) -> usize {
        self.pages_len
    }

    /// Start of the exposed data.
    pub fn data_ptr(&self) -> *mut u8 {
        unsafe { self.base.as_ptr().add(self.data_offset) }
    }

    /// Length of the exposed data.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the data span is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Data span as a slice.
    ///
    /// # Safety
    ///
    /// The pages must be readable and the region not freed.
    pub unsafe fn as_slice(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.data_ptr(), self.len) }
    }

    /// Data span as a mutable slice.
    ///
    /// # Safety
    ///
    /// The pages must be writable and the region not freed.
    pub unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.data_ptr(), self.len) }
    }

    /// Whole lockable span as a slice.
    ///
    /// # Safety
    ///
    /// The pages must be readable and the region not freed.
    #[cfg(any(test, feature = "test-utils"))]
    pub(crate) unsafe fn pages(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.pages_ptr(), self.pages_len) }
    }

    /// Whole lockable span as a mutable slice.
    ///
    /// # Safety
    ///
    /// The pages must be writable and the region not freed.
    pub(crate) unsafe fn pages_mut(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.pages_ptr(), self.pages_len) }
    }
}
