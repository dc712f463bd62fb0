// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::enums::Protection;
use crate::error::{BufferError, PageError};
use crate::region::Region;

/// Trait for buffer types that provide temporary access to their contents.
pub trait Buffer: Send + Sync + core::fmt::Debug {
    /// Opens the buffer for read-only access, executing the provided closure.
    fn open(
        &mut self,
        f: &mut dyn FnMut(&[u8]) -> Result<(), BufferError>,
    ) -> Result<(), BufferError>;

    /// Opens the buffer for mutable access, executing the provided closure.
    fn open_mut(
        &mut self,
        f: &mut dyn FnMut(&mut [u8]) -> Result<(), BufferError>,
    ) -> Result<(), BufferError>;

    /// Returns the length of the buffer in bytes.
    fn len(&self) -> usize;

    /// Returns true if the buffer has zero length.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Platform memory capability behind [`SecureBuffer`](crate::SecureBuffer).
///
/// Implementations own the mechanics (mapping, guard regions, locking,
/// page protection); the buffer owns the state machine and zeroing. Each
/// call reports platform refusal as a [`PageError`] and never retries.
pub trait PageAllocator {
    /// Reserves a zero-filled region with at least `len` usable bytes,
    /// readable and writable. `len` is never zero.
    fn allocate(&self, len: usize) -> Result<Region, PageError>;

    /// Pins the region's pages in RAM.
    fn lock(&self, region: &Region) -> Result<(), PageError>;

    /// Releases a pin taken by [`lock`](Self::lock).
    fn unlock(&self, region: &Region) -> Result<(), PageError>;

    /// Applies `protection` to the region's data pages.
    fn protect(&self, region: &Region, protection: Protection) -> Result<(), PageError>;

    /// Returns the region to the platform. The region is unusable afterwards.
    fn free(&self, region: Region);
}

impl<T: PageAllocator + ?Sized> PageAllocator for &T {
    fn allocate(&self, len: usize) -> Result<Region, PageError> {
        (**self).allocate(len)
    }

    fn lock(&self, region: &Region) -> Result<(), PageError> {
        (**self).lock(region)
    }

    fn unlock(&self, region: &Region) -> Result<(), PageError> {
        (**self).unlock(region)
    }

    fn protect(&self, region: &Region, protection: Protection) -> Result<(), PageError> {
        (**self).protect(region, protection)
    }

    fn free(&self, region: Region) {
        (**self).free(region)
    }
}
