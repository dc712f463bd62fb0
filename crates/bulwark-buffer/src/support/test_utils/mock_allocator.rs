// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use crate::DefaultAllocator;
use crate::enums::Protection;
use crate::error::PageError;
use crate::region::Region;
use crate::traits::PageAllocator;

const FREED_NONE: u8 = 0;
const FREED_DIRTY: u8 = 1;
const FREED_ZEROIZED: u8 = 2;

/// Configurable behavior for [`MockAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to the inner allocator).
    None,
    /// Always fail allocate.
    FailAllocate,
    /// Always fail lock.
    FailLock,
    /// Always fail unlock.
    FailUnlock,
    /// Always fail protect.
    FailProtect,
    /// Fail protect on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthProtect(usize),
}

/// Mock allocator for testing.
///
/// Wraps a real allocator but allows simulating platform refusals via
/// [`MockAllocatorBehaviour`]. Counts calls and, on every `free`, inspects
/// the region before handing it back, recording whether it was zeroed.
///
/// `&MockAllocator` is itself a [`PageAllocator`], so a test can keep the
/// mock and inspect it after the buffer using it is gone.
#[derive(Debug)]
pub struct MockAllocator<A: PageAllocator = DefaultAllocator> {
    inner: A,
    behaviour: MockAllocatorBehaviour,
    lock_count: AtomicUsize,
    unlock_count: AtomicUsize,
    protect_count: AtomicUsize,
    free_count: AtomicUsize,
    last_free: AtomicU8,
}

impl MockAllocator {
    /// Creates a mock over the platform default allocator.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        Self::with_inner(DefaultAllocator::default(), behaviour)
    }
}

impl<A: PageAllocator> MockAllocator<A> {
    /// Creates a mock over `inner`.
    pub fn with_inner(inner: A, behaviour: MockAllocatorBehaviour) -> Self {
        Self {
            inner,
            behaviour,
            lock_count: AtomicUsize::new(0),
            unlock_count: AtomicUsize::new(0),
            protect_count: AtomicUsize::new(0),
            free_count: AtomicUsize::new(0),
            last_free: AtomicU8::new(FREED_NONE),
        }
    }

    /// Number of lock calls so far.
    pub fn lock_count(&self) -> usize {
        self.lock_count.load(Ordering::Relaxed)
    }

    /// Number of unlock calls so far.
    pub fn unlock_count(&self) -> usize {
        self.unlock_count.load(Ordering::Relaxed)
    }

    /// Number of protect calls so far.
    pub fn protect_count(&self) -> usize {
        self.protect_count.load(Ordering::Relaxed)
    }

    /// Number of regions released so far.
    pub fn free_count(&self) -> usize {
        self.free_count.load(Ordering::Relaxed)
    }

    /// Whether the most recently released region was all zeros when it was
    /// handed back, or `None` if nothing was released yet.
    pub fn last_free_was_zeroized(&self) -> Option<bool> {
        match self.last_free.load(Ordering::Relaxed) {
            FREED_NONE => None,
            state => Some(state == FREED_ZEROIZED),
        }
    }
}

impl<A: PageAllocator> PageAllocator for MockAllocator<A> {
    fn allocate(&self, len: usize) -> Result<Region, PageError> {
        match self.behaviour {
            MockAllocatorBehaviour::FailAllocate => Err(PageError::Create),
            _ => self.inner.allocate(len),
        }
    }

    fn lock(&self, region: &Region) -> Result<(), PageError> {
        self.lock_count.fetch_add(1, Ordering::Relaxed);

        match self.behaviour {
            MockAllocatorBehaviour::FailLock => Err(PageError::Lock),
            _ => self.inner.lock(region),
        }
    }

    fn unlock(&self, region: &Region) -> Result<(), PageError> {
        self.unlock_count.fetch_add(1, Ordering::Relaxed);

        match self.behaviour {
            MockAllocatorBehaviour::FailUnlock => Err(PageError::Unlock),
            _ => self.inner.unlock(region),
        }
    }

    fn protect(&self, region: &Region, protection: Protection) -> Result<(), PageError> {
        let call = self.protect_count.fetch_add(1, Ordering::Relaxed) + 1;

        let refused = match protection {
            Protection::ReadOnly => PageError::Protect,
            Protection::ReadWrite => PageError::Unprotect,
        };

        match self.behaviour {
            MockAllocatorBehaviour::FailProtect => Err(refused),
            MockAllocatorBehaviour::FailAtNthProtect(n) if call == n => Err(refused),
            _ => self.inner.protect(region, protection),
        }
    }

    fn free(&self, region: Region) {
        self.free_count.fetch_add(1, Ordering::Relaxed);

        // Pages are at least readable in both protections.
        let zeroized = unsafe { region.pages() }.iter().all(|&b| b == 0);
        let state = if zeroized { FREED_ZEROIZED } else { FREED_DIRTY };
        self.last_free.store(state, Ordering::Relaxed);

        self.inner.free(region)
    }
}
