// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SecureBuffer - Lifecycle state machine over a platform region.
//!
//! ```text
//! allocate ──> Allocated { ReadWrite } <──> Allocated { ReadOnly }
//!                     │                            │
//!                     └────────── free ────────────┴──> Freed
//! ```
//!
//! Locking is orthogonal to protection. Every operation on a freed buffer
//! fails with [`BufferError::UseAfterFree`].

use crate::DefaultAllocator;
use crate::enums::Protection;
use crate::error::{BufferError, PageError};
use crate::region::Region;
use crate::traits::{Buffer, PageAllocator};

enum State {
    Allocated {
        region: Region,
        protection: Protection,
        locked: bool,
    },
    Freed,
}

/// A fixed-length buffer for secrets.
///
/// - Allocated through a [`PageAllocator`]; with the default allocator on
///   Unix the data sits between guard pages and is excluded from core
///   dumps on Linux.
/// - Can be locked in RAM and flipped to read-only while in use.
/// - [`free`](Self::free) zeroes every byte, unlocks and releases the
///   region. Dropping a buffer that was not freed frees it.
///
/// # Example
///
/// ```rust
/// use bulwark_buffer::{BufferError, SecureBuffer};
///
/// fn example() -> Result<(), BufferError> {
///     let mut key = SecureBuffer::allocate(32)?;
///
///     key.expose_mut()?.copy_from_slice(&[0x42; 32]);
///     key.protect_read_only()?;
///
///     assert!(matches!(key.expose_mut(), Err(BufferError::ReadOnly)));
///     assert_eq!(key.expose()?[0], 0x42);
///
///     key.free()?;
///     assert!(matches!(key.expose(), Err(BufferError::UseAfterFree)));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct SecureBuffer<A: PageAllocator = DefaultAllocator> {
    allocator: A,
    len: usize,
    state: State,
}

impl SecureBuffer {
    /// Allocates `len` zeroed bytes with the platform default allocator.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroSize`] if `len == 0`.
    /// - [`BufferError::Allocation`] if the platform denies the request.
    pub fn allocate(len: usize) -> Result<Self, BufferError> {
        Self::allocate_with(DefaultAllocator::default(), len)
    }

    /// Allocates room for `count` elements of `elem_size` bytes each with
    /// the platform default allocator.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroSize`] if the total is zero.
    /// - [`BufferError::Allocation`] if `count * elem_size` overflows or the
    ///   platform denies the request.
    pub fn allocate_array(count: usize, elem_size: usize) -> Result<Self, BufferError> {
        Self::allocate_array_with(DefaultAllocator::default(), count, elem_size)
    }
}

impl<A: PageAllocator> SecureBuffer<A> {
    /// Allocates `len` zeroed bytes through `allocator`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroSize`] if `len == 0`.
    /// - [`BufferError::Allocation`] if the allocator denies the request.
    pub fn allocate_with(allocator: A, len: usize) -> Result<Self, BufferError> {
        bulwark_guard::ensure_ready();

        if len == 0 {
            return Err(BufferError::ZeroSize);
        }

        let region = allocator.allocate(len).map_err(BufferError::Allocation)?;

        log::debug!("allocated secure buffer of {len} bytes");

        Ok(Self {
            allocator,
            len,
            state: State::Allocated {
                region,
                protection: Protection::ReadWrite,
                locked: false,
            },
        })
    }

    /// Allocates room for `count` elements of `elem_size` bytes each
    /// through `allocator`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroSize`] if the total is zero.
    /// - [`BufferError::Allocation`] if `count * elem_size` overflows or the
    ///   allocator denies the request.
    pub fn allocate_array_with(
        allocator: A,
        count: usize,
        elem_size: usize,
    ) -> Result<Self, BufferError> {
        let Some(len) = count.checked_mul(elem_size) else {
            log::warn!("array of {count} x {elem_size} bytes overflows usize");
            return Err(BufferError::Allocation(PageError::Create));
        };

        Self::allocate_with(allocator, len)
    }

    /// Length in bytes, fixed at allocation.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: zero-length buffers cannot be allocated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once [`free`](Self::free) has run.
    pub fn is_freed(&self) -> bool {
        matches!(self.state, State::Freed)
    }

    /// Current protection.
    ///
    /// # Errors
    ///
    /// [`BufferError::UseAfterFree`] after [`free`](Self::free).
    pub fn protection(&self) -> Result<Protection, BufferError> {
        match &self.state {
            State::Allocated { protection, .. } => Ok(*protection),
            State::Freed => Err(BufferError::UseAfterFree),
        }
    }

    /// Whether the region is locked in RAM.
    ///
    /// # Errors
    ///
    /// [`BufferError::UseAfterFree`] after [`free`](Self::free).
    pub fn is_locked(&self) -> Result<bool, BufferError> {
        match &self.state {
            State::Allocated { locked, .. } => Ok(*locked),
            State::Freed => Err(BufferError::UseAfterFree),
        }
    }

    /// Asks the OS to keep the region out of swap.
    ///
    /// # Errors
    ///
    /// - [`BufferError::AlreadyLocked`] if already locked.
    /// - [`BufferError::Lock`] if the platform refuses (e.g. `RLIMIT_MEMLOCK`).
    /// - [`BufferError::UseAfterFree`] after [`free`](Self::free).
    pub fn lock(&mut self) -> Result<(), BufferError> {
        bulwark_guard::ensure_ready();

        let State::Allocated { region, locked, .. } = &mut self.state else {
            return Err(BufferError::UseAfterFree);
        };

        if *locked {
            return Err(BufferError::AlreadyLocked);
        }

        self.allocator.lock(region).map_err(BufferError::Lock)?;
        *locked = true;

        log::debug!("locked secure buffer of {} bytes", self.len);

        Ok(())
    }

    /// Releases the lock taken by [`lock`](Self::lock).
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotLocked`] if not locked.
    /// - [`BufferError::Unlock`] if the platform refuses; the buffer stays locked.
    /// - [`BufferError::UseAfterFree`] after [`free`](Self::free).
    pub fn unlock(&mut self) -> Result<(), BufferError> {
        bulwark_guard::ensure_ready();

        let State::Allocated { region, locked, .. } = &mut self.state else {
            return Err(BufferError::UseAfterFree);
        };

        if !*locked {
            return Err(BufferError::NotLocked);
        }

        self.allocator.unlock(region).map_err(BufferError::Unlock)?;
        *locked = false;

        log::debug!("unlocked secure buffer of {} bytes", self.len);

        Ok(())
    }

    /// Makes the data pages read-only. Already read-only buffers re-apply
    /// the protection.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Protection`] if the platform refuses; protection is unchanged.
    /// - [`BufferError::UseAfterFree`] after [`free`](Self::free).
    pub fn protect_read_only(&mut self) -> Result<(), BufferError> {
        self.set_protection(Protection::ReadOnly)
    }

    /// Makes the data pages writable again.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Protection`] if the platform refuses; protection is unchanged.
    /// - [`BufferError::UseAfterFree`] after [`free`](Self::free).
    pub fn protect_read_write(&mut self) -> Result<(), BufferError> {
        self.set_protection(Protection::ReadWrite)
    }

    fn set_protection(&mut self, target: Protection) -> Result<(), BufferError> {
        bulwark_guard::ensure_ready();

        let State::Allocated {
            region, protection, ..
        } = &mut self.state
        else {
            return Err(BufferError::UseAfterFree);
        };

        self.allocator
            .protect(region, target)
            .map_err(BufferError::Protection)?;
        *protection = target;

        log::debug!("secure buffer of {} bytes set to {target:?}", self.len);

        Ok(())
    }

    /// Borrows the data for reading.
    ///
    /// # Errors
    ///
    /// [`BufferError::UseAfterFree`] after [`free`](Self::free).
    pub fn expose(&self) -> Result<&[u8], BufferError> {
        bulwark_guard::ensure_ready();

        match &self.state {
            // Both protections allow reads.
            State::Allocated { region, .. } => Ok(unsafe { region.as_slice() }),
            State::Freed => Err(BufferError::UseAfterFree),
        }
    }

    /// Borrows the data for writing.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ReadOnly`] while protected read-only.
    /// - [`BufferError::UseAfterFree`] after [`free`](Self::free).
    pub fn expose_mut(&mut self) -> Result<&mut [u8], BufferError> {
        bulwark_guard::ensure_ready();

        match &mut self.state {
            State::Allocated {
                protection: Protection::ReadOnly,
                ..
            } => Err(BufferError::ReadOnly),
            State::Allocated { region, .. } => Ok(unsafe { region.as_mut_slice() }),
            State::Freed => Err(BufferError::UseAfterFree),
        }
    }

    /// Zeroes the whole region, unlocks it if locked, releases it and moves
    /// to the freed state.
    ///
    /// Zeroing is unconditional. A read-only buffer is first made writable;
    /// if the platform refuses, the region is released without zeroing and
    /// the error is returned. An unlock refusal is likewise reported after
    /// the region is released. The buffer is freed in every case.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Protection`] if write access could not be restored.
    /// - [`BufferError::Unlock`] if the lock could not be released.
    /// - [`BufferError::UseAfterFree`] if already freed.
    pub fn free(&mut self) -> Result<(), BufferError> {
        bulwark_guard::ensure_ready();

        let State::Allocated {
            mut region,
            protection,
            locked,
        } = core::mem::replace(&mut self.state, State::Freed)
        else {
            return Err(BufferError::UseAfterFree);
        };

        let mut result = Ok(());

        let writable = match protection {
            Protection::ReadWrite => true,
            Protection::ReadOnly => match self.allocator.protect(&region, Protection::ReadWrite) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("free: cannot restore write access ({e}), releasing without zeroing");
                    result = Err(BufferError::Protection(e));
                    false
                }
            },
        };

        if writable {
            bulwark_ct::zeroize(unsafe { region.pages_mut() });
        }

        if locked {
            if let Err(e) = self.allocator.unlock(&region) {
                log::error!("free: {e}, pages released while locked");
                if result.is_ok() {
                    result = Err(BufferError::Unlock(e));
                }
            }
        }

        self.allocator.free(region);

        log::debug!("freed secure buffer of {} bytes", self.len);

        result
    }
}

impl<A: PageAllocator> Drop for SecureBuffer<A> {
    fn drop(&mut self) {
        if self.is_freed() {
            return;
        }

        if let Err(e) = self.free() {
            log::error!("drop: secure buffer release incomplete: {e}");
        }
    }
}

impl<A: PageAllocator> core::fmt::Debug for SecureBuffer<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("SecureBuffer");
        s.field("len", &self.len);

        match &self.state {
            State::Allocated {
                protection, locked, ..
            } => s.field("protection", protection).field("locked", locked),
            State::Freed => s.field("freed", &true),
        };

        s.finish_non_exhaustive()
    }
}

impl<A: PageAllocator + Send + Sync> Buffer for SecureBuffer<A> {
    fn open(
        &mut self,
        f: &mut dyn FnMut(&[u8]) -> Result<(), BufferError>,
    ) -> Result<(), BufferError> {
        f(self.expose()?)
    }

    fn open_mut(
        &mut self,
        f: &mut dyn FnMut(&mut [u8]) -> Result<(), BufferError>,
    ) -> Result<(), BufferError> {
        f(self.expose_mut()?)
    }

    fn len(&self) -> usize {
        self.len
    }
}
