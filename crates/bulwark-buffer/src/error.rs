// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-buffer.
use alloc::boxed::Box;
use thiserror::Error;

/// Errors from page syscalls.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum PageError {
    /// mmap refused.
    #[error("mmap failed")]
    Create = 0,

    /// mlock refused.
    #[error("mlock failed")]
    Lock = 1,

    /// munlock refused.
    #[error("munlock failed")]
    Unlock = 2,

    /// mprotect to read-only refused.
    #[error("mprotect(PROT_READ) failed")]
    Protect = 3,

    /// mprotect to read-write refused.
    #[error("mprotect(PROT_READ | PROT_WRITE) failed")]
    Unprotect = 4,

    /// madvise refused.
    #[error("madvise(MADV_DONTDUMP) failed")]
    Madvise = 5,
}

/// Errors that can occur when working with buffers.
#[derive(Debug, Error)]
pub enum BufferError {
    /// Requested a zero-length buffer.
    #[error("buffer size must be greater than zero")]
    ZeroSize,

    /// The platform refused to reserve the region.
    #[error("allocation failed: {0}")]
    Allocation(#[source] PageError),

    /// The platform refused to lock the region in RAM.
    #[error("lock failed: {0}")]
    Lock(#[source] PageError),

    /// The platform refused to unlock the region.
    #[error("unlock failed: {0}")]
    Unlock(#[source] PageError),

    /// The platform refused to change the region's protection.
    #[error("protection change failed: {0}")]
    Protection(#[source] PageError),

    /// The buffer is already locked.
    #[error("buffer is already locked")]
    AlreadyLocked,

    /// The buffer is not locked.
    #[error("buffer is not locked")]
    NotLocked,

    /// Write access requested while the buffer is read-only.
    #[error("buffer is read-only")]
    ReadOnly,

    /// The buffer has been freed.
    #[error("use after free")]
    UseAfterFree,

    /// An error occurred in a callback function.
    #[error("callback error: {0:?}")]
    CallbackError(Box<dyn core::fmt::Debug + Send + Sync + 'static>),
}

impl BufferError {
    /// Creates a CallbackError from any Debug + Send + Sync error.
    pub fn callback_error<E: core::fmt::Debug + Send + Sync + 'static>(e: E) -> Self {
        Self::CallbackError(Box::new(e))
    }
}
