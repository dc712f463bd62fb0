// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secure-memory helpers for caller-owned slices.
//!
//! For memory that does not live in a [`SecureBuffer`](crate::SecureBuffer):
//! stack arrays, `Vec`s, buffers handed over by other libraries.

use crate::error::{BufferError, PageError};

/// Overwrites `buf` with zeros in a way the optimizer cannot remove.
pub fn zero(buf: &mut [u8]) {
    bulwark_guard::ensure_ready();
    bulwark_ct::zeroize(buf);
}

/// Asks the OS to keep the pages spanning `buf` out of swap.
///
/// Locks are per page: unlocking any slice on a page releases it for every
/// slice sharing that page.
///
/// # Errors
///
/// Returns [`BufferError::Lock`] if the platform refuses or cannot lock
/// memory at all.
pub fn lock(buf: &[u8]) -> Result<(), BufferError> {
    bulwark_guard::ensure_ready();
    sys_lock(buf).map_err(BufferError::Lock)
}

/// Releases a lock taken by [`lock`]. Does not zero the contents.
///
/// # Errors
///
/// Returns [`BufferError::Unlock`] if the platform refuses or cannot lock
/// memory at all.
pub fn unlock(buf: &[u8]) -> Result<(), BufferError> {
    bulwark_guard::ensure_ready();
    sys_unlock(buf).map_err(BufferError::Unlock)
}

#[cfg(unix)]
fn sys_lock(buf: &[u8]) -> Result<(), PageError> {
    let failed = unsafe { libc::mlock(buf.as_ptr() as *const _, buf.len()) } != 0;

    if failed {
        return Err(PageError::Lock);
    }

    Ok(())
}

#[cfg(unix)]
fn sys_unlock(buf: &[u8]) -> Result<(), PageError> {
    let failed = unsafe { libc::munlock(buf.as_ptr() as *const _, buf.len()) } != 0;

    if failed {
        return Err(PageError::Unlock);
    }

    Ok(())
}

#[cfg(not(unix))]
fn sys_lock(_buf: &[u8]) -> Result<(), PageError> {
    Err(PageError::Lock)
}

#[cfg(not(unix))]
fn sys_unlock(_buf: &[u8]) -> Result<(), PageError> {
    Err(PageError::Unlock)
}
