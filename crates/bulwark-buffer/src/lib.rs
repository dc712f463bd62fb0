// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secure buffers for keys, nonces and plaintext.
//!
//! [`SecureBuffer`] owns a fixed-length region through its whole life:
//!
//! 1. **Allocate**: the region is zero-filled and, with the Unix allocator,
//!    fenced by `PROT_NONE` guard pages so overruns fault. On Linux it is
//!    also excluded from core dumps.
//! 2. **Use**: optionally lock it in RAM ([`SecureBuffer::lock`]) and flip
//!    it read-only while nothing should write it
//!    ([`SecureBuffer::protect_read_only`]).
//! 3. **Free**: every byte is zeroed, the lock is released and the region
//!    handed back. Any later call fails with [`BufferError::UseAfterFree`].
//!
//! The platform side is the [`PageAllocator`] capability trait:
//!
//! - [`UnixPageAllocator`] (Unix): `mmap` + guard pages, `mlock`, `mprotect`.
//! - [`PortableAllocator`] (everywhere): heap memory; locking is reported
//!   as unsupported and read-only is enforced by the API only.
//!
//! [`DefaultAllocator`] picks the first on Unix and the second elsewhere.
//!
//! The [`memory`] module offers zeroing and locking for slices that are not
//! owned by a `SecureBuffer`.
//!
//! # Example
//!
//! ```rust
//! use bulwark_buffer::{Buffer, BufferError, SecureBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut nonce = SecureBuffer::allocate(24)?;
//!
//!     nonce.open_mut(&mut |bytes: &mut [u8]| {
//!         bytes[0] = 1;
//!         Ok(())
//!     })?;
//!
//!     nonce.open(&mut |bytes: &[u8]| {
//!         assert_eq!(bytes[0], 1);
//!         Ok(())
//!     })?;
//!
//!     // Zeroed and released; dropping would do the same.
//!     nonce.free()
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(unix)]
mod page_allocator;

mod enums;
mod error;
mod portable_allocator;
mod region;
mod secure_buffer;
mod support;
mod traits;

pub mod memory;

#[cfg(unix)]
pub use page_allocator::UnixPageAllocator;

pub use enums::Protection;
pub use error::{BufferError, PageError};
pub use portable_allocator::PortableAllocator;
pub use region::Region;
pub use secure_buffer::SecureBuffer;
pub use traits::{Buffer, PageAllocator};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

/// Allocator used by [`SecureBuffer::allocate`].
#[cfg(unix)]
pub type DefaultAllocator = UnixPageAllocator;

/// Allocator used by [`SecureBuffer::allocate`].
#[cfg(not(unix))]
pub type DefaultAllocator = PortableAllocator;
