// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! UnixPageAllocator - mmap-backed regions fenced by guard pages.
//!
//! Layout of every reservation:
//!
//! ```text
//! +------------+---------------------------------+------------+
//! | guard page |  data pages (RW, lockable)      | guard page |
//! | PROT_NONE  |  ........[ data, right-aligned ]| PROT_NONE  |
//! +------------+---------------------------------+------------+
//! ```
//!
//! The data ends flush against the trailing guard page, so the first byte
//! past the logical end faults. Underruns hit the slack and then the
//! leading guard page.

use core::ptr::{self, NonNull};

use crate::enums::Protection;
use crate::error::PageError;
use crate::region::Region;
use crate::traits::PageAllocator;

/// Guard-paged allocator over `mmap`/`mlock`/`mprotect`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixPageAllocator {}

impl UnixPageAllocator {
    fn layout(len: usize, page_size: usize) -> Option<(usize, usize)> {
        let pages_len = len.checked_next_multiple_of(page_size)?;
        let mapped_len = pages_len.checked_add(2 * page_size)?;

        Some((pages_len, mapped_len))
    }

    #[cfg(target_os = "linux")]
    fn exclude_from_dumps(base: *mut u8, mapped_len: usize) {
        let failed =
            unsafe { libc::madvise(base as *mut _, mapped_len, libc::MADV_DONTDUMP) } != 0;

        if failed {
            log::warn!("{}: region stays visible to core dumps", PageError::Madvise);
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn exclude_from_dumps(_base: *mut u8, _mapped_len: usize) {}
}

impl PageAllocator for UnixPageAllocator {
    fn allocate(&self, len: usize) -> Result<Region, PageError> {
        let page_size = bulwark_guard::page_size();
        let (pages_len, mapped_len) = Self::layout(len, page_size).ok_or(PageError::Create)?;

        // Reserve everything inaccessible, then open up the data pages.
        let base = unsafe {
            libc::mmap(
                ptr::null_mut(),
                mapped_len,
                libc::PROT_NONE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if base == libc::MAP_FAILED {
            return Err(PageError::Create);
        }

        let base = base as *mut u8;
        let pages = unsafe { base.add(page_size) };

        let failed = unsafe {
            libc::mprotect(
                pages as *mut _,
                pages_len,
                libc::PROT_READ | libc::PROT_WRITE,
            )
        } != 0;

        if failed {
            unsafe { libc::munmap(base as *mut _, mapped_len) };
            return Err(PageError::Unprotect);
        }

        Self::exclude_from_dumps(base, mapped_len);

        let base = NonNull::new(base).ok_or(PageError::Create)?;

        log::debug!("mapped {len} bytes in {mapped_len} bytes with guard pages");

        Ok(unsafe {
            Region::from_raw_parts(
                base,
                mapped_len,
                page_size,
                pages_len,
                page_size + pages_len - len,
                len,
            )
        })
    }

    fn lock(&self, region: &Region) -> Result<(), PageError> {
        let failed =
            unsafe { libc::mlock(region.pages_ptr() as *const _, region.pages_len()) } != 0;

        if failed {
            return Err(PageError::Lock);
        }

        Ok(())
    }

    fn unlock(&self, region: &Region) -> Result<(), PageError> {
        let failed =
            unsafe { libc::munlock(region.pages_ptr() as *const _, region.pages_len()) } != 0;

        if failed {
            return Err(PageError::Unlock);
        }

        Ok(())
    }

    fn protect(&self, region: &Region, protection: Protection) -> Result<(), PageError> {
        let (prot, error) = match protection {
            Protection::ReadOnly => (libc::PROT_READ, PageError::Protect),
            Protection::ReadWrite => (libc::PROT_READ | libc::PROT_WRITE, PageError::Unprotect),
        };

        let failed =
            unsafe { libc::mprotect(region.pages_ptr() as *mut _, region.pages_len(), prot) } != 0;

        if failed {
            return Err(error);
        }

        Ok(())
    }

    fn free(&self, region: Region) {
        let failed =
            unsafe { libc::munmap(region.base().as_ptr() as *mut _, region.mapped_len()) } != 0;

        if failed {
            log::error!("munmap failed: {} bytes stay mapped", region.mapped_len());
        }
    }
}
