// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! bulwark_guard - One-time process initialization
//!
//! Every public entry point in the bulwark crates calls [`ensure_ready()`]
//! before doing any work. The first call performs the process-wide setup:
//!
//! - Caches the system page size used by the guard-page allocator.
//! - With the `hardening` feature, disables core dumps and ptrace attachment
//!   via `prctl(PR_SET_DUMPABLE, 0)` and `setrlimit(RLIMIT_CORE, 0)`.
//!
//! Uses a spin lock so that exactly one thread performs the initialization
//! while concurrent callers wait for it to complete. After that, every call
//! is a single acquire load.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]


use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// Page size assumed when the platform cannot report one.
pub const FALLBACK_PAGE_SIZE: usize = 4096;

/// Result of the process hardening step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpProtection {
    /// Whether `prctl(PR_SET_DUMPABLE, 0)` succeeded.
    ///
    /// Blocks ptrace attachment and core dumps. Always `false` without the
    /// `hardening` feature or outside Linux.
    pub prctl_succeeded: bool,

    /// Whether `setrlimit(RLIMIT_CORE, 0)` succeeded.
    ///
    /// Always `false` without the `hardening` feature or outside Linux.
    pub rlimit_succeeded: bool,
}

impl DumpProtection {
    /// Returns true if at least one hardening measure is active.
    pub fn is_protected(&self) -> bool {
        self.prctl_succeeded | self.rlimit_succeeded
    }
}

/// Process state established by [`ensure_ready()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyState {
    /// System page size in bytes. Always a power of two.
    pub page_size: usize,

    /// Outcome of the optional process hardening.
    pub dump_protection: DumpProtection,
}

/// Initialization state: not yet attempted
const STATE_UNINIT: u8 = 0;
/// Initialization state: in progress by another thread
const STATE_IN_PROGRESS: u8 = 1;
/// Initialization state: completed
const STATE_DONE: u8 = 2;

static INIT_STATE: AtomicU8 = AtomicU8::new(STATE_UNINIT);
static PAGE_SIZE: AtomicUsize = AtomicUsize::new(0);
static PRCTL_SUCCEEDED: AtomicU8 = AtomicU8::new(0);
static RLIMIT_SUCCEEDED: AtomicU8 = AtomicU8::new(0);

/// Ensures the one-time process initialization has run and returns its result.
///
/// Thread-safe and idempotent: if multiple threads call simultaneously, only
/// one performs the initialization while the others spin-wait. Subsequent
/// calls return the cached state without side effects.
///
/// # Example
///
/// ```
/// use bulwark_guard::ensure_ready;
///
/// let state = ensure_ready();
/// assert!(state.page_size.is_power_of_two());
/// assert_eq!(state, ensure_ready());
/// ```
#[inline]
pub fn ensure_ready() -> ReadyState {
    // Fast path: already initialized
    if INIT_STATE.load(Ordering::Acquire) == STATE_DONE {
        return cached_state();
    }

    init_slow();
    cached_state()
}

/// Returns true once [`ensure_ready()`] has completed in this process.
#[inline]
pub fn is_ready() -> bool {
    INIT_STATE.load(Ordering::Acquire) == STATE_DONE
}

/// Returns the cached system page size, initializing the process if needed.
#[inline]
pub fn page_size() -> usize {
    ensure_ready().page_size
}

fn cached_state() -> ReadyState {
    ReadyState {
        page_size: PAGE_SIZE.load(Ordering::Relaxed),
        dump_protection: DumpProtection {
            prctl_succeeded: PRCTL_SUCCEEDED.load(Ordering::Relaxed) != 0,
            rlimit_succeeded: RLIMIT_SUCCEEDED.load(Ordering::Relaxed) != 0,
        },
    }
}

#[cold]
#[inline(never)]
fn init_slow() {
    // Try to become the initializer
    match INIT_STATE.compare_exchange(
        STATE_UNINIT,
        STATE_IN_PROGRESS,
        Ordering::Acquire,
        Ordering::Relaxed,
    ) {
        Ok(_) => {
            let page_size = query_page_size();
            let (prctl_ok, rlimit_ok) = harden_process();

            PAGE_SIZE.store(page_size, Ordering::Relaxed);
            PRCTL_SUCCEEDED.store(prctl_ok as u8, Ordering::Relaxed);
            RLIMIT_SUCCEEDED.store(rlimit_ok as u8, Ordering::Relaxed);

            log::debug!(
                "bulwark initialized: page_size={page_size}, prctl={prctl_ok}, rlimit={rlimit_ok}"
            );

            // Keep the window open long enough for racing threads to reach
            // the spin loop in tests.
            #[cfg(test)]
            std::thread::sleep(std::time::Duration::from_millis(50));
            INIT_STATE.store(STATE_DONE, Ordering::Release);
        }
        Err(_) => {
            // Another thread is initializing or already done, spin until done
            while INIT_STATE.load(Ordering::Acquire) != STATE_DONE {
                core::hint::spin_loop();
            }
        }
    }
}

#[cfg(unix)]
fn query_page_size() -> usize {
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

    if size > 0 && (size as usize).is_power_of_two() {
        size as usize
    } else {
        log::warn!("sysconf(_SC_PAGESIZE) returned {size}, assuming {FALLBACK_PAGE_SIZE}");
        FALLBACK_PAGE_SIZE
    }
}

#[cfg(not(unix))]
fn query_page_size() -> usize {
    FALLBACK_PAGE_SIZE
}

#[cfg(all(target_os = "linux", feature = "hardening"))]
fn harden_process() -> (bool, bool) {
    let prctl_ok = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0, 0, 0, 0) == 0 };

    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    let rlimit_ok = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) == 0 };

    if !(prctl_ok | rlimit_ok) {
        log::warn!("process hardening refused: core dumps remain possible");
    }

    (prctl_ok, rlimit_ok)
}

#[cfg(not(all(target_os = "linux", feature = "hardening")))]
fn harden_process() -> (bool, bool) {
    (false, false)
}
