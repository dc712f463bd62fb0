// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for bulwark-buffer.

/// Runs `f` in a forked child and returns the signal that killed it, if any.
///
/// Used to observe faults (guard pages, read-only pages) without taking
/// down the test runner.
pub fn killing_signal_in_child(f: impl FnOnce()) -> Option<i32> {
    match unsafe { libc::fork() } {
        -1 => panic!("Failed to fork()"),
        0 => {
            f();
            unsafe { libc::_exit(0) }
        }
        child_pid => {
            let mut status: libc::c_int = 0;
            unsafe {
                libc::waitpid(child_pid, &mut status, 0);
            }

            libc::WIFSIGNALED(status).then(|| libc::WTERMSIG(status))
        }
    }
}

/// True if `signal` is what the platform raises on a page-protection fault.
pub fn is_memory_fault(signal: Option<i32>) -> bool {
    matches!(signal, Some(libc::SIGSEGV) | Some(libc::SIGBUS))
}
