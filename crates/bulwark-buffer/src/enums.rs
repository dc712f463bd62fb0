// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Access permitted on a buffer's data pages.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Protection {
    /// Readable and writable. Initial state of every buffer.
    ReadWrite,
    /// Readable only. Writes through the OS mapping fault.
    ReadOnly,
}
