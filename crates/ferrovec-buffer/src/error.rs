// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ferrovec-buffer.

use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur when allocating a block.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The requested extent does not fit in the address space.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator could not provide the block.
    #[error("allocation of {requested} elements failed")]
    AllocationFailed {
        /// Number of `T` slots requested.
        requested: usize,
    },
}

impl BufferError {
    /// Treats the error as fatal for a block of `T`.
    ///
    /// `AllocationFailed` is routed to [`alloc::alloc::handle_alloc_error`]
    /// with the layout that could not be satisfied; `CapacityOverflow`
    /// panics, matching what `Vec` does on the same conditions.
    #[cold]
    #[inline(never)]
    pub fn fatal<T>(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::AllocationFailed { requested } => match Layout::array::<T>(requested) {
                Ok(layout) => alloc::alloc::handle_alloc_error(layout),
                Err(_) => panic!("capacity overflow"),
            },
        }
    }
}
