// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ferrovec-array.

use ferrovec_buffer::BufferError;
use thiserror::Error;

/// Errors returned by the checked `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// The index is outside the valid range for the operation.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The array length at the time of the call.
        len: usize,
    },

    /// Growing the backing buffer failed.
    #[error("BufferError: {0}")]
    Buffer(#[from] BufferError),
}

impl DynamicArrayError {
    #[cold]
    #[inline(never)]
    pub(crate) fn fatal<T>(self) -> ! {
        match self {
            Self::OutOfRange { index, len } => {
                panic!("index out of range: the len is {len} but the index is {index}")
            }
            Self::Buffer(e) => e.fatal::<T>(),
        }
    }
}
