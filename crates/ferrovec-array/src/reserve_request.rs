// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A capacity reservation, consumed by [`DynamicArray::with_reserved`].
///
/// Produced by the [`reserve`] free function so the reserve-only
/// constructor reads distinctly from the sized one:
///
/// ```rust
/// use ferrovec_array::{DynamicArray, reserve};
///
/// let array = DynamicArray::<u64>::with_reserved(reserve(16));
///
/// assert_eq!(array.len(), 0);
/// assert_eq!(array.capacity(), 16);
/// ```
///
/// [`DynamicArray::with_reserved`]: crate::DynamicArray::with_reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    /// Requests `capacity` slots.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested number of slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Builds a [`ReserveRequest`] for `capacity` slots.
#[inline]
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
