// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A minimal dynamic array built on an exclusively owned heap buffer.
//!
//! Two layers, leaves first:
//!
//! - [`buffer`]: [`OwningBuffer<T>`], the single owner of zero or one heap
//!   block. Not `Clone`; transfers leave the source without a block.
//! - [`array`]: [`DynamicArray<T>`], a logical length over an
//!   `OwningBuffer` whose extent is the capacity. Growth doubles the
//!   capacity and builds the replacement buffer before adopting it.
//!
//! # Quick Start
//!
//! ```rust
//! use ferrovec::{DynamicArray, dynamic_array, reserve};
//!
//! let mut array = DynamicArray::with_reserved(reserve(2));
//! array.push_back(1);
//! array.push_back(2);
//! array.push_back(3);
//! assert_eq!(array.capacity(), 4);
//!
//! array.insert(0, 0);
//! assert_eq!(array, dynamic_array![0, 1, 2, 3]);
//!
//! let tail: Vec<_> = array.into_iter().skip(2).collect();
//! assert_eq!(tail, [2, 3]);
//! ```
//!
//! # Features
//!
//! - `test_utils`: exposes `DynamicArrayBehaviour` for injecting growth
//!   failures into tests.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

/// The owning buffer layer.
pub mod buffer {
    pub use ferrovec_buffer::*;
}

/// The dynamic array layer.
pub mod array {
    pub use ferrovec_array::*;
}

pub use ferrovec_array::{
    DynamicArray, DynamicArrayError, IntoIter, ReserveRequest, dynamic_array, reserve,
};
pub use ferrovec_buffer::{BufferError, OwningBuffer};

#[cfg(feature = "test_utils")]
pub use ferrovec_array::DynamicArrayBehaviour;
