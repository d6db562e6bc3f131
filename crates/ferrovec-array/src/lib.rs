// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array over an exclusively owned buffer.
//!
//! [`DynamicArray<T>`] keeps a logical length on top of an
//! [`OwningBuffer<T>`](ferrovec_buffer::OwningBuffer) whose extent is the
//! capacity. Appends double the capacity when full (0 → 1 → 2 → 4 → ...),
//! so a run of `n` appends costs O(n) in total.
//!
//! # Core Guarantees
//!
//! - **`len <= capacity`** at all times; `[0, len)` are the elements.
//! - **No partial mutation on failure**: every growth builds the complete
//!   replacement buffer before swapping it in. The `try_*` operations
//!   report allocation failure as [`DynamicArrayError::Buffer`]; their
//!   infallible counterparts treat it as fatal, like `Vec`.
//! - **Vacated slots are released**: `pop_back`, `erase`, `clear` and
//!   shrinking `resize` drop the removed values immediately, leaving
//!   `T::default()` in the spare slot.
//! - **Checked and unchecked access**: [`DynamicArray::at`] returns
//!   [`DynamicArrayError::OutOfRange`], indexing panics, and
//!   [`DynamicArray::get_unchecked`] is `unsafe`.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use ferrovec_array::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::<u32>::new();
//!
//!     for i in 1..=3 {
//!         array.try_push_back(i)?;
//!     }
//!     assert_eq!(array.len(), 3);
//!     assert_eq!(array.capacity(), 4);
//!
//!     array.try_insert(1, 9)?;
//!     assert_eq!(array, [1, 9, 2, 3]);
//!
//!     assert_eq!(*array.at(1)?, 9);
//!     assert!(array.at(4).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Construction
//!
//! ```rust
//! use ferrovec_array::{DynamicArray, dynamic_array, reserve};
//!
//! let sized = DynamicArray::<i32>::with_len(2);
//! assert_eq!(sized, [0, 0]);
//!
//! let mut filled = dynamic_array![7; 3];
//! filled.resize(5);
//! assert_eq!(filled, [7, 7, 7, 0, 0]);
//!
//! let reserved = DynamicArray::<i32>::with_reserved(reserve(8));
//! assert!(reserved.is_empty());
//! assert_eq!(reserved.capacity(), 8);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject growth failures:
//!
//! ```toml
//! [dev-dependencies]
//! ferrovec-array = { version = "*", features = ["test_utils"] }
//! ```
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use ferrovec_array::{DynamicArray, DynamicArrayBehaviour};
//!
//!     #[test]
//!     fn test_handles_growth_failure() {
//!         let mut array = DynamicArray::<u8>::new();
//!         array.change_behaviour(DynamicArrayBehaviour::FailAtGrow);
//!
//!         assert!(array.try_push_back(1).is_err());
//!         assert!(array.is_empty());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod dynamic_array;
mod error;
mod into_iter;
mod macros;
mod reserve_request;

#[cfg(test)]
mod tests;

pub use dynamic_array::DynamicArray;
pub use error::DynamicArrayError;
pub use into_iter::IntoIter;
pub use reserve_request::{ReserveRequest, reserve};

#[cfg(any(test, feature = "test_utils"))]
pub use dynamic_array::DynamicArrayBehaviour;
