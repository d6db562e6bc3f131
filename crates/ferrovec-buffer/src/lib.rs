// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusively owned heap blocks.
//!
//! [`OwningBuffer<T>`] holds zero or one heap-allocated contiguous block of
//! `T` slots. Ownership is exclusive: the type is not `Clone`, and every
//! transfer (`take`, [`swap_with`](OwningBuffer::swap_with),
//! [`release`](OwningBuffer::release)) leaves the source with no block.
//! The block is freed exactly once, when its current owner is dropped.
//!
//! # Example
//!
//! ```rust
//! use ferrovec_buffer::{BufferError, OwningBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut a = OwningBuffer::<u32>::try_with_len(4)?;
//!     let mut b = OwningBuffer::<u32>::new();
//!
//!     a[0] = 42;
//!     assert!(a.is_allocated());
//!     assert!(!b.is_allocated());
//!
//!     a.swap_with(&mut b);
//!
//!     assert!(!a.is_allocated());
//!     assert_eq!(b[0], 42);
//!     assert_eq!(b.len(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Zero-length requests
//!
//! A zero-length request never allocates: the buffer holds no block, the
//! same state as [`OwningBuffer::new`]. "Allocated but empty" is never
//! produced.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod owning_buffer;

#[cfg(test)]
mod tests;

pub use error::BufferError;
pub use owning_buffer::OwningBuffer;
