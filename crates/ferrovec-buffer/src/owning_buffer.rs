// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::ops::{Index, IndexMut};
use core::ptr::{self, NonNull};

use crate::error::BufferError;

/// Exclusive owner of zero or one heap block of `T` slots.
///
/// Every slot of an owned block always holds a live `T`: fresh blocks are
/// filled with `T::default()`. The block's extent is fixed at allocation;
/// callers that track a logical length on top of it (such as a growable
/// array) keep their own bookkeeping.
///
/// # Example
///
/// ```rust
/// use ferrovec_buffer::OwningBuffer;
///
/// let mut buffer = OwningBuffer::<u8>::with_len(3);
/// buffer[1] = 7;
///
/// let moved = buffer.take();
/// assert!(!buffer.is_allocated());
/// assert_eq!(moved.as_slice(), &[0, 7, 0]);
/// ```
pub struct OwningBuffer<T> {
    block: Option<Box<[T]>>,
}

impl<T> OwningBuffer<T> {
    /// Creates a buffer that owns no block.
    #[inline]
    pub const fn new() -> Self {
        Self { block: None }
    }

    /// Allocates a block of `len` default-constructed slots.
    ///
    /// `len == 0` yields a buffer with no block.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `len` slots of `T` exceed the
    ///   maximum allocation size.
    /// - [`BufferError::AllocationFailed`] if the allocator refuses the request.
    pub fn try_with_len(len: usize) -> Result<Self, BufferError>
    where
        T: Default,
    {
        if len == 0 {
            return Ok(Self::new());
        }

        Layout::array::<T>(len).map_err(|_| BufferError::CapacityOverflow)?;

        let mut block = Vec::new();
        block
            .try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailed { requested: len })?;
        block.resize_with(len, T::default);

        Ok(Self::from_boxed(block.into_boxed_slice()))
    }

    /// Allocates a block of `len` default-constructed slots.
    ///
    /// # Panics
    ///
    /// Allocation failure is fatal, see [`BufferError::fatal`].
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        match Self::try_with_len(len) {
            Ok(buffer) => buffer,
            Err(e) => e.fatal::<T>(),
        }
    }

    /// Takes ownership of an existing boxed block.
    pub fn from_boxed(block: Box<[T]>) -> Self {
        if block.is_empty() {
            return Self::new();
        }

        Self { block: Some(block) }
    }

    /// Takes ownership of a block previously handed out by [`release`](Self::release).
    ///
    /// # Safety
    ///
    /// `raw` must come from [`release`](Self::release) (or equivalently from
    /// `Box::<[T]>::into_raw`) and must not be owned by anything else. After
    /// this call the returned buffer is its only owner.
    pub unsafe fn from_raw(raw: NonNull<[T]>) -> Self {
        // SAFETY: the caller guarantees `raw` is an unowned boxed slice.
        let block = unsafe { Box::from_raw(raw.as_ptr()) };

        Self::from_boxed(block)
    }

    /// Gives up ownership of the block without freeing it.
    ///
    /// The buffer is left with no block. The caller becomes responsible for
    /// the returned block; hand it back through [`from_raw`](Self::from_raw)
    /// to have it freed.
    #[must_use = "dropping the released block leaks it"]
    pub fn release(&mut self) -> Option<NonNull<[T]>> {
        self.block.take().map(|block| NonNull::from(Box::leak(block)))
    }

    /// Consumes the buffer, returning the owned block if there is one.
    pub fn into_boxed(self) -> Option<Box<[T]>> {
        self.block
    }

    /// Returns `true` if a block is owned.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Number of slots in the owned block (0 when no block is owned).
    #[inline]
    pub fn len(&self) -> usize {
        self.block.as_deref().map_or(0, <[T]>::len)
    }

    /// Returns `true` if no slots are owned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Address of the first slot, or null when no block is owned.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block.as_deref().map_or(ptr::null(), <[T]>::as_ptr)
    }

    /// Mutable address of the first slot, or null when no block is owned.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block
            .as_deref_mut()
            .map_or(ptr::null_mut(), <[T]>::as_mut_ptr)
    }

    /// All slots of the owned block.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.block.as_deref().unwrap_or(&[])
    }

    /// All slots of the owned block, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.block.as_deref_mut().unwrap_or(&mut [])
    }

    /// Returns a reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// A block must be owned and `index` must be below its extent.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < self.len()`.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// A block must be owned and `index` must be below its extent.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees `index < self.len()`.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Exchanges owned blocks with `other`. Never allocates, never fails.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.block, &mut other.block);
    }

    /// Moves the block out, leaving `self` with no block.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            block: self.block.take(),
        }
    }
}

impl<T> Default for OwningBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for OwningBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwningBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> core::fmt::Debug for OwningBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OwningBuffer")
            .field("len", &self.len())
            .field("allocated", &self.is_allocated())
            .finish_non_exhaustive()
    }
}
