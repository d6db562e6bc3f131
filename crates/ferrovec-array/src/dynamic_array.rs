// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice::SliceIndex;

use ferrovec_buffer::{BufferError, OwningBuffer};

use crate::error::DynamicArrayError;
use crate::into_iter::IntoIter;
use crate::reserve_request::ReserveRequest;

/// Error injection for testing growth failure paths.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour (no error injection).
    #[default]
    None,
    /// Every growth fails with [`BufferError::AllocationFailed`].
    FailAtGrow,
}

/// A growable contiguous array backed by a single [`OwningBuffer`].
///
/// The array tracks a logical length (`len`) on top of the buffer's
/// physical extent (`capacity`). Slots in `[0, len)` are the elements;
/// slots in `[len, capacity)` are spare and always hold `T::default()`.
///
/// Growth doubles the capacity (0 → 1 → 2 → 4 → ...). A growth builds the
/// complete replacement buffer before swapping it in, so a failed growth
/// leaves the array untouched.
///
/// # Example
///
/// ```rust
/// use ferrovec_array::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push_back(1);
/// array.push_back(2);
/// array.push_back(3);
/// assert_eq!(array.capacity(), 4);
///
/// array.insert(1, 9);
/// assert_eq!(array, [1, 9, 2, 3]);
///
/// assert_eq!(array.erase(0), 1);
/// assert_eq!(array.pop_back(), Some(3));
/// assert_eq!(array, [9, 2]);
/// ```
pub struct DynamicArray<T> {
    len: usize,
    capacity: usize,
    buffer: OwningBuffer<T>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            len: 0,
            capacity: 0,
            buffer: OwningBuffer::new(),
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::None,
        }
    }

    fn from_parts(len: usize, buffer: OwningBuffer<T>) -> Self {
        let array = Self {
            len,
            capacity: buffer.len(),
            buffer,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::None,
        };
        array.debug_assert_invariants();

        array
    }

    #[inline(always)]
    fn debug_assert_invariants(&self) {
        debug_assert!(self.len <= self.capacity);
        debug_assert_eq!(self.buffer.len(), self.capacity);
    }

    /// Changes the error injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.len]
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buffer.as_mut_slice()[..len]
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, DynamicArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(DynamicArrayError::OutOfRange { index, len })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynamicArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DynamicArrayError::OutOfRange { index, len })
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be below [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: index < len <= capacity == buffer extent.
        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Returns the element at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be below [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: index < len <= capacity == buffer extent.
        unsafe { self.buffer.get_unchecked_mut(index) }
    }

    /// Exchanges contents (length, capacity and buffer) with `other`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.len, &mut other.len);
        mem::swap(&mut self.capacity, &mut other.capacity);
        self.buffer.swap_with(&mut other.buffer);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap_with(&mut taken);

        taken
    }

    /// Capacity after one doubling step (0 grows to 1).
    fn doubled_capacity(&self) -> Result<usize, BufferError> {
        match self.capacity {
            0 => Ok(1),
            capacity => capacity
                .checked_mul(2)
                .ok_or(BufferError::CapacityOverflow),
        }
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates an array of `len` default elements; `capacity() == len`.
    ///
    /// # Panics
    ///
    /// Allocation failure is fatal, see [`BufferError::fatal`].
    pub fn with_len(len: usize) -> Self {
        Self::from_parts(len, OwningBuffer::with_len(len))
    }

    /// Creates an array of `len` copies of `value`; `capacity() == len`.
    ///
    /// # Panics
    ///
    /// Allocation failure is fatal, see [`BufferError::fatal`].
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut buffer = OwningBuffer::with_len(len);
        buffer.as_mut_slice().fill(value);

        Self::from_parts(len, buffer)
    }

    /// Creates an empty array with exactly `request.capacity()` slots.
    ///
    /// # Panics
    ///
    /// Allocation failure is fatal, see [`BufferError::fatal`].
    pub fn with_reserved(request: ReserveRequest) -> Self {
        Self::from_parts(0, OwningBuffer::with_len(request.capacity()))
    }

    fn try_allocate(&self, capacity: usize) -> Result<OwningBuffer<T>, DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour == DynamicArrayBehaviour::FailAtGrow {
            return Err(BufferError::AllocationFailed {
                requested: capacity,
            }
            .into());
        }

        Ok(OwningBuffer::try_with_len(capacity)?)
    }

    /// Moves every element into a fresh buffer of `new_capacity` slots and
    /// adopts it. Elements at `[gap_at, len)` land one slot to the right,
    /// leaving a default slot at `gap_at`; with `gap_at == len` the order
    /// and positions are unchanged.
    ///
    /// Nothing in `self` changes unless the allocation succeeds.
    #[cold]
    #[inline(never)]
    fn try_relocate(&mut self, new_capacity: usize, gap_at: usize) -> Result<(), DynamicArrayError> {
        debug_assert!(gap_at <= self.len);
        debug_assert!(new_capacity > self.len);

        let mut replacement = self.try_allocate(new_capacity)?;
        let len = self.len;
        let (head, tail) = self.buffer.as_mut_slice()[..len].split_at_mut(gap_at);
        let slots = replacement.as_mut_slice();

        slots[..gap_at].swap_with_slice(head);
        slots[gap_at + 1..len + 1].swap_with_slice(tail);

        self.buffer.swap_with(&mut replacement);
        self.capacity = new_capacity;
        self.debug_assert_invariants();

        Ok(())
    }

    /// Ensures room for at least `new_capacity` elements.
    ///
    /// Allocates exactly `new_capacity` slots when growing; never shrinks.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Buffer`] if the new buffer cannot be allocated.
    /// The array is unchanged on error.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), DynamicArrayError> {
        if new_capacity <= self.capacity {
            return Ok(());
        }

        self.try_relocate(new_capacity, self.len)
    }

    /// Ensures room for at least `new_capacity` elements.
    ///
    /// # Panics
    ///
    /// Allocation failure is fatal, see [`BufferError::fatal`].
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(e) = self.try_reserve(new_capacity) {
            e.fatal::<T>();
        }
    }

    /// Sets the length to `new_len`.
    ///
    /// Shrinking resets the dropped tail to `T::default()` and keeps the
    /// capacity. Growing fills new elements with `T::default()`; past the
    /// current capacity it reallocates to `max(new_len, 2 * capacity)`.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Buffer`] if the new buffer cannot be allocated.
    /// The array is unchanged on error.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), DynamicArrayError> {
        match new_len.cmp(&self.len) {
            Ordering::Equal => return Ok(()),
            Ordering::Less => self.reset_slots(new_len, self.len),
            Ordering::Greater if new_len <= self.capacity => self.reset_slots(self.len, new_len),
            Ordering::Greater => {
                let new_capacity = self
                    .capacity
                    .checked_mul(2)
                    .map_or(new_len, |doubled| doubled.max(new_len));
                self.try_relocate(new_capacity, self.len)?;
            }
        }

        self.len = new_len;
        self.debug_assert_invariants();

        Ok(())
    }

    /// Sets the length to `new_len`, see [`try_resize`](Self::try_resize).
    ///
    /// # Panics
    ///
    /// Allocation failure is fatal, see [`BufferError::fatal`].
    pub fn resize(&mut self, new_len: usize) {
        if let Err(e) = self.try_resize(new_len) {
            e.fatal::<T>();
        }
    }

    fn reset_slots(&mut self, from: usize, to: usize) {
        self.buffer.as_mut_slice()[from..to]
            .iter_mut()
            .for_each(|slot| *slot = T::default());
    }

    /// Removes all elements, keeping the capacity.
    ///
    /// Every removed element is dropped (its slot reset to `T::default()`).
    pub fn clear(&mut self) {
        self.reset_slots(0, self.len);
        self.len = 0;
    }

    /// Appends `value`, doubling the capacity when full.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Buffer`] if growth fails. The array is unchanged
    /// and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), DynamicArrayError> {
        if self.len == self.capacity {
            let new_capacity = self.doubled_capacity()?;
            self.try_relocate(new_capacity, self.len)?;
        }

        self.buffer[self.len] = value;
        self.len += 1;
        self.debug_assert_invariants();

        Ok(())
    }

    /// Appends `value`, doubling the capacity when full.
    ///
    /// # Panics
    ///
    /// Allocation failure is fatal, see [`BufferError::fatal`].
    pub fn push_back(&mut self, value: T) {
        if let Err(e) = self.try_push_back(value) {
            e.fatal::<T>();
        }
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends. When the array is full the capacity doubles
    /// and the shift happens while moving into the new buffer. Returns the
    /// inserted element.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::OutOfRange`] if `index > len()`.
    /// - [`DynamicArrayError::Buffer`] if growth fails.
    ///
    /// The array is unchanged on error.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, DynamicArrayError> {
        if index > self.len {
            return Err(DynamicArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }

        if self.len == self.capacity {
            let new_capacity = self.doubled_capacity()?;
            self.try_relocate(new_capacity, index)?;
        } else {
            self.buffer.as_mut_slice()[index..=self.len].rotate_right(1);
        }

        self.len += 1;
        self.debug_assert_invariants();

        let slot = &mut self.buffer[index];
        *slot = value;

        Ok(slot)
    }

    /// Inserts `value` at `index`, see [`try_insert`](Self::try_insert).
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`. Allocation failure is fatal, see
    /// [`BufferError::fatal`].
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        match self.try_insert(index, value) {
            Ok(slot) => slot,
            Err(e) => e.fatal::<T>(),
        }
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        Some(mem::take(&mut self.buffer[self.len]))
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot left. The element now at `index` is the one that followed
    /// the removed element.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    pub fn try_erase(&mut self, index: usize) -> Result<T, DynamicArrayError> {
        if index >= self.len {
            return Err(DynamicArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }

        self.buffer.as_mut_slice()[index..self.len].rotate_left(1);
        self.len -= 1;

        Ok(mem::take(&mut self.buffer[self.len]))
    }

    /// Removes and returns the element at `index`, see [`try_erase`](Self::try_erase).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> T {
        match self.try_erase(index) {
            Ok(value) => value,
            Err(e) => e.fatal::<T>(),
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut buffer = OwningBuffer::with_len(self.capacity);
        buffer.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());

        Self::from_parts(self.len, buffer)
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from(elements.into_boxed_slice())
    }
}

impl<T> From<Box<[T]>> for DynamicArray<T> {
    fn from(elements: Box<[T]>) -> Self {
        let len = elements.len();

        Self::from_parts(len, OwningBuffer::from_boxed(elements))
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: Default> From<ReserveRequest> for DynamicArray<T> {
    fn from(request: ReserveRequest) -> Self {
        Self::with_reserved(request)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut elements = self.buffer.into_boxed().map(<[T]>::into_vec).unwrap_or_default();
        elements.truncate(self.len);

        IntoIter::new(elements)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.len == other.len && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U> PartialEq<Vec<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
