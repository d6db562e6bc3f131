// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`DynamicArray`](crate::DynamicArray) from a list of elements
/// or from a value and a length.
///
/// ```rust
/// use ferrovec_array::dynamic_array;
///
/// let listed = dynamic_array![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
/// assert_eq!(listed.capacity(), 3);
///
/// let filled = dynamic_array![7u8; 3];
/// assert_eq!(filled, [7, 7, 7]);
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::DynamicArray::from_elem($len, $value)
    };
    ($($element:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($element),+])
    };
}
