// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ferrovec::{DynamicArray, DynamicArrayError, OwningBuffer, dynamic_array, reserve};
use ferrovec_test_utils::DropCounter;

#[test]
fn push_insert_erase_pop() {
    let mut array = DynamicArray::new();
    array.push_back(1);
    array.push_back(2);
    array.push_back(3);
    assert_eq!(array, [1, 2, 3]);
    assert_eq!(array.capacity(), 4);

    array.insert(1, 9);
    assert_eq!(array, [1, 9, 2, 3]);

    array.erase(0);
    assert_eq!(array, [9, 2, 3]);

    array.pop_back();
    assert_eq!(array, [9, 2]);
    assert_eq!(array.len(), 2);
}

#[test]
fn sized_with_value_then_resize() {
    let mut array = dynamic_array![7; 3];
    assert_eq!(array.capacity(), 3);

    array.resize(5);

    assert_eq!(array, [7, 7, 7, 0, 0]);
    assert!(array.capacity() >= 5);
}

#[test]
fn checked_access_error_is_recoverable() {
    let array = DynamicArray::<u8>::with_reserved(reserve(4));

    match array.at(0) {
        Err(DynamicArrayError::OutOfRange { index: 0, len: 0 }) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn buffer_release_hands_block_to_array() {
    let mut buffer = OwningBuffer::<u16>::with_len(3);
    buffer[0] = 1;
    buffer[1] = 2;
    buffer[2] = 3;

    let block = buffer.into_boxed().expect("Failed to into_boxed()");
    let mut array = DynamicArray::from(block);
    array.push_back(4);

    assert_eq!(array, [1, 2, 3, 4]);
    assert_eq!(array.capacity(), 6);
}

#[test]
fn nested_arrays_release_everything() {
    let counter = DropCounter::new();

    {
        let mut outer: DynamicArray<DynamicArray<_>> = DynamicArray::new();
        for row in 0..4 {
            let mut inner = DynamicArray::new();
            for column in 0..row {
                inner.push_back(counter.track(row * 10 + column));
            }
            outer.push_back(inner);
        }

        outer.erase(1);
        let moved = outer.take();
        assert!(outer.is_empty());
        assert_eq!(moved.len(), 3);
        assert_eq!(moved[2][2].value(), 32);
    }

    assert_eq!(counter.live(), 0);
}
