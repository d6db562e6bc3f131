// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ferrovec_test_utils::DropCounter;

use crate::{DynamicArray, dynamic_array};

#[test]
fn test_into_iter_yields_logical_elements() {
    let mut array = dynamic_array![1, 2, 3];
    array.reserve(10);

    let collected: Vec<i32> = array.into_iter().collect();

    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn test_into_iter_empty() {
    let array = DynamicArray::<u8>::new();

    assert_eq!(array.into_iter().next(), None);
}

#[test]
fn test_into_iter_double_ended_and_exact_size() {
    let mut iter = dynamic_array![1, 2, 3, 4].into_iter();

    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[2, 3]);
    assert_eq!(iter.len(), 2);
}

#[test]
fn test_into_iter_partial_consumption_drops_rest() {
    let counter = DropCounter::new();
    let mut array = DynamicArray::new();
    for i in 0..5 {
        array.push_back(counter.track(i));
    }

    let mut iter = array.into_iter();
    let first = iter.next().expect("Failed to next()");
    drop(iter);

    assert_eq!(first.value(), 0);
    assert_eq!(counter.live(), 1);
}

#[test]
fn test_for_loop_over_reference() {
    let array = dynamic_array![1, 2, 3];
    let mut sum = 0;

    for value in &array {
        sum += value;
    }

    assert_eq!(sum, 6);
}
