// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DynamicArray, ReserveRequest, reserve};

#[test]
fn test_reserve_builds_request() {
    assert_eq!(reserve(12), ReserveRequest::new(12));
    assert_eq!(reserve(12).capacity(), 12);
}

#[test]
fn test_from_request() {
    let array: DynamicArray<String> = reserve(3).into();

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 3);
}

#[test]
fn test_zero_request_allocates_nothing() {
    let array = DynamicArray::<u8>::with_reserved(reserve(0));

    assert_eq!(array.capacity(), 0);
}
