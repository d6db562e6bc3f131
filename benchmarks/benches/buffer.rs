// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OwningBuffer benchmarks: allocation and swap

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ferrovec_buffer::OwningBuffer;

fn bench_with_len(c: &mut Criterion) {
    let mut group = c.benchmark_group("owning_buffer/with_len");

    for len in [32, 4096, 65_536] {
        group.bench_with_input(BenchmarkId::new("OwningBuffer", len), &len, |b, &l| {
            b.iter(|| black_box(OwningBuffer::<u64>::with_len(l)));
        });

        group.bench_with_input(BenchmarkId::new("Box<[u64]>", len), &len, |b, &l| {
            b.iter(|| black_box(vec![0u64; l].into_boxed_slice()));
        });
    }

    group.finish();
}

fn bench_swap_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("owning_buffer/swap_with");

    group.bench_function("4096", |b| {
        let mut left = OwningBuffer::<u64>::with_len(4096);
        let mut right = OwningBuffer::<u64>::with_len(4096);
        b.iter(|| {
            left.swap_with(&mut right);
            black_box(&left);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_with_len, bench_swap_with);
criterion_main!(benches);
