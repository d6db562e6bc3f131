// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use ferrovec_array::{DynamicArray, reserve};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench array
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs DynamicArray
// =============================================================================

fn bench_push_back_from_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_from_empty");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..s {
                    array.push_back(i as u64);
                }
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_push_back_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_reserved");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            let mut array = DynamicArray::with_reserved(reserve(s));
            b.iter(|| {
                array.clear();
                for i in 0..s {
                    array.push_back(i as u64);
                }
                black_box(&array);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..s {
                    array.insert(0, i as u64);
                }
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<Vec<_>>(),
                |mut vec| {
                    while !vec.is_empty() {
                        black_box(vec.remove(0));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<DynamicArray<_>>(),
                |mut array| {
                    while !array.is_empty() {
                        black_box(array.erase(0));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_grow_shrink");
    configure_group(&mut group);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec: Vec<u64> = Vec::new();
            b.iter(|| {
                vec.resize(s, 0);
                vec.truncate(s / 2);
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            let mut array: DynamicArray<u64> = DynamicArray::new();
            b.iter(|| {
                array.resize(s);
                array.resize(s / 2);
                black_box(&array);
            });
        });
    }

    group.finish();
}

criterion_group!(
    array_benches,
    bench_push_back_from_empty,
    bench_push_back_reserved,
    bench_insert_front,
    bench_erase_front,
    bench_resize
);

criterion_main!(array_benches);
