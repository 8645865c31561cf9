//! Basic benchmarks for the `recycling_pool` package.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use recycling_pool::{DuplicatePolicy, RawRecyclingPool, RecyclingPool};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = u64;
const POOL_SIZE: TestItem = 10_000;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("rp_fill");

    group.bench_function("empty", |b| {
        b.iter(|| {
            drop(black_box(RawRecyclingPool::<TestItem>::new()));
        });
    });

    group.bench_function("ten_thousand", |b| {
        b.iter(|| {
            let mut pool = RawRecyclingPool::new();
            pool.add_range(0, black_box(10_000), 1_u64);
            pool
        });
    });

    group.bench_function("ten_thousand_dedup", |b| {
        b.iter(|| {
            let mut pool = RawRecyclingPool::builder()
                .duplicate_policy(DuplicatePolicy::Reject)
                .build_raw();
            pool.add_range(0, black_box(10_000), 1_u64);
            pool
        });
    });

    group.finish();

    let mut group = c.benchmark_group("rp_get");

    group.bench_function("raw", |b| {
        let mut pool = RawRecyclingPool::builder().seed(1).build_raw();
        pool.add_range(0, 10_000, 1_u64);

        b.iter(|| black_box(pool.get()));
    });

    group.bench_function("raw_dedup", |b| {
        let mut pool = RawRecyclingPool::builder()
            .duplicate_policy(DuplicatePolicy::Reject)
            .seed(1)
            .build_raw();
        pool.add_range(0, 10_000, 1_u64);

        b.iter(|| black_box(pool.get()));
    });

    group.bench_function("shared_uncontended", |b| {
        let pool = RecyclingPool::builder().seed(1).build();
        pool.add_range(0, 10_000, 1_u64);

        b.iter(|| black_box(pool.get()));
    });

    group.bench_function("full_cycle", |b| {
        let mut pool = RawRecyclingPool::builder().seed(1).build_raw();
        pool.add_range(0, 10_000, 1_u64);

        b.iter(|| {
            for _ in 0..POOL_SIZE {
                black_box(pool.get().unwrap());
            }
        });
    });

    group.finish();
}
