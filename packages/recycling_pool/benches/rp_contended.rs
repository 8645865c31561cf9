//! Benchmarks `RecyclingPool` draws when several threads share one pool.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::sync::Barrier;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{Criterion, criterion_group, criterion_main};
use recycling_pool::RecyclingPool;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const THREAD_COUNTS: &[usize] = &[1, 2, 4, 8];

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("rp_contended");

    for &threads in THREAD_COUNTS {
        group.bench_function(format!("get_{threads}_threads"), |b| {
            let pool = RecyclingPool::builder().seed(1).build();
            pool.add_range(0, 10_000, 1_u64);

            b.iter_custom(|iters| {
                let barrier = Barrier::new(threads);

                thread::scope(|s| {
                    let workers = (0..threads)
                        .map(|_| {
                            s.spawn(|| {
                                barrier.wait();

                                let start = Instant::now();
                                for _ in 0..iters {
                                    black_box(pool.get().unwrap());
                                }
                                start.elapsed()
                            })
                        })
                        .collect::<Vec<_>>();

                    // Report the mean time per thread so that results for different thread
                    // counts remain comparable per operation.
                    let total: Duration = workers
                        .into_iter()
                        .map(|worker| worker.join().unwrap())
                        .sum();

                    total / u32::try_from(threads).unwrap()
                })
            });
        });
    }

    group.finish();
}
