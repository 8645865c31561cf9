//! Walks a `RecyclingPool` through a full draw cycle and a recycle, once with duplicates allowed
//! and once with duplicates rejected, printing the drawn values and the counts along the way.

use recycling_pool::{DuplicatePolicy, RecyclingPool};

fn main() {
    println!("=== With duplicates ===");
    println!();
    run(DuplicatePolicy::Allow);

    println!("=== Without duplicates ===");
    println!();
    run(DuplicatePolicy::Reject);
}

fn run(duplicate_policy: DuplicatePolicy) {
    let duplicates_allowed = duplicate_policy == DuplicatePolicy::Allow;
    let evens = vec![2, 4, 6, 8, 10];

    let pool = RecyclingPool::builder()
        .duplicate_policy(duplicate_policy)
        .build();

    pool.add(-1);
    pool.add_all(evens.iter().copied());
    // Rejected entirely if duplicates are not allowed.
    pool.add_all(evens.iter().copied());
    // 100, 110, ..., 190
    pool.add_range(100, 10, 10);

    let mut expected_total = if duplicates_allowed { 21 } else { 16 };
    assert_eq!(pool.count_total(), expected_total);
    assert_eq!(pool.count_remaining(), expected_total);
    println!("Pool has {expected_total} total/remaining values");

    print_draws(&pool, expected_total);
    print_counts(&pool);
    assert_eq!(pool.count_remaining(), 0);

    println!();
    println!("Adding 5 identical values...");

    let added = pool.add_range(999, 5, 0);
    assert_eq!(added, if duplicates_allowed { 5 } else { 1 });
    expected_total += added;

    assert_eq!(pool.count_total(), expected_total);
    assert_eq!(pool.count_remaining(), added);
    print_counts(&pool);

    print_draws(&pool, added);
    print_counts(&pool);
    assert_eq!(pool.count_remaining(), 0);

    println!();
    println!("Drawing one value to trigger a recycle...");

    let value = pool.get().expect("pool is not empty");
    println!("Drew {value}");
    print_counts(&pool);
    assert_eq!(pool.count_total(), expected_total);
    assert_eq!(pool.count_remaining(), expected_total - 1);

    println!();
}

fn print_draws(pool: &RecyclingPool<i32>, count: usize) {
    let drawn = pool.get_many(count).expect("pool is not empty");
    for value in drawn {
        print!("{value:5}");
    }
    println!();
}

fn print_counts(pool: &RecyclingPool<i32>) {
    println!(
        "Pool has {} total and {} remaining values",
        pool.count_total(),
        pool.count_remaining()
    );
}
