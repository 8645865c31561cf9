//! Property tests for the `recycling_pool` package.
//!
//! These drive a pool through arbitrary operation sequences and check the invariants that must
//! hold in every reachable state.

use std::collections::HashMap;

use proptest::prelude::*;
use recycling_pool::{DuplicatePolicy, Error, InsertPolicy, RawRecyclingPool};

#[derive(Clone, Debug)]
enum Operation {
    Add(u8),
    AddAll(Vec<u8>),
    AddRange(u8, usize),
    Get,
    Recycle,
    Clear,
    SetSeed(u64),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<u8>().prop_map(Operation::Add),
        2 => prop::collection::vec(any::<u8>(), 0..10).prop_map(Operation::AddAll),
        1 => (0_u8..100, 0_usize..10).prop_map(|(start, count)| Operation::AddRange(start, count)),
        6 => Just(Operation::Get),
        1 => Just(Operation::Recycle),
        1 => Just(Operation::Clear),
        1 => any::<u64>().prop_map(Operation::SetSeed),
    ]
}

fn duplicate_policy() -> impl Strategy<Value = DuplicatePolicy> {
    prop_oneof![Just(DuplicatePolicy::Allow), Just(DuplicatePolicy::Reject)]
}

fn insert_policy() -> impl Strategy<Value = InsertPolicy> {
    prop_oneof![Just(InsertPolicy::AsRemaining), Just(InsertPolicy::AsUsed)]
}

fn multiplicities(values: &[u8]) -> HashMap<u8, usize> {
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(*value).or_default() += 1;
    }
    counts
}

proptest! {
    #[test]
    fn prop_counts_stay_consistent(
        duplicates in duplicate_policy(),
        insert in insert_policy(),
        seed in any::<u64>(),
        operations in prop::collection::vec(operation(), 0..100)
    ) {
        let mut pool = RawRecyclingPool::builder()
            .duplicate_policy(duplicates)
            .insert_policy(insert)
            .seed(seed)
            .build_raw();

        // Our own model of the multiset, independent of remaining/used placement.
        let mut model: Vec<u8> = Vec::new();

        for operation in operations {
            match operation {
                Operation::Add(value) => {
                    let added = pool.add(value);
                    prop_assert_eq!(added, duplicates == DuplicatePolicy::Allow || !model.contains(&value));
                    if added {
                        model.push(value);
                    }
                }
                Operation::AddAll(values) => {
                    let before = pool.count_total();
                    let added = pool.add_all(values.clone());
                    prop_assert_eq!(pool.count_total(), before + added);

                    for value in values {
                        if duplicates == DuplicatePolicy::Allow || !model.contains(&value) {
                            model.push(value);
                        }
                    }
                }
                Operation::AddRange(start, count) => {
                    // A zero step keeps the values inside u8 range regardless of count.
                    let added = pool.add_range(start, count, 0);
                    let expected = match duplicates {
                        DuplicatePolicy::Reject if count > 0 => usize::from(!model.contains(&start)),
                        DuplicatePolicy::Reject => 0,
                        _ => count,
                    };
                    prop_assert_eq!(added, expected);
                    model.extend(std::iter::repeat_n(start, added));
                }
                Operation::Get => {
                    let total = pool.count_total();
                    match pool.get() {
                        Ok(value) => prop_assert!(model.contains(&value)),
                        Err(Error::Underflow) => prop_assert_eq!(total, 0),
                        Err(other) => prop_assert!(false, "unexpected error {other:?}"),
                    }
                    prop_assert_eq!(pool.count_total(), total);
                }
                Operation::Recycle => {
                    let total = pool.count_total();
                    pool.recycle();
                    prop_assert_eq!(pool.count_used(), 0);
                    prop_assert_eq!(pool.count_remaining(), total);
                }
                Operation::Clear => {
                    pool.clear();
                    model.clear();
                    prop_assert!(pool.is_empty());
                }
                Operation::SetSeed(seed) => pool.set_seed(seed),
            }

            prop_assert_eq!(pool.count_total(), pool.count_remaining() + pool.count_used());
            prop_assert_eq!(pool.count_total(), model.len());
        }
    }

    #[test]
    fn prop_full_cycle_returns_inserted_multiset(
        values in prop::collection::vec(0_u8..20, 1..60),
        seed in any::<u64>()
    ) {
        let mut pool = RawRecyclingPool::builder().seed(seed).build_raw();
        pool.add_all(values.iter().copied());

        let drawn = (0..values.len())
            .map(|_| pool.get().unwrap())
            .collect::<Vec<_>>();

        prop_assert_eq!(multiplicities(&drawn), multiplicities(&values));
        prop_assert_eq!(pool.count_remaining(), 0);
        prop_assert_eq!(pool.count_used(), values.len());

        // The next draw starts a new cycle.
        let next = pool.get().unwrap();
        prop_assert!(values.contains(&next));
        prop_assert_eq!(pool.count_remaining(), values.len() - 1);
    }

    #[test]
    fn prop_rejecting_duplicates_keeps_values_distinct(
        values in prop::collection::vec(0_u8..30, 0..60),
        draws in 0_usize..40
    ) {
        let mut pool = RawRecyclingPool::builder()
            .duplicate_policy(DuplicatePolicy::Reject)
            .build_raw();

        pool.add_all(values.iter().copied());
        let distinct = multiplicities(&values).len();
        prop_assert_eq!(pool.count_total(), distinct);

        if distinct > 0 {
            for _ in 0..draws {
                pool.get().unwrap();
            }
        }

        // Adding everything again changes nothing, wherever the values currently are.
        prop_assert_eq!(pool.add_all(values.iter().copied()), 0);
        prop_assert_eq!(pool.count_total(), distinct);
    }
}
