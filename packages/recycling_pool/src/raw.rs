use std::fmt;
use std::hash::Hash;
use std::ops::Add;

use foldhash::{HashSet, HashSetExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{DuplicatePolicy, Error, InsertPolicy, RecyclingPoolBuilder, Result};

/// A pool of values that are handed out in random order, each exactly once, until the pool is
/// exhausted, after which all values become eligible again.
///
/// The pool is a multiset split into two parts:
///
/// * The remaining values, any one of which may be returned by the next [`get()`][Self::get].
/// * The used values, which have already been returned since the last recycle.
///
/// Every call to [`get()`][Self::get] picks one of the remaining values uniformly at random
/// (if a value occurs several times, each occurrence is an independent candidate), moves it to
/// the used values and returns a copy of it. When no remaining values are left, the used values
/// are recycled automatically, becoming remaining values again.
///
/// # Example
///
/// ```rust
/// use recycling_pool::RawRecyclingPool;
///
/// let mut pool = RawRecyclingPool::new();
///
/// pool.add_all(["red", "green", "blue"]);
///
/// let mut drawn = vec![
///     pool.get().unwrap(),
///     pool.get().unwrap(),
///     pool.get().unwrap(),
/// ];
/// drawn.sort_unstable();
///
/// // Each value was returned once.
/// assert_eq!(drawn, ["blue", "green", "red"]);
/// assert_eq!(pool.count_remaining(), 0);
///
/// // The next draw recycles the pool.
/// pool.get().unwrap();
/// assert_eq!(pool.count_remaining(), 2);
/// ```
///
/// # Thread safety
///
/// This type is thread-mobile ([`Send`]) if `T` is, but requires exclusive access for every
/// operation. For a pool that can be shared between threads, use
/// [`RecyclingPool`][crate::RecyclingPool] instead.
pub struct RawRecyclingPool<T> {
    /// Values that may be returned by the next draw. Order carries no meaning, which lets us
    /// remove any element in constant time via `swap_remove()`.
    remaining: Vec<T>,

    /// Values returned since the last recycle (or added with `InsertPolicy::AsUsed`).
    used: Vec<T>,

    /// Every distinct value present in `remaining` or `used`. Only maintained when duplicates
    /// are rejected, in which case the two vectors together never contain a value twice.
    members: HashSet<T>,

    duplicate_policy: DuplicatePolicy,
    insert_policy: InsertPolicy,

    rng: StdRng,
}

impl<T> RawRecyclingPool<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a new `RawRecyclingPool` with default configuration: duplicates are allowed,
    /// added values are immediately eligible and the random number generator is randomly seeded.
    ///
    /// For custom configuration, use [`RawRecyclingPool::builder()`][RawRecyclingPool::builder].
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::RawRecyclingPool;
    ///
    /// let mut pool = RawRecyclingPool::new();
    /// pool.add(42);
    ///
    /// assert_eq!(pool.get(), Ok(42));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build_raw()
    }

    /// Creates a builder for configuring and constructing a [`RawRecyclingPool`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{DuplicatePolicy, RawRecyclingPool};
    ///
    /// let mut pool = RawRecyclingPool::builder()
    ///     .duplicate_policy(DuplicatePolicy::Reject)
    ///     .seed(99)
    ///     .build_raw();
    ///
    /// pool.add("only once");
    /// ```
    pub fn builder() -> RecyclingPoolBuilder<T> {
        RecyclingPoolBuilder::new()
    }

    /// Creates a new `RawRecyclingPool` with the specified configuration.
    ///
    /// This method is used internally by the builder to construct the actual pool.
    #[must_use]
    pub(crate) fn new_inner(
        duplicate_policy: DuplicatePolicy,
        insert_policy: InsertPolicy,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        tracing::debug!(
            ?duplicate_policy,
            ?insert_policy,
            fixed_seed = seed.is_some(),
            "created recycling pool"
        );

        Self {
            remaining: Vec::new(),
            used: Vec::new(),
            members: HashSet::new(),
            duplicate_policy,
            insert_policy,
            rng,
        }
    }

    /// Adds a single value to the pool.
    ///
    /// Returns `true` if the value was added. Returns `false` if the pool rejects duplicates
    /// and an equal value is already present, either among the remaining or the used values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{DuplicatePolicy, RawRecyclingPool};
    ///
    /// let mut pool = RawRecyclingPool::builder()
    ///     .duplicate_policy(DuplicatePolicy::Reject)
    ///     .build_raw();
    ///
    /// assert!(pool.add(5));
    ///
    /// // Moving the value to the used values does not make it addable again.
    /// assert_eq!(pool.get(), Ok(5));
    /// assert!(!pool.add(5));
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        if self.duplicate_policy == DuplicatePolicy::Reject && !self.members.insert(value.clone()) {
            tracing::trace!("rejected duplicate value");
            return false;
        }

        match self.insert_policy {
            InsertPolicy::AsRemaining => self.remaining.push(value),
            InsertPolicy::AsUsed => self.used.push(value),
        }

        true
    }

    /// Adds every value of a sequence to the pool, returning how many were actually added.
    ///
    /// Each value is subject to the same rules as [`add()`][Self::add]. When duplicates are
    /// rejected, a value is also rejected if an equal value appeared earlier in the same
    /// sequence, so repeated values within one call collapse to a single entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{DuplicatePolicy, RawRecyclingPool};
    ///
    /// let mut pool = RawRecyclingPool::builder()
    ///     .duplicate_policy(DuplicatePolicy::Reject)
    ///     .build_raw();
    ///
    /// assert_eq!(pool.add_all([2, 4, 6, 8, 10]), 5);
    /// assert_eq!(pool.add_all([2, 4, 6, 8, 10]), 0);
    /// assert_eq!(pool.add_all([12, 12, 12]), 1);
    /// ```
    pub fn add_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();

        if self.duplicate_policy == DuplicatePolicy::Allow {
            let destination = self.destination();
            let before = destination.len();
            destination.extend(values);

            #[allow(
                clippy::arithmetic_side_effects,
                reason = "extend() only grows the vector, so this cannot underflow"
            )]
            let added = destination.len() - before;

            return added;
        }

        values.map(|value| self.add(value)).filter(|added| *added).count()
    }

    /// Adds `count` values to the pool, starting at `start` and advancing by `step` each time.
    ///
    /// This is equivalent to calling [`add_all()`][Self::add_all] with the sequence
    /// `start, start + step, start + step + step, ...` of length `count`, and returns the number
    /// of values that were actually added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{DuplicatePolicy, RawRecyclingPool};
    ///
    /// let mut pool = RawRecyclingPool::builder()
    ///     .duplicate_policy(DuplicatePolicy::Reject)
    ///     .build_raw();
    ///
    /// // Adds 100, 110, ..., 190.
    /// assert_eq!(pool.add_range(100, 10, 10), 10);
    ///
    /// // A zero step produces identical values, which are rejected after the first.
    /// assert_eq!(pool.add_range(999, 5, 0), 1);
    ///
    /// // Any integer type works, adding 1, 3 and 5 here.
    /// let mut small = RawRecyclingPool::new();
    /// small.add_range(1_u8, 3, 2);
    /// assert_eq!(small.count_total(), 3);
    /// ```
    pub fn add_range(&mut self, start: T, count: usize, step: T) -> usize
    where
        T: Add<Output = T>,
    {
        let mut current = start;

        // The step is only applied between values, so the last value does not
        // overflow just because one more step would.
        let values = (0..count).map(|index| {
            if index > 0 {
                #[allow(
                    clippy::arithmetic_side_effects,
                    reason = "overflow behaves as for the element type itself"
                )]
                let next = current.clone() + step.clone();
                current = next;
            }

            current.clone()
        });

        self.add_all(values)
    }

    /// Draws a random value from the remaining values, moving it to the used values and
    /// returning a copy of it.
    ///
    /// If there are no remaining values, the pool is first recycled, making all used values
    /// remaining again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if the pool contains no values at all. The pool is not
    /// modified in this case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{Error, RawRecyclingPool};
    ///
    /// let mut pool = RawRecyclingPool::new();
    /// assert_eq!(pool.get(), Err(Error::Underflow));
    ///
    /// pool.add(1);
    /// assert_eq!(pool.get(), Ok(1));
    ///
    /// // Automatically recycled.
    /// assert_eq!(pool.get(), Ok(1));
    /// ```
    pub fn get(&mut self) -> Result<T> {
        if self.remaining.is_empty() {
            if self.used.is_empty() {
                tracing::debug!("cannot draw from a pool with no values");
                return Err(Error::Underflow);
            }

            self.recycle();
        }

        let index = self.rng.random_range(0..self.remaining.len());
        let value = self.remaining.swap_remove(index);
        self.used.push(value.clone());

        Ok(value)
    }

    /// Makes all used values remaining again, regardless of how many values are still remaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::RawRecyclingPool;
    ///
    /// let mut pool = RawRecyclingPool::new();
    /// pool.add_all([1, 2, 3]);
    ///
    /// pool.get().unwrap();
    /// assert_eq!(pool.count_used(), 1);
    ///
    /// pool.recycle();
    /// assert_eq!(pool.count_remaining(), 3);
    /// assert_eq!(pool.count_used(), 0);
    /// ```
    pub fn recycle(&mut self) {
        tracing::trace!(recycled = self.used.len(), "recycling used values");

        self.remaining.append(&mut self.used);
    }

    /// Removes all values from the pool. The configured policies are retained.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{Error, RawRecyclingPool};
    ///
    /// let mut pool = RawRecyclingPool::new();
    /// pool.add_all([1, 2, 3]);
    /// pool.get().unwrap();
    ///
    /// pool.clear();
    ///
    /// assert!(pool.is_empty());
    /// assert_eq!(pool.get(), Err(Error::Underflow));
    /// ```
    pub fn clear(&mut self) {
        self.remaining.clear();
        self.used.clear();
        self.members.clear();
    }

    /// Reseeds the random number generator. Only draws made after this call are affected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::RawRecyclingPool;
    ///
    /// let mut a = RawRecyclingPool::new();
    /// let mut b = RawRecyclingPool::new();
    /// a.add_all(0..1000);
    /// b.add_all(0..1000);
    ///
    /// a.set_seed(5);
    /// b.set_seed(5);
    ///
    /// assert_eq!(a.get(), b.get());
    /// ```
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Whether the pool contains a value equal to `value`, either remaining or used.
    ///
    /// This is a constant-time lookup if the pool rejects duplicates and a linear scan otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::RawRecyclingPool;
    ///
    /// let mut pool = RawRecyclingPool::new();
    /// pool.add("a");
    ///
    /// assert!(pool.contains(&"a"));
    /// assert!(!pool.contains(&"b"));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        match self.duplicate_policy {
            DuplicatePolicy::Reject => self.members.contains(value),
            DuplicatePolicy::Allow => self.remaining.contains(value) || self.used.contains(value),
        }
    }

    /// The number of values that may be returned before the pool is next recycled.
    #[must_use]
    pub fn count_remaining(&self) -> usize {
        self.remaining.len()
    }

    /// The number of values returned since the last recycle, including values that were
    /// added directly as used.
    #[must_use]
    pub fn count_used(&self) -> usize {
        self.used.len()
    }

    /// The total number of values in the pool, remaining and used.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "both lengths are bounded by allocation size, so the sum cannot overflow"
    )]
    pub fn count_total(&self) -> usize {
        self.remaining.len() + self.used.len()
    }

    /// Whether the pool has no values at all, in which case [`get()`][Self::get] fails.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty() && self.used.is_empty()
    }

    /// The duplicate policy the pool was created with.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// The insert policy the pool was created with.
    #[must_use]
    pub fn insert_policy(&self) -> InsertPolicy {
        self.insert_policy
    }

    fn destination(&mut self) -> &mut Vec<T> {
        match self.insert_policy {
            InsertPolicy::AsRemaining => &mut self.remaining,
            InsertPolicy::AsUsed => &mut self.used,
        }
    }
}

impl<T> Default for RawRecyclingPool<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RawRecyclingPool<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> fmt::Debug for RawRecyclingPool<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRecyclingPool")
            .field("remaining", &self.remaining.len())
            .field("used", &self.used.len())
            .field("duplicate_policy", &self.duplicate_policy)
            .field("insert_policy", &self.insert_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_precision_loss,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(RawRecyclingPool<u32>: Send, Sync);
    assert_not_impl_any!(RawRecyclingPool<Rc<u32>>: Send, Sync);
    assert_not_impl_any!(RawRecyclingPool<Cell<u32>>: Sync);

    fn seeded<T: Eq + Hash + Clone>() -> RawRecyclingPool<T> {
        RawRecyclingPool::builder().seed(0x5eed).build_raw()
    }

    fn deduplicating<T: Eq + Hash + Clone>() -> RawRecyclingPool<T> {
        RawRecyclingPool::builder()
            .duplicate_policy(DuplicatePolicy::Reject)
            .seed(0x5eed)
            .build_raw()
    }

    fn drain<T: Eq + Hash + Clone + Ord>(pool: &mut RawRecyclingPool<T>, count: usize) -> Vec<T> {
        let mut drawn = (0..count).map(|_| pool.get().unwrap()).collect::<Vec<_>>();
        drawn.sort_unstable();
        drawn
    }

    #[test]
    fn smoke_test() {
        let mut pool = seeded();

        assert!(pool.is_empty());
        assert_eq!(pool.count_total(), 0);

        pool.add(1);
        pool.add(2);
        pool.add(3);

        assert!(!pool.is_empty());
        assert_eq!(pool.count_total(), 3);
        assert_eq!(pool.count_remaining(), 3);
        assert_eq!(pool.count_used(), 0);

        assert_eq!(drain(&mut pool, 3), [1, 2, 3]);

        assert_eq!(pool.count_total(), 3);
        assert_eq!(pool.count_remaining(), 0);
        assert_eq!(pool.count_used(), 3);
    }

    #[test]
    fn get_from_new_pool_underflows() {
        let mut pool = seeded::<u32>();

        assert_eq!(pool.get(), Err(Error::Underflow));
        assert_eq!(pool.count_total(), 0);
    }

    #[test]
    fn get_after_clear_underflows() {
        let mut pool = seeded();
        pool.add_all([1, 2, 3]);
        pool.get().unwrap();

        pool.clear();

        assert_eq!(pool.get(), Err(Error::Underflow));
        assert_eq!(pool.count_remaining(), 0);
        assert_eq!(pool.count_used(), 0);
    }

    #[test]
    fn underflow_then_add_then_get() {
        let mut pool = seeded();

        assert_eq!(pool.get(), Err(Error::Underflow));

        pool.add(77);
        assert_eq!(pool.get(), Ok(77));
    }

    #[test]
    fn exhaustion_returns_each_occurrence_once() {
        let mut pool = seeded();
        pool.add_all([5, 5, 5, 1, 2, 2]);

        assert_eq!(drain(&mut pool, 6), [1, 2, 2, 5, 5, 5]);
        assert_eq!(pool.count_remaining(), 0);
        assert_eq!(pool.count_used(), 6);
    }

    #[test]
    fn auto_recycle_after_exhaustion() {
        let mut pool = seeded();
        pool.add_all(0..10);
        drain(&mut pool, 10);

        let value = pool.get().unwrap();

        assert!((0..10).contains(&value));
        assert_eq!(pool.count_remaining(), 9);
        assert_eq!(pool.count_used(), 1);
        assert_eq!(pool.count_total(), 10);
    }

    #[test]
    fn second_cycle_is_also_complete() {
        let mut pool = seeded();
        pool.add_all(0..20);

        assert_eq!(drain(&mut pool, 20), (0..20).collect::<Vec<_>>());
        assert_eq!(drain(&mut pool, 20), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn manual_recycle_with_values_remaining() {
        let mut pool = seeded();
        pool.add_all(0..5);
        pool.get().unwrap();
        pool.get().unwrap();

        pool.recycle();

        assert_eq!(pool.count_remaining(), 5);
        assert_eq!(pool.count_used(), 0);
        assert_eq!(drain(&mut pool, 5), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn recycle_of_empty_pool_is_noop() {
        let mut pool = seeded::<u32>();

        pool.recycle();

        assert!(pool.is_empty());
    }

    #[test]
    fn duplicates_allowed_by_default() {
        let mut pool = seeded();

        assert!(pool.add(5));
        assert!(pool.add(5));
        assert_eq!(pool.add_all([5, 5]), 2);

        assert_eq!(pool.count_total(), 4);
    }

    #[test]
    fn duplicates_allowed_across_remaining_and_used() {
        let mut pool = seeded();
        pool.add(5);
        pool.get().unwrap();

        assert!(pool.add(5));
        assert_eq!(pool.count_remaining(), 1);
        assert_eq!(pool.count_used(), 1);
    }

    #[test]
    fn reject_duplicates_in_remaining() {
        let mut pool = deduplicating();

        assert!(pool.add(5));
        assert!(!pool.add(5));

        assert_eq!(pool.count_total(), 1);
    }

    #[test]
    fn reject_duplicates_in_used() {
        let mut pool = deduplicating();
        pool.add(5);
        assert_eq!(pool.get(), Ok(5));

        assert!(!pool.add(5));

        assert_eq!(pool.count_total(), 1);
        assert_eq!(pool.count_used(), 1);
    }

    #[test]
    fn reject_duplicates_within_one_batch() {
        let mut pool = deduplicating();

        assert_eq!(pool.add_all([3, 1, 3, 2, 1, 3]), 3);

        assert_eq!(pool.count_total(), 3);
        assert_eq!(drain(&mut pool, 3), [1, 2, 3]);
    }

    #[test]
    fn reject_duplicates_forgets_cleared_values() {
        let mut pool = deduplicating();
        pool.add(5);

        pool.clear();

        assert!(pool.add(5));
        assert_eq!(pool.count_total(), 1);
    }

    #[test]
    fn add_as_used() {
        let mut pool = RawRecyclingPool::builder()
            .insert_policy(InsertPolicy::AsUsed)
            .build_raw();

        pool.add(7);

        assert_eq!(pool.count_remaining(), 0);
        assert_eq!(pool.count_used(), 1);

        pool.recycle();

        assert_eq!(pool.count_remaining(), 1);
        assert_eq!(pool.count_used(), 0);
    }

    #[test]
    fn add_all_as_used_counts_added() {
        let mut pool = RawRecyclingPool::builder()
            .insert_policy(InsertPolicy::AsUsed)
            .build_raw();

        assert_eq!(pool.add_all([1, 2, 3]), 3);

        assert_eq!(pool.count_used(), 3);
    }

    #[test]
    fn get_recycles_values_added_as_used() {
        let mut pool = RawRecyclingPool::builder()
            .insert_policy(InsertPolicy::AsUsed)
            .seed(1)
            .build_raw();
        pool.add(7);

        assert_eq!(pool.get(), Ok(7));
        assert_eq!(pool.count_used(), 1);
    }

    #[test]
    fn add_as_used_with_reject_duplicates() {
        let mut pool = RawRecyclingPool::builder()
            .duplicate_policy(DuplicatePolicy::Reject)
            .insert_policy(InsertPolicy::AsUsed)
            .build_raw();

        assert!(pool.add(1));
        assert!(!pool.add(1));

        assert_eq!(pool.count_used(), 1);
        assert_eq!(pool.count_remaining(), 0);
    }

    #[test]
    fn add_range_with_step() {
        let mut pool = seeded();

        assert_eq!(pool.add_range(100, 10, 10), 10);

        assert_eq!(
            drain(&mut pool, 10),
            [100, 110, 120, 130, 140, 150, 160, 170, 180, 190]
        );
    }

    #[test]
    fn add_range_zero_count() {
        let mut pool = seeded();

        assert_eq!(pool.add_range(1, 0, 1), 0);

        assert!(pool.is_empty());
    }

    #[test]
    fn add_range_zero_step_allows_duplicates() {
        let mut pool = seeded();

        assert_eq!(pool.add_range(999, 5, 0), 5);

        assert_eq!(pool.count_total(), 5);
    }

    #[test]
    fn add_range_zero_step_rejects_duplicates() {
        let mut pool = deduplicating();

        assert_eq!(pool.add_range(999, 5, 0), 1);

        assert_eq!(pool.count_total(), 1);
    }

    #[test]
    fn add_range_negative_step() {
        let mut pool = seeded();

        pool.add_range(0_i64, 4, -3);

        assert_eq!(drain(&mut pool, 4), [-9, -6, -3, 0]);
    }

    #[test]
    fn extend_applies_policy() {
        let mut pool = deduplicating();

        pool.extend([1, 1, 2]);

        assert_eq!(pool.count_total(), 2);
    }

    #[test]
    fn contains_checks_both_parts() {
        for mut pool in [seeded(), deduplicating()] {
            pool.add_all([1, 2]);
            pool.get().unwrap();

            assert!(pool.contains(&1));
            assert!(pool.contains(&2));
            assert!(!pool.contains(&3));
        }
    }

    #[test]
    fn reseed_repeats_sequence() {
        let mut a = RawRecyclingPool::new();
        let mut b = RawRecyclingPool::new();
        a.add_all(0..100);
        b.add_all(0..100);

        a.set_seed(123);
        b.set_seed(123);

        let from_a = (0..10).map(|_| a.get().unwrap()).collect::<Vec<_>>();
        let from_b = (0..10).map(|_| b.get().unwrap()).collect::<Vec<_>>();

        assert_eq!(from_a, from_b);
    }

    #[test]
    fn add_range_does_not_step_past_last_value() {
        let mut pool = seeded();

        // 250 + 5 is the last value; stepping once more would overflow a u8.
        assert_eq!(pool.add_range(250_u8, 2, 5), 2);

        assert_eq!(drain(&mut pool, 2), [250, 255]);
    }

    #[test]
    fn works_with_non_copy_values() {
        let mut pool = deduplicating();

        pool.add("alpha".to_string());
        pool.add("beta".to_string());
        pool.add("alpha".to_string());

        assert_eq!(pool.count_total(), 2);
        assert_eq!(
            drain(&mut pool, 2),
            ["alpha".to_string(), "beta".to_string()]
        );
    }

    #[test]
    fn first_draw_is_roughly_uniform() {
        // Deterministic chi-squared smoke test. This catches gross bias, such as never picking
        // the last element, without being flaky.
        let n = 20;
        let trials = 20_000;
        let mut counts = HashMap::new();

        let mut pool = seeded();
        pool.add_all(0..n);

        for _ in 0..trials {
            pool.recycle();
            *counts.entry(pool.get().unwrap()).or_insert(0_u32) += 1;
        }

        let expected = f64::from(trials) / f64::from(n);
        let chi2: f64 = (0..n)
            .map(|value| {
                let observed = f64::from(counts.get(&value).copied().unwrap_or_default());
                let diff = observed - expected;
                diff * diff / expected
            })
            .sum();

        // df = 19; the 99.99th percentile is well below 60.
        assert!(chi2 < 60.0, "chi2 too large (chi2={chi2:.2}), counts={counts:?}");
    }

    #[test]
    fn repeated_values_count_as_separate_candidates() {
        // One value occurs three times, another once. The first draw should favor the
        // repeated value about three to one.
        let trials = 10_000;
        let mut repeated = 0_u32;

        let mut pool = seeded();
        pool.add_all(['a', 'a', 'a', 'b']);

        for _ in 0..trials {
            pool.recycle();
            if pool.get().unwrap() == 'a' {
                repeated += 1;
            }
        }

        let ratio = f64::from(repeated) / f64::from(trials);
        assert!((0.72..0.78).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn debug_output_names_type() {
        let mut pool = seeded();
        pool.add_all([1, 2, 3]);

        let debug = format!("{pool:?}");

        assert!(debug.starts_with("RawRecyclingPool"), "{debug}");
    }

    #[test]
    fn add_all_counts_only_new_values() {
        let mut pool = seeded();
        pool.add_all([1, 2]);
        pool.get().unwrap();

        assert_eq!(pool.add_all([3, 4, 5]), 3);
        assert_eq!(pool.add_all(Vec::new()), 0);

        assert_eq!(pool.count_total(), 5);
        assert_eq!(pool.count_remaining() + pool.count_used(), pool.count_total());
    }
}
