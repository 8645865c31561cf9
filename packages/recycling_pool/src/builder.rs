use std::hash::Hash;
use std::marker::PhantomData;

use crate::{DuplicatePolicy, InsertPolicy, RawRecyclingPool, RecyclingPool};

/// Builder for creating an instance of [`RecyclingPool`] or [`RawRecyclingPool`].
///
/// All settings are optional. The policies are fixed for the lifetime of the pool that is built.
///
/// # Examples
///
/// ```
/// use recycling_pool::{DuplicatePolicy, InsertPolicy, RecyclingPool};
///
/// // Default pool: duplicates allowed, values immediately eligible, random seed.
/// let pool = RecyclingPool::<u32>::builder().build();
///
/// // With custom policies and a fixed seed for reproducible draws.
/// let pool = RecyclingPool::builder()
///     .duplicate_policy(DuplicatePolicy::Reject)
///     .insert_policy(InsertPolicy::AsUsed)
///     .seed(1234)
///     .build();
///
/// pool.add(10_u32);
/// ```
#[derive(Debug)]
#[must_use]
pub struct RecyclingPoolBuilder<T> {
    duplicate_policy: DuplicatePolicy,
    insert_policy: InsertPolicy,
    seed: Option<u64>,

    // The builder holds no values, so it is Send and Sync regardless of `T`.
    _item: PhantomData<fn() -> T>,
}

impl<T> RecyclingPoolBuilder<T>
where
    T: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            insert_policy: InsertPolicy::default(),
            seed: None,
            _item: PhantomData,
        }
    }

    /// Sets the [duplicate policy][DuplicatePolicy] for the pool. This governs whether
    /// a value equal to one already in the pool can be added.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_pool::{DuplicatePolicy, RecyclingPool};
    ///
    /// let pool = RecyclingPool::<i32>::builder()
    ///     .duplicate_policy(DuplicatePolicy::Reject)
    ///     .build();
    ///
    /// pool.add(1);
    /// pool.add(1);
    /// assert_eq!(pool.count_total(), 1);
    /// ```
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Sets the [insert policy][InsertPolicy] for the pool. This governs whether added values
    /// can be drawn immediately or only after the next recycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_pool::{InsertPolicy, RecyclingPool};
    ///
    /// let pool = RecyclingPool::<i32>::builder()
    ///     .insert_policy(InsertPolicy::AsUsed)
    ///     .build();
    /// ```
    pub fn insert_policy(mut self, policy: InsertPolicy) -> Self {
        self.insert_policy = policy;
        self
    }

    /// Seeds the pool's random number generator with a fixed value, making the sequence
    /// of drawn values reproducible.
    ///
    /// If not set, a seed is obtained from the thread-local generator of the `rand` crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_pool::RawRecyclingPool;
    ///
    /// let mut a = RawRecyclingPool::builder().seed(42).build_raw();
    /// let mut b = RawRecyclingPool::builder().seed(42).build_raw();
    ///
    /// a.add_all(0..100);
    /// b.add_all(0..100);
    ///
    /// assert_eq!(a.get(), b.get());
    /// ```
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds a thread-safe pool with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_pool::RecyclingPool;
    ///
    /// let pool = RecyclingPool::builder().build();
    /// pool.add("hello".to_string());
    /// ```
    #[must_use]
    pub fn build(self) -> RecyclingPool<T> {
        RecyclingPool::from(self.build_raw())
    }

    /// Builds a single-threaded pool with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_pool::RawRecyclingPool;
    ///
    /// let mut pool = RawRecyclingPool::builder().build_raw();
    /// pool.add('x');
    /// ```
    #[must_use]
    pub fn build_raw(self) -> RawRecyclingPool<T> {
        RawRecyclingPool::new_inner(self.duplicate_policy, self.insert_policy, self.seed)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(RecyclingPoolBuilder<u32>: Send, Sync);
    assert_impl_all!(RecyclingPoolBuilder<std::rc::Rc<u32>>: Send, Sync);

    #[test]
    fn defaults_are_plain_multiset() {
        let pool = RecyclingPoolBuilder::<u8>::new().build_raw();

        assert_eq!(pool.duplicate_policy(), DuplicatePolicy::Allow);
        assert_eq!(pool.insert_policy(), InsertPolicy::AsRemaining);
    }

    #[test]
    fn policies_are_applied() {
        let pool = RecyclingPoolBuilder::<u8>::new()
            .duplicate_policy(DuplicatePolicy::Reject)
            .insert_policy(InsertPolicy::AsUsed)
            .build();

        assert_eq!(pool.duplicate_policy(), DuplicatePolicy::Reject);
        assert_eq!(pool.insert_policy(), InsertPolicy::AsUsed);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RecyclingPoolBuilder::new().seed(7).build_raw();
        let mut b = RecyclingPoolBuilder::new().seed(7).build_raw();

        a.add_all(0_u32..50);
        b.add_all(0_u32..50);

        for _ in 0..50 {
            assert_eq!(a.get().unwrap(), b.get().unwrap());
        }
    }
}
