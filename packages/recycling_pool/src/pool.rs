use std::hash::Hash;
use std::ops::Add;
use std::sync::{Arc, Mutex};

use crate::constants::ERR_POISONED_LOCK;
use crate::{DuplicatePolicy, InsertPolicy, RawRecyclingPool, RecyclingPoolBuilder, Result};

/// A thread-safe wrapper around [`RawRecyclingPool`].
///
/// Every operation acquires a lock on the underlying pool for its whole duration, so operations
/// from different threads never interleave. This includes the read-only `count_*()` methods.
///
/// This type acts as a cloneable handle to a shared pool instance. Multiple handles
/// can exist simultaneously, and the underlying pool remains alive as long as at least one
/// handle exists.
///
/// # Thread Safety
///
/// This type is thread-safe if `T` is [`Send`] and can be safely shared across multiple threads.
///
/// # Example
///
/// ```rust
/// use std::thread;
///
/// use recycling_pool::RecyclingPool;
///
/// let pool = RecyclingPool::new();
/// pool.add_all(0..100);
///
/// let handles = (0..4)
///     .map(|_| {
///         let pool = pool.clone();
///         thread::spawn(move || pool.get_many(25).unwrap())
///     })
///     .collect::<Vec<_>>();
///
/// let mut drawn = handles
///     .into_iter()
///     .flat_map(|handle| handle.join().unwrap())
///     .collect::<Vec<_>>();
/// drawn.sort_unstable();
///
/// // Between them, the threads received every value exactly once.
/// assert_eq!(drawn, (0..100).collect::<Vec<_>>());
/// ```
#[derive(Debug)]
pub struct RecyclingPool<T> {
    /// The shared pool instance protected by a mutex for thread safety.
    inner: Arc<Mutex<RawRecyclingPool<T>>>,
}

impl<T> From<RawRecyclingPool<T>> for RecyclingPool<T> {
    /// Creates a new [`RecyclingPool`] from an existing raw pool.
    ///
    /// The provided pool is consumed, together with all its values and its random number
    /// generator state, and wrapped in thread-safe reference counting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{RawRecyclingPool, RecyclingPool};
    ///
    /// let mut raw_pool = RawRecyclingPool::new();
    /// raw_pool.add_all([1, 2, 3]);
    ///
    /// let pool = RecyclingPool::from(raw_pool);
    /// assert_eq!(pool.count_total(), 3);
    /// ```
    fn from(pool: RawRecyclingPool<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }
}

impl<T> Clone for RecyclingPool<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> RecyclingPool<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a new [`RecyclingPool`] with default configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::RecyclingPool;
    ///
    /// let pool = RecyclingPool::new();
    /// pool.add(42_u64);
    ///
    /// assert_eq!(pool.get(), Ok(42));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from(RawRecyclingPool::new())
    }

    /// Returns a builder for creating a [`RecyclingPool`] with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::{DuplicatePolicy, RecyclingPool};
    ///
    /// let pool = RecyclingPool::builder()
    ///     .duplicate_policy(DuplicatePolicy::Reject)
    ///     .build();
    ///
    /// pool.add('q');
    /// ```
    pub fn builder() -> RecyclingPoolBuilder<T> {
        RecyclingPoolBuilder::new()
    }

    /// Adds a single value to the pool, returning whether it was added.
    ///
    /// See [`RawRecyclingPool::add()`].
    pub fn add(&self, value: T) -> bool {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.add(value)
    }

    /// Adds every value of a sequence to the pool, returning how many were actually added.
    ///
    /// The lock is held while the sequence is consumed, so the whole sequence is added
    /// atomically with respect to other operations on the pool.
    ///
    /// See [`RawRecyclingPool::add_all()`].
    pub fn add_all<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.add_all(values)
    }

    /// Adds `count` values to the pool, starting at `start` and advancing by `step` each time.
    ///
    /// See [`RawRecyclingPool::add_range()`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::RecyclingPool;
    ///
    /// let pool = RecyclingPool::new();
    /// pool.add_range(100, 10, 10);
    ///
    /// assert_eq!(pool.count_total(), 10);
    /// ```
    pub fn add_range(&self, start: T, count: usize, step: T) -> usize
    where
        T: Add<Output = T>,
    {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.add_range(start, count, step)
    }

    /// Draws a random value from the remaining values, recycling the pool first if needed.
    ///
    /// This operation may block if another thread is currently accessing the pool.
    ///
    /// See [`RawRecyclingPool::get()`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`][crate::Error::Underflow] if the pool contains no values at
    /// all. The pool is not modified in this case.
    pub fn get(&self) -> Result<T> {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.get()
    }

    /// Draws `count` values as if by calling [`get()`][Self::get] `count` times, but without
    /// letting other threads access the pool in between.
    ///
    /// If `count` exceeds the number of remaining values, the pool is recycled during the
    /// draw and values returned earlier in the same call may be returned again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`][crate::Error::Underflow] if `count` is nonzero and the pool
    /// contains no values at all. The pool is not modified in this case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycling_pool::RecyclingPool;
    ///
    /// let pool = RecyclingPool::new();
    /// pool.add_all(["a", "b", "c"]);
    ///
    /// let mut drawn = pool.get_many(3).unwrap();
    /// drawn.sort_unstable();
    ///
    /// assert_eq!(drawn, ["a", "b", "c"]);
    /// ```
    pub fn get_many(&self, count: usize) -> Result<Vec<T>> {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);

        // A non-empty pool never fails to produce a value, so either the first draw
        // fails and nothing has changed, or all of them succeed.
        (0..count).map(|_| pool.get()).collect()
    }

    /// Makes all used values remaining again.
    ///
    /// See [`RawRecyclingPool::recycle()`].
    pub fn recycle(&self) {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.recycle();
    }

    /// Removes all values from the pool.
    ///
    /// See [`RawRecyclingPool::clear()`].
    pub fn clear(&self) {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.clear();
    }

    /// Reseeds the random number generator shared by all handles to this pool.
    ///
    /// See [`RawRecyclingPool::set_seed()`].
    pub fn set_seed(&self, seed: u64) {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.set_seed(seed);
    }

    /// Whether the pool contains a value equal to `value`, either remaining or used.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.contains(value)
    }

    /// The number of values that may be returned before the pool is next recycled.
    ///
    /// This operation may block if another thread is currently accessing the pool.
    #[must_use]
    pub fn count_remaining(&self) -> usize {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.count_remaining()
    }

    /// The number of values returned since the last recycle.
    ///
    /// This operation may block if another thread is currently accessing the pool.
    #[must_use]
    pub fn count_used(&self) -> usize {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.count_used()
    }

    /// The total number of values in the pool.
    ///
    /// This operation may block if another thread is currently accessing the pool.
    #[must_use]
    pub fn count_total(&self) -> usize {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.count_total()
    }

    /// Whether the pool has no values at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.is_empty()
    }

    /// The duplicate policy the pool was created with.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.duplicate_policy()
    }

    /// The insert policy the pool was created with.
    #[must_use]
    pub fn insert_policy(&self) -> InsertPolicy {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.insert_policy()
    }
}

impl<T> Default for RecyclingPool<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
