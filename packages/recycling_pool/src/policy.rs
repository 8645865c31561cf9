/// Determines whether a value may be added to the pool when an equal value is already present.
///
/// By default, duplicates are allowed and the pool behaves as a plain multiset.
///
/// # Examples
///
/// ```
/// use recycling_pool::{DuplicatePolicy, RawRecyclingPool};
///
/// // The duplicate policy is set at pool creation time.
/// let mut pool = RawRecyclingPool::builder()
///     .duplicate_policy(DuplicatePolicy::Reject)
///     .build_raw();
///
/// assert!(pool.add(5));
/// assert!(!pool.add(5));
/// assert_eq!(pool.count_total(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DuplicatePolicy {
    /// Every added value is stored, even if an equal value is already in the pool.
    /// This is the default.
    #[default]
    Allow,

    /// Adding a value that is already present anywhere in the pool, whether remaining or used,
    /// has no effect.
    Reject,
}

/// Determines which part of the pool newly added values are placed in.
///
/// By default, added values are immediately eligible to be drawn.
///
/// # Examples
///
/// ```
/// use recycling_pool::{InsertPolicy, RawRecyclingPool};
///
/// let mut pool = RawRecyclingPool::builder()
///     .insert_policy(InsertPolicy::AsUsed)
///     .build_raw();
///
/// pool.add(7);
/// assert_eq!(pool.count_remaining(), 0);
/// assert_eq!(pool.count_used(), 1);
///
/// // The value becomes eligible after the next recycle.
/// pool.recycle();
/// assert_eq!(pool.count_remaining(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum InsertPolicy {
    /// Added values are placed among the remaining values. This is the default.
    #[default]
    AsRemaining,

    /// Added values are placed among the used values and will not be drawn until the
    /// pool is next recycled.
    AsUsed,
}
