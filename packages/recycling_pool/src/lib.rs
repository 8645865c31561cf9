#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`RecyclingPool`], a collection that hands out its values in random
//! order, each exactly once, and starts over with all values once every value has been handed out.
//!
//! This is useful wherever something must be picked at random without repeating itself too soon:
//! shuffled playlists, rotating through a set of servers or ports, choosing test inputs, and so on.
//!
//! # Remaining and used values
//!
//! The pool is a multiset divided into *remaining* values, which may be returned by the next draw,
//! and *used* values, which have been returned since the pool was last recycled. Drawing a value
//! moves it from remaining to used. When a draw finds no remaining values, all used values are
//! moved back to remaining first. This is called recycling.
//!
//! # Features
//!
//! - **Uniform draws**: Each remaining occurrence of a value is equally likely to be drawn.
//! - **Constant-time draws**: Drawing does not scan the pool.
//! - **Duplicate policy**: Optionally ignore values that are already present in the pool.
//! - **Insert policy**: Optionally add values as already used, deferring them to the next cycle.
//! - **Reproducible**: The random number generator can be seeded.
//! - **Thread-safe and single-threaded variants**: [`RecyclingPool`] for multi-threaded use,
//!   [`RawRecyclingPool`] for exclusive single-threaded use.
//!
//! # Example
//!
//! ```rust
//! use recycling_pool::{DuplicatePolicy, RecyclingPool};
//!
//! let pool = RecyclingPool::builder()
//!     .duplicate_policy(DuplicatePolicy::Reject)
//!     .build();
//!
//! pool.add(-1);
//! pool.add_all([2, 4, 6, 8, 10]);
//! // Already present, so nothing is added.
//! pool.add_all([2, 4, 6, 8, 10]);
//! // Adds 100, 110, ..., 190.
//! pool.add_range(100, 10, 10);
//!
//! assert_eq!(pool.count_total(), 16);
//!
//! for _ in 0..16 {
//!     println!("{}", pool.get().unwrap());
//! }
//!
//! assert_eq!(pool.count_remaining(), 0);
//!
//! // The pool is recycled by the next draw.
//! pool.get().unwrap();
//! assert_eq!(pool.count_remaining(), 15);
//! ```
//!
//! For single-threaded use:
//!
//! ```rust
//! use recycling_pool::RawRecyclingPool;
//!
//! let mut pool = RawRecyclingPool::new();
//! pool.add_all(["rock", "paper", "scissors"]);
//!
//! let choice = pool.get().unwrap();
//! assert!(["rock", "paper", "scissors"].contains(&choice));
//! ```

mod builder;
mod constants;
mod error;
mod policy;
mod pool;
mod raw;

pub use builder::*;
pub use error::Error;
pub(crate) use error::Result;
pub use policy::*;
pub use pool::*;
pub use raw::*;
