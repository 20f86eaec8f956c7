//! Bounded key/value index ranking the top values of a pluggable policy.
//!
//! This library tracks the values of a changing set of keys and keeps the
//! `capacity` greatest of them sorted, where "greatest" is decided by a
//! caller supplied [`ValuePolicy`](policy/trait.ValuePolicy.html).
//! It is the core of "top-K" trackers: most frequent items,
//! most recent items or any leaderboard-like ranking where only a small
//! sorted prefix matters.
//!
//! The main structure is [`BoundedRankedIndex`]. Every update of a key goes
//! through a single operation,
//! [`update_and_rank()`](struct.BoundedRankedIndex.html#method.update_and_rank),
//! that creates the value of a new key, lets the policy mutate it and moves
//! it to its new rank, dropping the lowest ranked value when the ranking is
//! full. Ranked values are then read back by position with
//! [`ranked_at()`](struct.BoundedRankedIndex.html#method.ranked_at).
//!
//! ## Examples
//!
//! ```
//! use ranked_index::BoundedRankedIndex;
//! use ranked_index::policy::Frequency;
//!
//! let mut index = BoundedRankedIndex::new(2, Frequency::new());
//!
//! assert!(index.update_and_rank("a"));
//! assert!(index.update_and_rank("b"));
//! // "c" ties with the ranked keys and there is no room left.
//! assert!(!index.update_and_rank("c"));
//! // Once updated again, "c" ranks first and "b" is dropped.
//! assert!(index.update_and_rank("c"));
//!
//! assert_eq!(index.size(), 2);
//! assert_eq!(index.ranked_at(0).unwrap().hits(), 2);
//! assert_eq!(index.ranked_at(1).unwrap().key(), &"a");
//! ```
//!
//! Indexes can be wrapped into a [`Profiler`] to collect statistics about
//! their use. Both implement the [`Rank`] trait.
//! See the [`builder`](builder/index.html) module to assemble them and,
//! with the `config` feature, the [`config`](config/index.html) module to
//! build an index from a toml configuration.
//!
//! An index is not thread safe. Updates borrow it mutably and concurrent
//! users have to serialize their accesses, for instance behind a
//! [`std::sync::Mutex`].

mod rank;
pub use rank::Rank;

mod error;
pub use error::RankError;

/// Policies deciding how values are created, updated and ordered.
pub mod policy;

mod ranked;
pub use ranked::BoundedRankedIndex;

mod profiler;
pub use profiler::{Profiler, ProfilerOutputKind};

pub mod builder;

#[cfg(feature = "config")]
pub mod config;

/// Public test module available at test time.
/// This module tests the expected behavior of [`Rank`] implementors
/// with `test_rank()`.
#[cfg(test)]
mod tests;
