//! Ranking policies and related traits and modules.
//!
//! A [`BoundedRankedIndex`](../struct.BoundedRankedIndex.html) never looks
//! inside the values it tracks. Instead, it delegates to a [`ValuePolicy`]
//! the creation of a value for a new key, the mutation of a value when its
//! key is updated, and the comparison of two values when deciding which
//! ones rank in the top of the index.
//!
//! This crate ships policies operating on a shared [`Tally`] value:
//! * [`Frequency`] ranks most updated keys first,
//! * [`Lru`] ranks most recently updated keys first,
//! * [`Lrfu`] mixes both with an exponential decay of past updates.
//!
//! Any other ranking can be expressed either by implementing
//! [`ValuePolicy`] or by bundling three closures into a [`FnPolicy`].
//!
//! ### Examples
//!
//! ```
//! use ranked_index::BoundedRankedIndex;
//! use ranked_index::policy::Lru;
//!
//! let mut c = BoundedRankedIndex::new(2, Lru::new());
//! c.update_and_rank("item1");
//! c.update_and_rank("item2");
//! c.update_and_rank("item0");
//! assert_eq!(c.ranked_at(0).unwrap().key(), &"item0");
//! assert_eq!(c.ranked_at(1).unwrap().key(), &"item2");
//! ```

/// Capability a [`BoundedRankedIndex`](../struct.BoundedRankedIndex.html)
/// delegates value creation, mutation and ordering to.
///
/// ## Contract:
///
/// * [`create()`](trait.ValuePolicy.html#tymethod.create) and
/// [`increment()`](trait.ValuePolicy.html#tymethod.increment) must be
/// total: they cannot fail for any key or value they are given.
/// * Each call to [`increment()`](trait.ValuePolicy.html#tymethod.increment)
/// represents one logical event on the value.
/// * [`is_greater()`](trait.ValuePolicy.html#tymethod.is_greater) must be a
/// strict ordering: irreflexive, asymmetric and transitive. Two values
/// where neither is greater than the other are tied.
///
/// The index does not check this contract. A policy breaking it will leave
/// ranked values out of order without any error being reported.
pub trait ValuePolicy<K, V> {
    /// Build the initial value of a key seen for the first time.
    fn create(&mut self, key: &K) -> V;

    /// Advance the state of `value` by one event.
    fn increment(&mut self, value: &mut V);

    /// Return whether `a` ranks strictly above `b`.
    fn is_greater(&self, a: &V, b: &V) -> bool;
}

impl<K, V, P> ValuePolicy<K, V> for Box<P>
where
    P: ValuePolicy<K, V> + ?Sized,
{
    fn create(&mut self, key: &K) -> V {
        self.as_mut().create(key)
    }

    fn increment(&mut self, value: &mut V) {
        self.as_mut().increment(value)
    }

    fn is_greater(&self, a: &V, b: &V) -> bool {
        self.as_ref().is_greater(a, b)
    }
}

mod tally;
pub use tally::Tally;
mod frequency;
pub use frequency::Frequency;
mod lru;
pub use lru::Lru;
mod lrfu;
pub use lrfu::Lrfu;
mod closure;
pub use closure::FnPolicy;
#[cfg(feature = "config")]
pub(crate) mod config;
