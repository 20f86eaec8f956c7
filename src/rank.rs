use crate::RankError;

/// Ranked index interface.
///
/// `Rank` defines the primitives of a bounded, keyed, ordered collection:
/// every key ever updated is tracked, but only the `capacity` greatest
/// values, as ordered by the index policy, are ranked and reachable by
/// position.
///
/// The interface is implemented by
/// [`BoundedRankedIndex`](struct.BoundedRankedIndex.html) and by wrappers
/// such as [`Profiler`](struct.Profiler.html), such that wrappers can be
/// stacked on top of an index without changing the code using it.
///
/// There is no way to remove a key. A key only leaves the ranked values
/// when other keys are updated past it.
pub trait Rank<K, V> {
    /// Get the maximum number of ranked values.
    fn capacity(&self) -> usize;

    /// Get the number of ranked values, at most
    /// [`capacity()`](trait.Rank.html#tymethod.capacity).
    fn size(&self) -> usize;

    /// Get the number of distinct keys ever updated.
    fn tracked(&self) -> usize;

    /// Update the value of `key`, creating it if needed, and move it to its
    /// new rank. Returns whether the value is ranked after the update.
    fn update_and_rank(&mut self, key: K) -> bool;

    /// Get the value at rank `index`, `0` being the greatest.
    fn ranked_at(&self, index: usize) -> Result<&V, RankError>;

    /// Get the value of a tracked key, whether it is ranked or not.
    fn get(&self, key: &K) -> Option<&V>;

    /// Check if `key` was ever updated.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Check if the value of `key` is currently ranked.
    fn is_ranked(&self, key: &K) -> bool;
}
