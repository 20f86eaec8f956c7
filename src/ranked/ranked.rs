use crate::policy::ValuePolicy;
use crate::RankError;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

/// In-memory index of keyed values keeping the top `capacity` values
/// ranked.
///
/// [`BoundedRankedIndex`] is built on top of a [`std::collections::HashMap`]
/// mapping every key ever seen to its value, and of a
/// [`std::vec::Vec`] of at most `capacity` values sorted in descending
/// order. The order, the creation and the mutation of values are delegated
/// to a [`ValuePolicy`](policy/trait.ValuePolicy.html).
///
/// Values are stored once, in slots. The map and the ranked sequence refer
/// to values by slot, such that a value is moved within the ranking by
/// identity and two keys with equal values are never confused.
///
/// * Update complexity is `$O(capacity)$`.
/// The ranked values are walked to find the new position of the updated
/// value.
/// * Keys lookup complexity is `$O(1)$` on average.
/// * Rank lookup complexity is `$O(1)$`.
/// * Capacity, size and tracked count queries are `$O(1)$`.
///
/// Keys are never forgotten: a key pushed out of the ranking keeps its
/// value and competes again with it on its next update.
///
/// ## Examples
///
/// ```
/// use ranked_index::BoundedRankedIndex;
/// use ranked_index::policy::Frequency;
///
/// // Keep the 2 most frequent words.
/// let mut c = BoundedRankedIndex::new(2, Frequency::new());
/// for word in "the cat and the dog and the bird".split(' ') {
///     c.update_and_rank(word);
/// }
///
/// assert_eq!(c.size(), 2);
/// assert_eq!(c.tracked(), 5);
/// assert_eq!(c.ranked_at(0).unwrap().key(), &"the");
/// assert_eq!(c.ranked_at(1).unwrap().key(), &"and");
/// assert!(c.ranked_at(2).is_err());
///
/// // "cat" is not ranked anymore but it is still tracked.
/// assert!(!c.is_ranked(&"cat"));
/// assert_eq!(c.get(&"cat").unwrap().hits(), 1);
/// ```
///
/// [`BoundedRankedIndex`] can also be built from a
/// [builder pattern](builder/struct.RankedIndexBuilder.html) and, with the
/// `config` feature, from a
/// [configuration](config/struct.RankedIndexConfig.html).
#[derive(Clone)]
pub struct BoundedRankedIndex<K, V, P> {
    pub(super) capacity: usize,
    pub(super) policy: P,
    // Every value ever created, addressed by slot.
    pub(super) slots: Vec<V>,
    // Lookup index: key to slot.
    pub(super) index: HashMap<K, usize>,
    // Slots of the ranked values, greatest first.
    pub(super) ranked: Vec<usize>,
}

impl<K, V, P> BoundedRankedIndex<K, V, P> {
    /// Create an index ranking at most `capacity` values with `policy`.
    ///
    /// ## Panics
    ///
    /// If `capacity` is 0.
    pub fn new(capacity: usize, policy: P) -> Self {
        match Self::try_new(capacity, policy) {
            Ok(c) => c,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create an index ranking at most `capacity` values with `policy`,
    /// or fail with [`RankError::InvalidCapacity`] if `capacity` is 0.
    pub fn try_new(capacity: usize, policy: P) -> Result<Self, RankError> {
        if capacity == 0 {
            return Err(RankError::InvalidCapacity);
        }
        Ok(BoundedRankedIndex {
            capacity,
            policy,
            slots: Vec::new(),
            index: HashMap::new(),
            ranked: Vec::with_capacity(capacity + 1),
        })
    }

    /// Get the maximum number of ranked values.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of ranked values. This is always in
    /// `[0, capacity]`.
    pub fn size(&self) -> usize {
        self.ranked.len()
    }

    /// Get the number of distinct keys ever updated.
    pub fn tracked(&self) -> usize {
        self.slots.len()
    }

    /// Get the value at rank `index`, `0` being the greatest value.
    pub fn ranked_at(&self, index: usize) -> Result<&V, RankError> {
        match self.ranked.get(index) {
            Some(&slot) => Ok(&self.slots[slot]),
            None => Err(RankError::InvalidIndex {
                index,
                size: self.ranked.len(),
            }),
        }
    }

    /// Get the policy ranking this index.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<K, V, P> BoundedRankedIndex<K, V, P>
where
    K: Eq + Hash,
    P: ValuePolicy<K, V>,
{
    /// Update the value of `key` and move it to its new rank.
    ///
    /// If `key` was never seen, its value is first created by the policy.
    /// The value is then incremented by the policy, taken out of the
    /// ranking if it was ranked, and inserted back before the first ranked
    /// value it is strictly greater than. Values equal to it keep their
    /// rank ahead of it. If the ranking overflows, its lowest value is
    /// dropped.
    ///
    /// Returns whether the value is ranked after the update. This is
    /// `false` only when the ranking is full and the value is not greater
    /// than any of the ranked values.
    pub fn update_and_rank(&mut self, key: K) -> bool {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.slots.len();
                self.slots.push(self.policy.create(&key));
                self.index.insert(key, slot);
                slot
            }
        };

        self.policy.increment(&mut self.slots[slot]);

        // The value changed. Its previous rank may not hold anymore.
        if let Some(i) = self.ranked.iter().position(|&s| s == slot) {
            self.ranked.remove(i);
        }

        let (policy, slots) = (&self.policy, &self.slots);
        let value = &slots[slot];
        let position = self
            .ranked
            .iter()
            .position(|&s| policy.is_greater(value, &slots[s]));

        match position {
            Some(i) => {
                self.ranked.insert(i, slot);
                self.ranked.truncate(self.capacity);
                true
            }
            None if self.ranked.len() < self.capacity => {
                self.ranked.push(slot);
                true
            }
            None => false,
        }
    }

    /// Get the value of a tracked key, whether it is ranked or not.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.slots[slot])
    }

    /// Check if `key` was ever updated.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Check if the value of `key` is currently ranked.
    pub fn is_ranked(&self, key: &K) -> bool {
        match self.index.get(key) {
            None => false,
            Some(slot) => self.ranked.contains(slot),
        }
    }
}

/// Rank lookup failing fast.
///
/// ## Panics
///
/// If `index` is not lower than [`size()`](#method.size).
impl<K, V, P> Index<usize> for BoundedRankedIndex<K, V, P> {
    type Output = V;

    fn index(&self, index: usize) -> &Self::Output {
        match self.ranked_at(index) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoundedRankedIndex;
    use crate::policy::{FnPolicy, Frequency, Tally};
    use crate::RankError;

    fn keys<'a>(
        c: &BoundedRankedIndex<
            &'a str,
            Tally<&'a str>,
            Frequency,
        >,
    ) -> Vec<(&'a str, u64)> {
        (0..c.size())
            .map(|i| {
                let t = c.ranked_at(i).unwrap();
                (*t.key(), t.hits())
            })
            .collect()
    }

    #[test]
    fn test_scenario() {
        let mut c = BoundedRankedIndex::new(2, Frequency::new());
        assert!(c.update_and_rank("a"));
        assert_eq!(keys(&c), vec![("a", 1)]);
        assert!(c.update_and_rank("b"));
        assert_eq!(keys(&c), vec![("a", 1), ("b", 1)]);
        assert!(!c.update_and_rank("c"));
        assert_eq!(keys(&c), vec![("a", 1), ("b", 1)]);
        assert!(c.update_and_rank("c"));
        assert_eq!(keys(&c), vec![("c", 2), ("a", 1)]);
        assert_eq!(c.size(), 2);
        assert_eq!(c.tracked(), 3);
        assert_eq!(c[0].key(), &"c");
        assert_eq!(c[1].key(), &"a");
    }

    #[test]
    fn test_ties_keep_prior_order() {
        let mut c = BoundedRankedIndex::new(3, Frequency::new());
        c.update_and_rank("a");
        c.update_and_rank("b");
        c.update_and_rank("c");
        // "a" reaches 2, then "c" reaches 2 and lands behind "a".
        c.update_and_rank("a");
        c.update_and_rank("c");
        assert_eq!(keys(&c), vec![("a", 2), ("c", 2), ("b", 1)]);
    }

    #[test]
    fn test_reinsert_ranked_value() {
        let mut c = BoundedRankedIndex::new(2, Frequency::new());
        for _ in 0..5 {
            assert!(c.update_and_rank("a"));
            assert_eq!(c.size(), 1);
        }
        assert_eq!(keys(&c), vec![("a", 5)]);
    }

    #[test]
    fn test_evicted_value_is_remembered() {
        let mut c = BoundedRankedIndex::new(1, Frequency::new());
        c.update_and_rank("a");
        c.update_and_rank("b");
        c.update_and_rank("b");
        assert_eq!(keys(&c), vec![("b", 2)]);
        assert!(c.contains(&"a"));
        assert!(!c.is_ranked(&"a"));
        // "a" picks up from its previous count.
        assert!(!c.update_and_rank("a"));
        assert!(c.update_and_rank("a"));
        assert_eq!(keys(&c), vec![("a", 3)]);
    }

    #[test]
    fn test_equal_values_of_distinct_keys() {
        // Values only hold a count. Keys with equal counts have equal
        // values and must still be moved independently.
        let policy = FnPolicy::new(
            |_: &u8| 0u32,
            |v: &mut u32| *v += 1,
            |a: &u32, b: &u32| a > b,
        );
        let mut c = BoundedRankedIndex::new(3, policy);
        c.update_and_rank(1);
        c.update_and_rank(2);
        c.update_and_rank(2);
        c.update_and_rank(1);
        assert_eq!(c.size(), 2);
        assert_eq!(c[0], 2);
        assert_eq!(c[1], 2);
        assert_eq!(c.tracked(), 2);
    }

    #[test]
    fn test_invalid_index() {
        let mut c: BoundedRankedIndex<u32, Tally<u32>, _> =
            BoundedRankedIndex::new(2, Frequency::new());
        assert_eq!(
            c.ranked_at(0),
            Err(RankError::InvalidIndex { index: 0, size: 0 })
        );
        c.update_and_rank(7);
        assert!(c.ranked_at(0).is_ok());
        assert_eq!(
            c.ranked_at(1),
            Err(RankError::InvalidIndex { index: 1, size: 1 })
        );
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let c = BoundedRankedIndex::<u32, Tally<u32>, _>::new(
            2,
            Frequency::new(),
        );
        let _ = &c[0];
    }

    #[test]
    fn test_invalid_capacity() {
        assert!(matches!(
            BoundedRankedIndex::<u32, Tally<u32>, _>::try_new(
                0,
                Frequency::new()
            ),
            Err(RankError::InvalidCapacity)
        ));
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        BoundedRankedIndex::<u32, Tally<u32>, _>::new(
            0,
            Frequency::new(),
        );
    }
}
