use super::{Tally, ValuePolicy};

/// Count-by-key ranking policy.
///
/// `Frequency` ranks [tallies](struct.Tally.html) by their number of
/// updates: the key updated the most ranks first.
/// Keys updated the same number of times are tied and the index keeps them
/// in the order they reached that count.
///
/// ## Examples
///
/// ```
/// use ranked_index::BoundedRankedIndex;
/// use ranked_index::policy::Frequency;
///
/// let mut c = BoundedRankedIndex::new(2, Frequency::new());
/// assert!(c.update_and_rank("a"));
/// assert!(c.update_and_rank("b"));
///
/// // "c" ties with "a" and "b" and there is no room left.
/// assert!(!c.update_and_rank("c"));
///
/// // "c" now beats both and "b" falls out.
/// assert!(c.update_and_rank("c"));
/// assert_eq!(c.ranked_at(0).unwrap().key(), &"c");
/// assert_eq!(c.ranked_at(1).unwrap().key(), &"a");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Frequency {
    tick: u64,
}

impl Frequency {
    pub fn new() -> Self {
        Frequency { tick: 0 }
    }
}

impl<K: Clone> ValuePolicy<K, Tally<K>> for Frequency {
    fn create(&mut self, key: &K) -> Tally<K> {
        Tally::new(key.clone())
    }

    fn increment(&mut self, value: &mut Tally<K>) {
        self.tick += 1;
        value.touch(self.tick);
    }

    fn is_greater(&self, a: &Tally<K>, b: &Tally<K>) -> bool {
        a.hits > b.hits
    }
}
