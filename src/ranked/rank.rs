use super::BoundedRankedIndex;
use crate::policy::ValuePolicy;
use crate::{Rank, RankError};
use std::hash::Hash;

impl<K, V, P> Rank<K, V> for BoundedRankedIndex<K, V, P>
where
    K: Eq + Hash,
    P: ValuePolicy<K, V>,
{
    fn capacity(&self) -> usize {
        BoundedRankedIndex::capacity(self)
    }

    fn size(&self) -> usize {
        BoundedRankedIndex::size(self)
    }

    fn tracked(&self) -> usize {
        BoundedRankedIndex::tracked(self)
    }

    fn update_and_rank(&mut self, key: K) -> bool {
        BoundedRankedIndex::update_and_rank(self, key)
    }

    fn ranked_at(&self, index: usize) -> Result<&V, RankError> {
        BoundedRankedIndex::ranked_at(self, index)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BoundedRankedIndex::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        BoundedRankedIndex::contains(self, key)
    }

    fn is_ranked(&self, key: &K) -> bool {
        BoundedRankedIndex::is_ranked(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::BoundedRankedIndex;
    use crate::policy::{Frequency, Lrfu, Lru};
    use crate::tests::test_rank;

    #[test]
    fn rank_frequency() {
        for capacity in [1, 10, 100] {
            test_rank(
                BoundedRankedIndex::new(capacity, Frequency::new()),
                Frequency::new(),
            );
        }
    }

    #[test]
    fn rank_lru() {
        for capacity in [1, 10, 100] {
            test_rank(BoundedRankedIndex::new(capacity, Lru::new()), Lru::new());
        }
    }

    #[test]
    fn rank_lrfu() {
        for (capacity, exponent) in [(1, 1.0), (10, 2.0), (100, 4.0)] {
            test_rank(
                BoundedRankedIndex::new(capacity, Lrfu::new(exponent)),
                Lrfu::new(exponent),
            );
        }
    }
}
