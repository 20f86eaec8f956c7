use super::Profiler;
use crate::{Rank, RankError};
use std::time::Instant;

impl<K, V, R> Rank<K, V> for Profiler<R>
where
    R: Rank<K, V>,
{
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn tracked(&self) -> usize {
        self.inner.tracked()
    }

    fn update_and_rank(&mut self, key: K) -> bool {
        let created = !self.inner.contains(&key);
        let was_ranked = !created && self.inner.is_ranked(&key);
        let was_full = self.inner.size() == self.inner.capacity();

        let t0 = Instant::now();
        let ranked = self.inner.update_and_rank(key);
        let t1 = Instant::now();
        self.stats
            .update_and_rank
            .add(1, (t1 - t0).as_nanos());

        if created {
            self.stats.created.add(1, 0);
        }
        if ranked {
            self.stats.entered.add(1, 0);
            if was_full && !was_ranked {
                self.stats.evicted.add(1, 0);
            }
        } else {
            self.stats.rejected.add(1, 0);
        }
        ranked
    }

    fn ranked_at(&self, index: usize) -> Result<&V, RankError> {
        let t0 = Instant::now();
        let out = self.inner.ranked_at(index);
        let t1 = Instant::now();
        self.stats.ranked_at.add(1, (t1 - t0).as_nanos());
        if out.is_err() {
            self.stats.invalid_index.add(1, 0);
        }
        out
    }

    fn get(&self, key: &K) -> Option<&V> {
        let t0 = Instant::now();
        let out = self.inner.get(key);
        let t1 = Instant::now();
        self.stats.get.add(1, (t1 - t0).as_nanos());
        out
    }

    fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    fn is_ranked(&self, key: &K) -> bool {
        self.inner.is_ranked(key)
    }
}
