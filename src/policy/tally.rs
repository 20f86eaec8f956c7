/// Value tracked by the policies of this crate.
///
/// A tally remembers the key it was created for, how many times it was
/// updated, and when it was last updated on the clock of the policy that
/// owns it. The `score` is left to the policy: [`Lrfu`](struct.Lrfu.html)
/// stores its decayed access weight there, other policies leave it to 0.
///
/// Tallies are only created and mutated by policies. Users read them back
/// from the index with
/// [`ranked_at()`](../struct.BoundedRankedIndex.html#method.ranked_at) or
/// [`get()`](../struct.BoundedRankedIndex.html#method.get).
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<K> {
    pub(super) key: K,
    pub(super) hits: u64,
    pub(super) score: f32,
    pub(super) last: u64,
}

impl<K> Tally<K> {
    /// A tally for `key` that has never been updated.
    pub fn new(key: K) -> Self {
        Tally {
            key,
            hits: 0,
            score: 0f32,
            last: 0,
        }
    }

    /// The key this tally was created for.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Number of times this tally was incremented.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Policy defined score.
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Policy clock tick of the last increment.
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Record one update happening at `tick`.
    pub(super) fn touch(&mut self, tick: u64) {
        self.hits += 1;
        self.last = tick;
    }
}
