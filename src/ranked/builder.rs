use super::BoundedRankedIndex;
use crate::builder::{Build, ProfilerBuilder};
use crate::profiler::ProfilerOutputKind;
use std::marker::PhantomData;

/// `BoundedRankedIndex` builder.
///
/// This builder can be consumed later to spawn a
/// [`BoundedRankedIndex`](../struct.BoundedRankedIndex.html).
///
/// ## Examples
/// ```
/// use ranked_index::builder::{Build, RankedIndexBuilder};
/// use ranked_index::policy::Lru;
///
/// let mut c = RankedIndexBuilder::new(2, Lru::new()).build();
/// c.update_and_rank(1);
/// ```
pub struct RankedIndexBuilder<K, V, P> {
    pub(super) capacity: usize,
    pub(super) policy: P,
    unused: PhantomData<(K, V)>,
}

impl<K, V, P> RankedIndexBuilder<K, V, P> {
    /// The index spawned by this builder will rank up to `capacity`
    /// values with `policy`.
    pub fn new(capacity: usize, policy: P) -> Self {
        RankedIndexBuilder {
            capacity,
            policy,
            unused: PhantomData,
        }
    }

    /// Wrap the index spawned by this builder into a
    /// [`Profiler`](../struct.Profiler.html).
    pub fn profile(
        self,
        name: &str,
        output: ProfilerOutputKind,
    ) -> ProfilerBuilder<BoundedRankedIndex<K, V, P>, Self> {
        ProfilerBuilder::new(name, output, self)
    }
}

impl<K, V, P: Clone> Clone for RankedIndexBuilder<K, V, P> {
    fn clone(&self) -> Self {
        RankedIndexBuilder {
            capacity: self.capacity,
            policy: self.policy.clone(),
            unused: PhantomData,
        }
    }
}

impl<K, V, P> Build<BoundedRankedIndex<K, V, P>>
    for RankedIndexBuilder<K, V, P>
{
    /// ## Panics
    ///
    /// If the builder capacity is 0.
    fn build(self) -> BoundedRankedIndex<K, V, P> {
        BoundedRankedIndex::new(self.capacity, self.policy)
    }
}
