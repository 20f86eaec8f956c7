use super::ValuePolicy;
use std::marker::PhantomData;

/// [`ValuePolicy`](trait.ValuePolicy.html) made of three closures.
///
/// * `create`: build the value of a new key,
/// * `increment`: mutate a value on update,
/// * `is_greater`: strict ordering of values.
///
/// ## Examples
///
/// ```
/// use ranked_index::BoundedRankedIndex;
/// use ranked_index::policy::FnPolicy;
///
/// // Rank words by their total length seen so far.
/// let policy = FnPolicy::new(
///     |k: &&str| (k.to_string(), 0usize),
///     |v: &mut (String, usize)| v.1 += v.0.len(),
///     |a: &(String, usize), b: &(String, usize)| a.1 > b.1,
/// );
/// let mut c = BoundedRankedIndex::new(1, policy);
/// c.update_and_rank("tiny");
/// c.update_and_rank("enormous");
/// assert_eq!(c.ranked_at(0).unwrap().0, "enormous");
/// ```
pub struct FnPolicy<K, V, C, I, G>
where
    C: FnMut(&K) -> V,
    I: FnMut(&mut V),
    G: Fn(&V, &V) -> bool,
{
    create: C,
    increment: I,
    is_greater: G,
    unused: PhantomData<(K, V)>,
}

impl<K, V, C, I, G> FnPolicy<K, V, C, I, G>
where
    C: FnMut(&K) -> V,
    I: FnMut(&mut V),
    G: Fn(&V, &V) -> bool,
{
    pub fn new(create: C, increment: I, is_greater: G) -> Self {
        FnPolicy {
            create,
            increment,
            is_greater,
            unused: PhantomData,
        }
    }
}

impl<K, V, C, I, G> ValuePolicy<K, V> for FnPolicy<K, V, C, I, G>
where
    C: FnMut(&K) -> V,
    I: FnMut(&mut V),
    G: Fn(&V, &V) -> bool,
{
    fn create(&mut self, key: &K) -> V {
        (self.create)(key)
    }

    fn increment(&mut self, value: &mut V) {
        (self.increment)(value)
    }

    fn is_greater(&self, a: &V, b: &V) -> bool {
        (self.is_greater)(a, b)
    }
}

impl<K, V, C, I, G> Clone for FnPolicy<K, V, C, I, G>
where
    C: FnMut(&K) -> V + Clone,
    I: FnMut(&mut V) + Clone,
    G: Fn(&V, &V) -> bool + Clone,
{
    fn clone(&self) -> Self {
        FnPolicy {
            create: self.create.clone(),
            increment: self.increment.clone(),
            is_greater: self.is_greater.clone(),
            unused: PhantomData,
        }
    }
}
