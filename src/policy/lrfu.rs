use super::{Tally, ValuePolicy};

//------------------------------------------------------------------------//
// Least Recently Frequently Used ranking                                 //
//------------------------------------------------------------------------//

/// Ranking policy weighting both frequency and recency of updates.
///
/// Every update of a [`Tally`](struct.Tally.html) adds a weight of one to
/// its score. Older weights are divided by `exponent` for each tick of the
/// policy clock elapsed since they were added:
/// on an update happening at tick `t`, the score becomes
/// `1 + score / exponent^(t - last)`.
///
/// Two tallies are compared after decaying both scores to the tick of the
/// most recently updated one. Since tallies that are not updated decay at
/// the same rate, their relative order never changes between updates.
///
/// The greater the exponent (>>1) the closer to [`Lru`](struct.Lru.html)
/// this policy becomes. With an exponent of 1, weights never decay and
/// this policy ranks like [`Frequency`](struct.Frequency.html).
/// If exponent is < 1, then the policy puts more weight on old updates.
///
/// ## Examples
///
/// ```
/// use ranked_index::BoundedRankedIndex;
/// use ranked_index::policy::Lrfu;
///
/// let mut c = BoundedRankedIndex::new(2, Lrfu::new(1.1));
/// for key in ["a", "a", "a", "b", "c"] {
///     c.update_and_rank(key);
/// }
/// // "a" was frequently updated and keeps its spot. "c" is more recent
/// // than "b".
/// assert_eq!(c.ranked_at(0).unwrap().key(), &"a");
/// assert_eq!(c.ranked_at(1).unwrap().key(), &"c");
/// ```
#[derive(Debug, Clone)]
pub struct Lrfu {
    exponent: f32,
    tick: u64,
}

impl Lrfu {
    /// Construct a Lrfu policy.
    ///
    /// The `exponent` decay must be finite and strictly greater than 0.
    ///
    /// ## Panics
    ///
    /// If `exponent` is not a valid decay.
    pub fn new(exponent: f32) -> Self {
        if !Self::is_valid_exponent(exponent) {
            panic!("Lrfu exponent must be finite and > 0.");
        }
        Lrfu { exponent, tick: 0 }
    }

    /// The decay exponent of this policy.
    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Whether `exponent` can be used to build a Lrfu policy.
    pub fn is_valid_exponent(exponent: f32) -> bool {
        exponent.is_finite() && exponent > 0.0
    }

    /// Divide `score` by the decay accumulated over `elapsed` ticks.
    fn decay(&self, score: f32, elapsed: u64) -> f32 {
        // The decay of a long interval may underflow to 0 when
        // exponent < 1.
        if score == 0.0 || elapsed == 0 {
            return score;
        }
        let elapsed = elapsed.min(i32::MAX as u64) as i32;
        score / self.exponent.powi(elapsed)
    }
}

impl<K: Clone> ValuePolicy<K, Tally<K>> for Lrfu {
    fn create(&mut self, key: &K) -> Tally<K> {
        Tally::new(key.clone())
    }

    fn increment(&mut self, value: &mut Tally<K>) {
        self.tick += 1;
        value.score = 1f32 + self.decay(value.score, self.tick - value.last);
        value.touch(self.tick);
    }

    fn is_greater(&self, a: &Tally<K>, b: &Tally<K>) -> bool {
        if a.last >= b.last {
            a.score > self.decay(b.score, a.last - b.last)
        } else {
            self.decay(a.score, b.last - a.last) > b.score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lrfu;
    use crate::policy::ValuePolicy;

    #[test]
    fn test_lrfu_order() {
        let mut p = Lrfu::new(2.0);
        let mut r0 = p.create(&0u32);
        let mut r1 = p.create(&1u32);
        p.increment(&mut r0);
        p.increment(&mut r1);
        // Same frequency but r1 is more recent.
        assert!(p.is_greater(&r1, &r0));
        p.increment(&mut r0);
        // r0 is the most frequently and recently updated.
        assert!(p.is_greater(&r0, &r1));
        assert!(!p.is_greater(&r1, &r0));
        assert_eq!(r0.score(), 1.25);
    }

    #[test]
    fn test_lrfu_without_decay() {
        let mut p = Lrfu::new(1.0);
        let mut r0 = p.create(&0u32);
        let mut r1 = p.create(&1u32);
        p.increment(&mut r0);
        p.increment(&mut r0);
        p.increment(&mut r1);
        assert!(p.is_greater(&r0, &r1));
        p.increment(&mut r1);
        // Tied: 2 updates each, nothing forgotten.
        assert!(!p.is_greater(&r0, &r1));
        assert!(!p.is_greater(&r1, &r0));
    }

    #[test]
    fn test_lrfu_late_keys_with_small_exponent() {
        for exponent in [0.5f32, 0.9] {
            let mut p = Lrfu::new(exponent);
            for k in 0..1200u32 {
                let mut t = p.create(&k);
                p.increment(&mut t);
                assert_eq!(t.score(), 1.0);
            }
            let mut a = p.create(&5000u32);
            let mut b = p.create(&5001u32);
            p.increment(&mut a);
            p.increment(&mut b);
            assert_eq!(a.score(), 1.0);
            assert_eq!(b.score(), 1.0);
            // Old updates weigh more: a ranks above b.
            assert!(p.is_greater(&a, &b));
            assert!(!p.is_greater(&b, &a));
        }

        // With a mild decay, two close updates outweigh an older one.
        let mut p = Lrfu::new(0.9);
        for k in 0..1200u32 {
            let mut t = p.create(&k);
            p.increment(&mut t);
        }
        let mut a = p.create(&5000u32);
        let mut b = p.create(&5001u32);
        p.increment(&mut a);
        p.increment(&mut b);
        p.increment(&mut b);
        assert!(b.score() > 2.0);
        assert!(p.is_greater(&b, &a));
        assert!(!p.is_greater(&a, &b));
    }

    #[test]
    #[should_panic]
    fn test_lrfu_invalid_exponent() {
        Lrfu::new(0.0);
    }

    #[test]
    #[should_panic]
    fn test_lrfu_nan_exponent() {
        Lrfu::new(f32::NAN);
    }

    #[test]
    fn test_lrfu_valid_exponent() {
        assert!(Lrfu::is_valid_exponent(0.5));
        assert!(Lrfu::is_valid_exponent(2.0));
        assert!(!Lrfu::is_valid_exponent(0.0));
        assert!(!Lrfu::is_valid_exponent(-1.0));
        assert!(!Lrfu::is_valid_exponent(f32::NAN));
        assert!(!Lrfu::is_valid_exponent(f32::INFINITY));
    }
}
