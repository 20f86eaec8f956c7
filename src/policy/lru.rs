use super::{Tally, ValuePolicy};

/// Most recently updated first.
///
/// `Lru` stamps every updated [`Tally`](struct.Tally.html) with the next
/// tick of its own clock and ranks tallies by their last stamp.
/// The index ranked with this policy holds the last `capacity` distinct
/// keys that were updated. Two tallies cannot tie once updated.
#[derive(Debug, Clone, Default)]
pub struct Lru {
    tick: u64,
}

impl Lru {
    pub fn new() -> Self {
        Lru { tick: 0 }
    }
}

impl<K: Clone> ValuePolicy<K, Tally<K>> for Lru {
    fn create(&mut self, key: &K) -> Tally<K> {
        Tally::new(key.clone())
    }

    fn increment(&mut self, value: &mut Tally<K>) {
        self.tick += 1;
        value.touch(self.tick);
    }

    fn is_greater(&self, a: &Tally<K>, b: &Tally<K>) -> bool {
        a.last > b.last
    }
}

#[cfg(test)]
mod tests {
    use super::Lru;
    use crate::policy::ValuePolicy;

    #[test]
    fn test_lru_order() {
        let mut p = Lru::new();
        let mut a = p.create(&"a");
        let mut b = p.create(&"b");
        p.increment(&mut a);
        p.increment(&mut b);
        assert!(p.is_greater(&b, &a));
        p.increment(&mut a);
        assert!(p.is_greater(&a, &b));
        assert!(!p.is_greater(&a, &a));
    }
}
