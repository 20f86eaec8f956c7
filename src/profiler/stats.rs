use std::sync::atomic::{AtomicU64, Ordering};

/// Accumulator of call count and elapsed time.
pub(super) struct MethodStats {
    // The total number of call.
    count: AtomicU64,
    // The total elapsed time for the calls.
    elapsed: AtomicU64,
}

impl MethodStats {
    /// Create zeroed MethodStats.
    pub fn new() -> Self {
        MethodStats {
            count: AtomicU64::new(0),
            elapsed: AtomicU64::new(0),
        }
    }

    /// Reinitialize values to 0.
    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
        self.elapsed.store(0, Ordering::Relaxed);
    }

    /// Accumulate count and elapsed time.
    pub fn add(&self, count: u64, elapsed: u128) {
        self.count.fetch_add(count, Ordering::Relaxed);
        self.elapsed.fetch_add(elapsed as u64, Ordering::Relaxed);
    }

    /// Get (count, time) stats.
    pub fn read(&self) -> (u64, u64) {
        let count = self.count.load(Ordering::Relaxed);
        let elapsed = self.elapsed.load(Ordering::Relaxed);
        (count, elapsed)
    }
}

/// Accumulator of ranked index method stats and events.
pub(super) struct Stats {
    pub update_and_rank: MethodStats,
    pub ranked_at: MethodStats,
    pub get: MethodStats,
    pub created: MethodStats,
    pub entered: MethodStats,
    pub rejected: MethodStats,
    pub evicted: MethodStats,
    pub invalid_index: MethodStats,
}

impl Stats {
    /// Initialize zeroed method stats.
    pub fn new() -> Self {
        Stats {
            update_and_rank: MethodStats::new(),
            ranked_at: MethodStats::new(),
            get: MethodStats::new(),
            created: MethodStats::new(),
            entered: MethodStats::new(),
            rejected: MethodStats::new(),
            evicted: MethodStats::new(),
            invalid_index: MethodStats::new(),
        }
    }

    /// Reinitialize values to 0.
    pub fn reset(&self) {
        self.update_and_rank.reset();
        self.ranked_at.reset();
        self.get.reset();
        self.created.reset();
        self.entered.reset();
        self.rejected.reset();
        self.evicted.reset();
        self.invalid_index.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::MethodStats;

    #[test]
    fn test_method_stats() {
        let s = MethodStats::new();
        s.add(1, 10);
        s.add(2, 5);
        assert_eq!(s.read(), (3, 15));
        s.reset();
        assert_eq!(s.read(), (0, 0));
    }
}
