use rand::random;
use ranked_index::policy::{Frequency, Lrfu, Lru, Tally};
use ranked_index::{BoundedRankedIndex, Rank, RankError};
use std::collections::VecDeque;

fn ranked_keys<R: Rank<u32, Tally<u32>>>(c: &R) -> Vec<u32> {
    (0..c.size())
        .map(|i| *c.ranked_at(i).unwrap().key())
        .collect()
}

#[test]
fn frequency_scenario() {
    let mut c = BoundedRankedIndex::new(2, Frequency::new());
    assert!(c.update_and_rank("a"));
    assert!(c.update_and_rank("b"));
    assert!(!c.update_and_rank("c"));
    assert_eq!(c.size(), 2);
    assert!(c.update_and_rank("c"));
    assert_eq!(c.size(), 2);

    let first = c.ranked_at(0).unwrap();
    assert_eq!((*first.key(), first.hits()), ("c", 2));
    let second = c.ranked_at(1).unwrap();
    assert_eq!((*second.key(), second.hits()), ("a", 1));
    assert_eq!(
        c.ranked_at(2).unwrap_err(),
        RankError::InvalidIndex { index: 2, size: 2 }
    );
    assert!(c.contains(&"b"));
    assert!(!c.is_ranked(&"b"));
}

#[test]
fn frequency_unranked_never_beat_ranked() {
    for capacity in [1usize, 4, 16] {
        let num_keys = 4 * capacity as u32 + 3;
        let mut c = BoundedRankedIndex::new(capacity, Frequency::new());
        for _ in 0..(50 * capacity) {
            c.update_and_rank(random::<u32>() % num_keys);
        }
        let lowest = c.ranked_at(c.size() - 1).unwrap().hits();
        for key in 0..num_keys {
            if let Some(v) = c.get(&key) {
                if !c.is_ranked(&key) {
                    assert!(v.hits() <= lowest);
                }
            }
        }
        let total: u64 =
            (0..num_keys).filter_map(|k| c.get(&k)).map(|v| v.hits()).sum();
        assert_eq!(total, 50 * capacity as u64);
    }
}

#[test]
fn lru_ranks_last_distinct_keys() {
    for capacity in [1usize, 3, 32] {
        let mut c = BoundedRankedIndex::new(capacity, Lru::new());
        let mut model: VecDeque<u32> = VecDeque::new();
        for _ in 0..(20 * capacity) {
            let key = random::<u32>() % (3 * capacity as u32);
            assert!(c.update_and_rank(key));
            model.retain(|&k| k != key);
            model.push_front(key);
            model.truncate(capacity);
            assert_eq!(ranked_keys(&c), Vec::from(model.clone()));
        }
    }
}

#[test]
fn lrfu_with_unit_exponent_ranks_like_frequency() {
    let mut lfu = BoundedRankedIndex::new(8, Frequency::new());
    let mut lrfu = BoundedRankedIndex::new(8, Lrfu::new(1.0));
    for _ in 0..500 {
        let key = random::<u32>() % 40;
        assert_eq!(lfu.update_and_rank(key), lrfu.update_and_rank(key));
    }
    assert_eq!(ranked_keys(&lfu), ranked_keys(&lrfu));
}

#[test]
fn lrfu_with_large_exponent_ranks_like_lru() {
    let mut lru = BoundedRankedIndex::new(8, Lru::new());
    let mut lrfu = BoundedRankedIndex::new(8, Lrfu::new(1024.0));
    for _ in 0..500 {
        let key = random::<u32>() % 40;
        assert_eq!(lru.update_and_rank(key), lrfu.update_and_rank(key));
    }
    assert_eq!(ranked_keys(&lru), ranked_keys(&lrfu));
}

#[test]
fn lrfu_small_exponent_ranks_late_keys() {
    let mut c = BoundedRankedIndex::new(1300, Lrfu::new(0.9));
    for key in 0..1200u32 {
        assert!(c.update_and_rank(key));
    }
    assert!(c.update_and_rank(5000));
    assert!(c.update_and_rank(5001));
    assert_eq!(c.get(&5000).unwrap().score(), 1.0);
    assert_eq!(c.get(&5001).unwrap().score(), 1.0);
    assert_eq!(ranked_keys(&c)[1200..], [5000, 5001]);

    // Two close updates outweigh an older single one.
    assert!(c.update_and_rank(5001));
    assert_eq!(ranked_keys(&c)[1200..], [5001, 5000]);
    assert!((0..c.size()).all(|i| !c.ranked_at(i).unwrap().score().is_nan()));
}
