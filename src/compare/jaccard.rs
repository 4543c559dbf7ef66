//! Jaccard index over item-id sets, plus the symmetric pair memo.

use std::collections::{HashMap, HashSet};

/// Jaccard similarity between two item-id sets: |A ∩ B| / |A ∪ B|.
///
/// The intersection is counted by probing the smaller set against the larger,
/// and the union size is derived as |A| + |B| − |A ∩ B|, so neither set is
/// materialized. Identical sets score exactly `1.0`, disjoint sets exactly
/// `0.0`. Two empty sets are considered identical and score `1.0`.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let intersection = small.iter().filter(|item| large.contains(*item)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 1.0;
    }
    intersection as f64 / union as f64
}

/// Memo of pairwise Jaccard values for one comparison run.
///
/// Keyed by `(cluster-index-1, cluster-index-2)`; every value is stored under
/// both orders, so the memo behaves as if keyed by an unordered pair. Private
/// to a single comparison and never reused across runs.
#[derive(Debug, Default)]
pub(crate) struct PairCache {
    values: HashMap<(usize, usize), f64>,
}

impl PairCache {
    /// Return the memoized value for `(a, b)`, computing and storing it (under
    /// both orders) on first sight.
    pub(crate) fn get_or_compute(
        &mut self,
        a: usize,
        b: usize,
        compute: impl FnOnce() -> f64,
    ) -> f64 {
        if let Some(&value) = self.values.get(&(a, b)) {
            return value;
        }

        let value = compute();
        self.values.insert((a, b), value);
        self.values.insert((b, a), value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_jaccard_disjoint_is_zero() {
        assert_eq!(jaccard(&set(&["a", "b"]), &set(&["c", "d"])), 0.0);
    }

    #[test]
    fn test_jaccard_identical_singletons_is_one() {
        assert_eq!(jaccard(&set(&["x"]), &set(&["x"])), 1.0);
    }

    #[test]
    fn test_jaccard_identical_sets_is_one() {
        let s = set(&["a", "b", "c"]);
        assert_eq!(jaccard(&s, &s), 1.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // {x, y} vs {x, y, z}: intersection 2, union 3.
        let j = jaccard(&set(&["x", "y"]), &set(&["x", "y", "z"]));
        assert_eq!(j, 2.0 / 3.0);
    }

    #[test]
    fn test_jaccard_symmetric() {
        let a = set(&["a", "b", "c"]);
        let b = set(&["b", "c", "d", "e"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn test_jaccard_both_empty() {
        assert_eq!(jaccard(&set(&[]), &set(&[])), 1.0);
    }

    #[test]
    fn test_cache_computes_once_per_pair() {
        let mut cache = PairCache::default();
        let mut calls = 0;

        let first = cache.get_or_compute(3, 7, || {
            calls += 1;
            0.25
        });
        let again = cache.get_or_compute(3, 7, || {
            calls += 1;
            0.99
        });
        // Symmetric lookup also hits the memo.
        let flipped = cache.get_or_compute(7, 3, || {
            calls += 1;
            0.99
        });

        assert_eq!(calls, 1);
        assert_eq!(first.to_bits(), again.to_bits());
        assert_eq!(first.to_bits(), flipped.to_bits());
    }

    #[test]
    fn test_cache_distinct_pairs_are_independent() {
        let mut cache = PairCache::default();
        cache.get_or_compute(0, 1, || 0.5);
        let other = cache.get_or_compute(0, 2, || 0.75);
        assert_eq!(other, 0.75);
    }
}
