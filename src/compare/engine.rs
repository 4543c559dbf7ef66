//! The comparison engine: per-item enumeration, memoized scoring, aggregation.

use std::collections::HashSet;
use std::fmt;

use super::jaccard::{jaccard, PairCache};
use crate::error::{Error, Result};
use crate::partition::{MembershipIndex, Partition};

/// Outcome of comparing two partitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// Arithmetic mean of the per-item Jaccard similarities.
    ///
    /// `1.0` means every item sits in identical clusters on both sides.
    pub mean_similarity: f64,

    /// Number of distinct cluster slots that took part in at least one
    /// imperfect (Jaccard < 1) pair.
    ///
    /// Slots from both partitions are collected into a single set, so index
    /// `k` of partition 1 and index `k` of partition 2 count once.
    pub disagreements: usize,

    /// Number of items enumerated (the size of partition 1's item universe).
    pub items: usize,
}

/// Compare two partitions given prebuilt membership indexes.
///
/// Enumerates every item of `index1`, resolves the cluster holding it on each
/// side, and scores the cluster pair with [`jaccard`], memoized per distinct
/// pair of cluster indexes. The enumeration domain is partition 1's items:
/// items unique to partition 2 are never visited, while an item of partition 1
/// missing from partition 2 aborts the comparison. Callers wanting a
/// symmetric check can run both argument orders; the means agree whenever the
/// item universes match.
///
/// # Errors
///
/// - [`Error::EmptyPartition`] if either partition or index is empty.
/// - [`Error::MissingItem`] if an item of partition 1 has no entry in
///   `index2`.
///
/// # Example
///
/// ```rust
/// use concord::{compare, MembershipIndex, Partition};
///
/// let p1 = Partition::from_assignments([("x", "a"), ("y", "a"), ("z", "b")]);
/// let p2 = Partition::from_assignments([("x", "c"), ("y", "c"), ("z", "c")]);
/// let i1 = MembershipIndex::build(&p1).unwrap();
/// let i2 = MembershipIndex::build(&p2).unwrap();
///
/// let result = compare(&p1, &p2, &i1, &i2).unwrap();
/// assert!((result.mean_similarity - 5.0 / 9.0).abs() < 1e-12);
/// assert_eq!(result.disagreements, 2);
/// ```
pub fn compare(
    partition1: &Partition,
    partition2: &Partition,
    index1: &MembershipIndex,
    index2: &MembershipIndex,
) -> Result<Comparison> {
    compare_observed(partition1, partition2, index1, index2, None)
}

/// Type of progress observers: `(items processed, items total)`.
type ProgressFn = dyn Fn(usize, usize);

fn compare_observed(
    partition1: &Partition,
    partition2: &Partition,
    index1: &MembershipIndex,
    index2: &MembershipIndex,
    progress: Option<(usize, &ProgressFn)>,
) -> Result<Comparison> {
    if partition1.is_empty() || index1.is_empty() || partition2.is_empty() || index2.is_empty() {
        return Err(Error::EmptyPartition);
    }

    let clusters1 = partition1.clusters();
    let clusters2 = partition2.clusters();
    let total = index1.len();

    let mut cache = PairCache::default();
    let mut sum = 0.0;
    let mut processed = 0usize;
    let mut disagreeing: HashSet<usize> = HashSet::new();

    for (item, idx1) in index1.items() {
        let idx2 = index2.get(item).ok_or_else(|| Error::MissingItem {
            item: item.to_string(),
            partition: 2,
        })?;

        let score =
            cache.get_or_compute(idx1, idx2, || jaccard(&clusters1[idx1], &clusters2[idx2]));

        sum += score;
        processed += 1;
        if score < 1.0 {
            disagreeing.insert(idx1);
            disagreeing.insert(idx2);
        }

        if let Some((every, observe)) = progress {
            if every > 0 && processed % every == 0 {
                observe(processed, total);
            }
        }
    }

    if let Some((_, observe)) = progress {
        observe(processed, total);
    }

    Ok(Comparison {
        mean_similarity: sum / processed as f64,
        disagreements: disagreeing.len(),
        items: processed,
    })
}

/// Builder-style front-end that indexes both partitions and runs [`compare`].
///
/// The engine itself performs no I/O and keeps no state between runs; if the
/// caller wants progress lines for long comparisons, it installs an observer
/// here and the engine calls it at the configured cadence.
///
/// ```rust
/// use concord::{Comparer, Partition};
///
/// let p1 = Partition::from_assignments([("x", "a"), ("y", "b")]);
/// let p2 = Partition::from_assignments([("x", "c"), ("y", "d")]);
///
/// let result = Comparer::new()
///     .with_progress(10_000, |done, total| eprintln!("{done}/{total}"))
///     .compare(&p1, &p2)
///     .unwrap();
/// assert_eq!(result.mean_similarity, 1.0);
/// ```
#[derive(Default)]
pub struct Comparer {
    progress_every: usize,
    progress: Option<Box<ProgressFn>>,
}

impl Comparer {
    /// Create a comparer with no progress observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a progress observer.
    ///
    /// `observe(processed, total)` is called after every `every` items and
    /// once more at completion. An `every` of 0 reports only at completion.
    pub fn with_progress(mut self, every: usize, observe: impl Fn(usize, usize) + 'static) -> Self {
        self.progress_every = every;
        self.progress = Some(Box::new(observe));
        self
    }

    /// Build both membership indexes and compare the partitions.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateItem`] from indexing, plus everything [`compare`]
    /// returns.
    pub fn compare(&self, partition1: &Partition, partition2: &Partition) -> Result<Comparison> {
        let index1 = MembershipIndex::build(partition1)?;
        let index2 = MembershipIndex::build(partition2)?;

        compare_observed(
            partition1,
            partition2,
            &index1,
            &index2,
            self.progress
                .as_deref()
                .map(|observe| (self.progress_every, observe)),
        )
    }
}

impl fmt::Debug for Comparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparer")
            .field("progress_every", &self.progress_every)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
