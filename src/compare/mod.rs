//! Partition comparison: memoized per-item Jaccard similarity.
//!
//! Given two partitions of the same item universe, the engine walks every
//! item of the first partition, looks up the cluster holding it on each side,
//! and scores the cluster pair with the Jaccard index (intersection size over
//! union size). The mean of those per-item scores is the similarity; clusters
//! touched by any imperfect pair are counted as disagreements.
//!
//! Many items share the same cluster pair, so the engine memoizes per
//! `(cluster-index-1, cluster-index-2)` pair: each distinct pair's Jaccard is
//! computed at most once per comparison, turning the cost from
//! O(items × cluster size) into O(distinct pairs × cluster size) plus
//! O(items) lookups. For a 500k-genome run split into a few thousand
//! clusters, that is the difference between minutes and milliseconds.
//!
//! ## Usage
//!
//! ```rust
//! use concord::{Comparer, Partition};
//!
//! let run1 = Partition::from_table("genome cluster\ng1 A\ng2 A\ng3 B\n").unwrap();
//! let run2 = Partition::from_table("genome cluster\ng1 C\ng2 C\ng3 C\n").unwrap();
//!
//! let result = Comparer::new().compare(&run1, &run2).unwrap();
//! assert!((result.mean_similarity - 5.0 / 9.0).abs() < 1e-12);
//! assert_eq!(result.disagreements, 2);
//! ```
//!
//! The lower-level [`compare`] function takes prebuilt [`MembershipIndex`]es
//! for callers that reuse one partition across several comparisons.
//!
//! [`MembershipIndex`]: crate::MembershipIndex

mod engine;
mod jaccard;

pub use engine::{compare, Comparer, Comparison};
pub use jaccard::jaccard;
