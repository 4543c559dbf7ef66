//! Partitions: clustering assignments as ordered sequences of item-id sets.
//!
//! A [`Partition`] is one clustering of an item universe: an ordered list of
//! clusters, each a set of unique item identifiers. Item identifiers are
//! opaque strings (genome ids, document ids, ...); equality is exact string
//! match and no ordering is assumed.
//!
//! Cluster *indexes* (positions within one partition's list) are how the rest
//! of the crate refers to clusters. They carry no meaning across partitions:
//! cluster 3 of one run has no a-priori relation to cluster 3 of another.
//!
//! Partitions are built once and immutable afterwards. Three constructors are
//! provided:
//! - [`Partition::from_clusters`] for callers that already hold the sets
//! - [`Partition::from_assignments`] for `(item, cluster-key)` pair streams
//! - [`Partition::from_table`] for the common on-disk form: a delimited text
//!   table with a header row and `item_id cluster_id` columns
//!
//! [`MembershipIndex`] is the derived item → cluster-index mapping used by the
//! comparison engine; building it verifies that clusters are disjoint.

mod membership;
mod table;

pub use membership::MembershipIndex;

use std::collections::{HashMap, HashSet};

use crate::error::Result;

/// One clustering assignment: an ordered sequence of disjoint item-id sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    clusters: Vec<HashSet<String>>,
}

impl Partition {
    /// Build a partition directly from cluster sets, preserving their order.
    ///
    /// Disjointness is not checked here; it is enforced when a
    /// [`MembershipIndex`] is built.
    pub fn from_clusters(clusters: Vec<HashSet<String>>) -> Self {
        Self { clusters }
    }

    /// Group `(item, cluster-key)` pairs into a partition.
    ///
    /// Clusters are ordered by first appearance of their key, matching the
    /// row order of typical assignment tables. Repeated `(item, key)` pairs
    /// collapse into one membership; the same item under two *different* keys
    /// is left in both clusters and rejected later by
    /// [`MembershipIndex::build`].
    pub fn from_assignments<I, S, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, K)>,
        S: Into<String>,
        K: Into<String>,
    {
        let mut clusters: Vec<HashSet<String>> = Vec::new();
        let mut slot_of_key: HashMap<String, usize> = HashMap::new();

        for (item, key) in pairs {
            let key = key.into();
            let slot = match slot_of_key.get(&key) {
                Some(&slot) => slot,
                None => {
                    let slot = clusters.len();
                    clusters.push(HashSet::new());
                    slot_of_key.insert(key, slot);
                    slot
                }
            };
            clusters[slot].insert(item.into());
        }

        Self { clusters }
    }

    /// Parse a tabular assignment file.
    ///
    /// Expected format: one header row (skipped), then one item per row with
    /// columns `item_id` and `cluster_id`, separated by any mix of spaces,
    /// commas, or tabs. Extra columns are ignored; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedRow`](crate::Error::MalformedRow) if a data row has
    /// fewer than two columns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use concord::Partition;
    ///
    /// let p = Partition::from_table("genome\tcluster\ng1\tA\ng2\tA\ng3\tB\n").unwrap();
    /// assert_eq!(p.len(), 2);
    /// assert_eq!(p.n_items(), 3);
    /// ```
    pub fn from_table(text: &str) -> Result<Self> {
        table::parse(text)
    }

    /// The clusters, in construction order.
    pub fn clusters(&self) -> &[HashSet<String>] {
        &self.clusters
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the partition has no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total number of item memberships across all clusters.
    ///
    /// Equals the number of distinct items when clusters are disjoint.
    pub fn n_items(&self) -> usize {
        self.clusters.iter().map(HashSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_assignments_first_seen_order() {
        let p = Partition::from_assignments([
            ("x", "red"),
            ("y", "blue"),
            ("z", "red"),
            ("w", "green"),
        ]);

        assert_eq!(p.len(), 3);
        // "red" was seen first, so it is cluster 0.
        assert!(p.clusters()[0].contains("x"));
        assert!(p.clusters()[0].contains("z"));
        assert!(p.clusters()[1].contains("y"));
        assert!(p.clusters()[2].contains("w"));
    }

    #[test]
    fn test_from_assignments_repeated_pair_collapses() {
        let p = Partition::from_assignments([("x", "a"), ("x", "a"), ("y", "a")]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.n_items(), 2);
    }

    #[test]
    fn test_from_clusters_preserves_order() {
        let a: HashSet<String> = ["x".to_string()].into_iter().collect();
        let b: HashSet<String> = ["y".to_string(), "z".to_string()].into_iter().collect();
        let p = Partition::from_clusters(vec![a.clone(), b.clone()]);

        assert_eq!(p.clusters(), &[a, b]);
        assert_eq!(p.n_items(), 3);
    }

    #[test]
    fn test_empty_partition() {
        let p = Partition::default();
        assert!(p.is_empty());
        assert_eq!(p.n_items(), 0);
    }
}
