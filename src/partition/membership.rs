//! Item membership index: item id → cluster index for one partition.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::partition::Partition;

/// Mapping from every item of a partition to the index of its cluster.
///
/// Built once per partition and read-only during comparison. Construction
/// doubles as the disjointness check: an item found in two clusters of the
/// same partition is rejected rather than silently reassigned.
#[derive(Clone, Debug, Default)]
pub struct MembershipIndex {
    index: HashMap<String, usize>,
}

impl MembershipIndex {
    /// Build the index for `partition` in O(total items).
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateItem`] if the same item identifier appears in two
    /// clusters of the partition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use concord::{MembershipIndex, Partition};
    ///
    /// let p = Partition::from_assignments([("x", "a"), ("y", "a"), ("z", "b")]);
    /// let index = MembershipIndex::build(&p).unwrap();
    /// assert_eq!(index.get("x"), index.get("y"));
    /// assert_ne!(index.get("x"), index.get("z"));
    /// ```
    pub fn build(partition: &Partition) -> Result<Self> {
        let mut index = HashMap::with_capacity(partition.n_items());

        for (slot, cluster) in partition.clusters().iter().enumerate() {
            for item in cluster {
                if let Some(first) = index.insert(item.clone(), slot) {
                    return Err(Error::DuplicateItem {
                        item: item.clone(),
                        first,
                        second: slot,
                    });
                }
            }
        }

        Ok(Self { index })
    }

    /// Cluster index containing `item`, if the partition covers it.
    pub fn get(&self, item: &str) -> Option<usize> {
        self.index.get(item).copied()
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index covers no items.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over `(item, cluster index)` entries.
    ///
    /// Iteration order is unspecified.
    pub fn items(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.index.iter().map(|(item, &slot)| (item.as_str(), slot))
    }
}
