use thiserror::Error;

/// Errors returned by partition loading and comparison in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A partition (or its membership index) contains no items.
    ///
    /// Mean similarity over zero items is undefined, so comparison refuses to
    /// start rather than divide by zero.
    #[error("empty partition: mean similarity over zero items is undefined")]
    EmptyPartition,

    /// An item present in one partition has no entry in the other.
    ///
    /// The two partitions do not cover the same item universe; any similarity
    /// score would be misleading, so the comparison is aborted.
    #[error("item {item:?} is missing from partition {partition}")]
    MissingItem {
        /// The item identifier that failed to resolve.
        item: String,
        /// Which partition lacks the item (1 or 2, by argument order).
        partition: usize,
    },

    /// An item appears in two clusters of the same partition.
    ///
    /// Clusters within a partition must be disjoint; a duplicate almost always
    /// indicates malformed input, so it is rejected outright.
    #[error("item {item:?} appears in clusters {first} and {second} of the same partition")]
    DuplicateItem {
        /// The duplicated item identifier.
        item: String,
        /// Index of the cluster that first contained the item.
        first: usize,
        /// Index of the second cluster containing the item.
        second: usize,
    },

    /// A data row of a tabular assignment file has fewer than two columns.
    #[error("malformed row at line {line}: expected at least two columns")]
    MalformedRow {
        /// 1-based line number within the input text (header included).
        line: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
