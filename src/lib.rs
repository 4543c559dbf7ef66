//! Partition comparison primitives.
//!
//! `concord` is a small library for measuring how similar two clustering
//! assignments of the same item universe are. It is intended for regression
//! checks on clustering pipelines: run the clusterer twice (or two versions of
//! it), load both assignments, and ask how much they agree.
//!
//! The primary public API is:
//! - [`Partition`]: an ordered sequence of disjoint item-id clusters
//! - [`MembershipIndex`]: item → cluster-index lookup for one partition
//! - [`compare`] / [`Comparer`]: mean per-item Jaccard similarity plus a count
//!   of disagreeing cluster slots, with memoized pairwise Jaccard

#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod partition;

pub use compare::{compare, jaccard, Comparer, Comparison};
pub use error::{Error, Result};
pub use partition::{MembershipIndex, Partition};
