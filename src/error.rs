//! Errors returned by tree construction, insertion and queries.
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// None of these are fatal: a failed call leaves the tree exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A supplied point does not have the same number of co-ordinates as the tree's dimension.
    #[error("dimension of position ({found}) does not match that of tree ({expected})")]
    DimensionMismatch {
        /// the dimension of the tree
        expected: usize,
        /// the number of co-ordinates in the offending point
        found: usize,
    },

    /// An argument that can never be valid was supplied, such as a tree dimension of zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A query that needs at least one stored point was made against an empty tree.
    #[error("tree is empty")]
    EmptyTree,

    /// The tree's index type cannot address any more nodes.
    #[error("tree is full: index type can address at most {capacity} nodes")]
    CapacityExceeded {
        /// maximum number of nodes addressable by the tree's index type
        capacity: usize,
    },
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, KdTreeError>;
