//! Definitions and implementations for the traits used to parameterise [`KdTree`](crate::KdTree)
use az::Cast;
use num_traits::{PrimInt, Unsigned, Zero};
use std::fmt::Debug;

/// Implemented on u16 and u32 so that they can be used internally to index the
/// `Vec` of tree nodes.
///
/// Allows `u32` or `u16` to be used as the third generic parameter of [`KdTree`](crate::KdTree).
/// If you will be storing no more than 65536 items in the tree, selecting `u16` will
/// halve the size of each child link, ensuring that more nodes can be kept in the
/// CPU cache, which may improve performance.
pub trait Index: PrimInt + Unsigned + Zero + Cast<usize> + Debug + Sync + Send {
    /// Maximum number of nodes that a tree using this index type can hold
    fn capacity() -> usize;
}

impl Index for u32 {
    fn capacity() -> usize {
        (u32::MAX as usize).saturating_add(1)
    }
}

impl Index for u16 {
    fn capacity() -> usize {
        u16::MAX as usize + 1
    }
}
