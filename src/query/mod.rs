//! Query methods on [`KdTree`](crate::KdTree): exact containment and nearest neighbour.

mod contains;
mod nearest_one;
