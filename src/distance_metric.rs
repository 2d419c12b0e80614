//! The trait that needs to be implemented by any distance metrics

/// Trait that needs to be implemented by any potential distance
/// metric to be used within queries.
///
/// A [`KdTree`](crate::KdTree) holds its metric as a boxed trait object so that it
/// can be swapped at runtime with [`set_metric`](crate::KdTree::set_metric).
/// Only the relative ordering of distances matters, so monotonic transforms of a
/// true metric (such as squared Euclidean distance) are valid. Implementations must
/// be pure functions of their inputs, symmetric, and non-negative.
pub trait DistanceMetric<A> {
    /// returns the distance between two K-d points, as measured
    /// by a particular distance metric
    fn dist(&self, a: &[A], b: &[A]) -> A;

    /// returns the distance between two points along a single axis,
    /// as measured by a particular distance metric.
    ///
    /// (used by the nearest neighbour query as the lower bound on the distance
    /// to anything on the far side of a node's splitting plane. It must never be
    /// larger than [`dist`](DistanceMetric::dist) between two points that differ
    /// only along that axis)
    fn dist1(&self, a: A, b: A) -> A;
}
