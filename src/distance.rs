//! Contains a selection of distance metrics that can be chosen from to measure the distance
//! between two points stored inside the tree.

use crate::distance_metric::DistanceMetric;
use crate::kdtree::Axis;

/// Returns the Manhattan / "taxi cab" distance between two points.
///
/// Faster than squared Euclidean, and just as effective if not more so in higher-dimensional spaces
///
/// # Examples
///
/// ```rust
/// use sprig::distance::Manhattan;
/// use sprig::distance_metric::DistanceMetric;
///
/// assert_eq!(0f32, Manhattan.dist(&[0f32, 0f32], &[0f32, 0f32]));
/// assert_eq!(1f32, Manhattan.dist(&[0f32, 0f32], &[1f32, 0f32]));
/// assert_eq!(2f32, Manhattan.dist(&[0f32, 0f32], &[1f32, 1f32]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl<A: Axis> DistanceMetric<A> for Manhattan {
    #[inline]
    fn dist(&self, a: &[A], b: &[A]) -> A {
        a.iter()
            .zip(b.iter())
            .map(|(&a_val, &b_val)| (a_val - b_val).abs())
            .fold(A::zero(), std::ops::Add::add)
    }

    #[inline]
    fn dist1(&self, a: A, b: A) -> A {
        (a - b).abs()
    }
}

/// Returns the squared euclidean distance between two points.
///
/// Faster than Euclidean distance due to not needing a square root, but still
/// preserves the same distance ordering as with Euclidean distance. This is the
/// metric that a newly constructed [`KdTree`](crate::KdTree) uses.
///
/// # Examples
///
/// ```rust
/// use sprig::distance::SquaredEuclidean;
/// use sprig::distance_metric::DistanceMetric;
///
/// assert_eq!(0f32, SquaredEuclidean.dist(&[0f32, 0f32], &[0f32, 0f32]));
/// assert_eq!(1f32, SquaredEuclidean.dist(&[0f32, 0f32], &[1f32, 0f32]));
/// assert_eq!(2f32, SquaredEuclidean.dist(&[0f32, 0f32], &[1f32, 1f32]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl<A: Axis> DistanceMetric<A> for SquaredEuclidean {
    #[inline]
    fn dist(&self, a: &[A], b: &[A]) -> A {
        a.iter()
            .zip(b.iter())
            .map(|(&a_val, &b_val)| (a_val - b_val) * (a_val - b_val))
            .fold(A::zero(), std::ops::Add::add)
    }

    #[inline]
    fn dist1(&self, a: A, b: A) -> A {
        (a - b) * (a - b)
    }
}
