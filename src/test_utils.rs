//! Helpers for generating random trees and query points, and a brute force
//! nearest neighbour oracle to check query results against.
use ordered_float::OrderedFloat;
use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use az::Cast;

use crate::distance_metric::DistanceMetric;
use crate::error::Result;
use crate::kdtree::{Axis, KdTree};
use crate::traits::Index;

/// Deterministic RNG, so that failures can be reproduced
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A random point with `dimension` co-ordinates, each drawn uniformly from `[min, max)`
pub fn rand_point<A, R>(rng: &mut R, dimension: usize, min: A, max: A) -> Vec<A>
where
    A: Axis + SampleUniform,
    R: Rng,
{
    (0..dimension).map(|_| rng.random_range(min..max)).collect()
}

/// `count` random points, each with `dimension` co-ordinates in `[min, max)`
pub fn rand_points<A, R>(rng: &mut R, count: usize, dimension: usize, min: A, max: A) -> Vec<Vec<A>>
where
    A: Axis + SampleUniform,
    R: Rng,
{
    (0..count)
        .map(|_| rand_point(rng, dimension, min, max))
        .collect()
}

/// Builds a tree of `tree_size` random points in `[min, max)^dimension`, each stored with its
/// insertion index as the item, along with `query_point_qty` random query points from the same range.
pub fn build_populated_tree_and_query_points<A, IDX>(
    seed: u64,
    dimension: usize,
    tree_size: usize,
    query_point_qty: usize,
    min: A,
    max: A,
) -> Result<(KdTree<A, usize, IDX>, Vec<Vec<A>>, Vec<Vec<A>>)>
where
    A: Axis + SampleUniform,
    IDX: Index,
    usize: Cast<IDX>,
{
    let mut rng = seeded_rng(seed);
    let points = rand_points(&mut rng, tree_size, dimension, min, max);
    let query_points = rand_points(&mut rng, query_point_qty, dimension, min, max);

    let tree = KdTree::from_points(dimension, &points)?;

    Ok((tree, points, query_points))
}

/// Finds the smallest distance from `query` to any of `points` by checking every one of them.
///
/// Returns `None` if `points` is empty.
pub fn linear_search<A, P>(points: &[P], query: &[A], metric: &dyn DistanceMetric<A>) -> Option<A>
where
    A: Axis,
    P: AsRef<[A]>,
{
    points
        .iter()
        .map(|p| OrderedFloat(metric.dist(p.as_ref(), query)))
        .min()
        .map(|dist| dist.0)
}
