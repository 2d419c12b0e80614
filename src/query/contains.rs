use az::Cast;

use crate::error::Result;
use crate::kdtree::{Axis, KdTree};
use crate::traits::Index;

impl<A: Axis, T, IDX: Index> KdTree<A, T, IDX>
where
    usize: Cast<IDX>,
{
    /// Returns true if a point exactly equal to `query` (element-wise) has been added to the tree.
    ///
    /// Only the single path that [`add`](KdTree::add) would take for `query` is searched, since
    /// that is the only place an identical point can have been stored. Querying an empty tree
    /// returns `Ok(false)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::KdTree;
    ///
    /// let mut tree: KdTree<f64, u32> = KdTree::new(3).unwrap();
    ///
    /// tree.add(&[1.0, 2.0, 5.0], 100).unwrap();
    /// tree.add(&[2.0, 3.0, 6.0], 101).unwrap();
    ///
    /// assert!(tree.contains(&[2.0, 3.0, 6.0]).unwrap());
    /// assert!(!tree.contains(&[2.0, 3.0, 6.1]).unwrap());
    /// ```
    pub fn contains(&self, query: &[A]) -> Result<bool> {
        self.check_dimension(query)?;

        let mut curr_node_idx = self.root();
        while let Some(idx) = curr_node_idx {
            let node = self.node(idx);
            if node.point.as_slice() == query {
                return Ok(true);
            }

            curr_node_idx = node.closer_child(query);
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::KdTreeError;
    use crate::kdtree::KdTree;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type AX = f64;

    #[test]
    fn contains_every_added_point() {
        let mut tree: KdTree<AX, usize> = KdTree::new(3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let points: Vec<[AX; 3]> = (0..2_000)
            .map(|_| {
                [
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                ]
            })
            .collect();

        for (idx, point) in points.iter().enumerate() {
            tree.add(point, idx).unwrap();
        }

        for point in &points {
            assert!(tree.contains(point).unwrap());
        }
    }

    #[test]
    fn does_not_contain_points_that_were_never_added() {
        let mut tree: KdTree<AX, u32> = KdTree::new(2).unwrap();
        tree.add(&[0.0, 0.0], 1).unwrap();
        tree.add(&[2.0, 5.0], 3).unwrap();
        tree.add(&[-1.0, 5.0], 2).unwrap();

        assert!(!tree.contains(&[0.0, 5.0]).unwrap());
        assert!(!tree.contains(&[2.0, 0.0]).unwrap());
        assert!(!tree.contains(&[-1.0, 5.000001]).unwrap());
    }

    #[test]
    fn finds_duplicates_that_were_sent_left() {
        let mut tree: KdTree<AX, u32> = KdTree::new(2).unwrap();
        tree.add(&[1.0, 1.0], 1).unwrap();
        tree.add(&[1.0, 4.0], 2).unwrap();
        tree.add(&[1.0, 4.0], 3).unwrap();

        assert!(tree.contains(&[1.0, 4.0]).unwrap());
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn empty_tree_contains_nothing() {
        let tree: KdTree<AX, u32> = KdTree::new(2).unwrap();

        assert_eq!(tree.contains(&[0.0, 0.0]), Ok(false));
    }

    #[test]
    fn wrong_dimension_is_an_error() {
        let tree: KdTree<AX, u32> = KdTree::new(2).unwrap();

        assert_eq!(
            tree.contains(&[0.0, 0.0, 0.0]),
            Err(KdTreeError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
