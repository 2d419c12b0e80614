use az::Cast;
use std::collections::VecDeque;

use crate::error::{KdTreeError, Result};
use crate::kdtree::{Axis, KdTree, TreeNode};
use crate::nearest_neighbour::NearestNeighbour;
use crate::traits::Index;
#[cfg(feature = "tracing")]
use tracing::{event, Level};

impl<A: Axis, T, IDX: Index> KdTree<A, T, IDX>
where
    usize: Cast<IDX>,
{
    /// Queries the tree to find the nearest element to `query`, using the tree's
    /// distance metric.
    ///
    /// Fails with [`KdTreeError::EmptyTree`] if nothing has been added yet, or with
    /// [`KdTreeError::DimensionMismatch`] if `query` has the wrong number of co-ordinates.
    /// If several stored points are equally close, the first one encountered is returned.
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
    /// let nearest = tree.nearest_one(&[1.0, 2.0, 5.1]).unwrap();
    ///
    /// assert!((nearest.distance - 0.01f64).abs() < f64::EPSILON);
    /// assert_eq!(*nearest.item, 100);
    /// assert_eq!(nearest.point, &[1.0, 2.0, 5.0]);
    /// ```
    pub fn nearest_one(&self, query: &[A]) -> Result<NearestNeighbour<'_, A, T>> {
        self.check_dimension(query)?;
        let root_idx = self.root().ok_or(KdTreeError::EmptyTree)?;

        let metric = self.metric();

        // nodes waiting to start a fresh descent, and visited nodes waiting to be unwound
        let mut descend: VecDeque<IDX> = VecDeque::new();
        let mut unwind: Vec<IDX> = Vec::new();
        descend.push_back(root_idx);

        let mut best_idx = root_idx;
        let mut best_dist = A::infinity();

        #[cfg(feature = "tracing")]
        let (mut visited, mut pruned) = (0usize, 0usize);

        while !descend.is_empty() || !unwind.is_empty() {
            if let Some(curr_node_idx) = descend.pop_front() {
                unwind.push(curr_node_idx);
                let node = self.node(curr_node_idx);

                #[cfg(feature = "tracing")]
                {
                    visited += 1;
                }

                match node.closer_child(query) {
                    Some(child_idx) => descend.push_back(child_idx),
                    None => {
                        let dist = metric.dist(&node.point, query);
                        if dist < best_dist {
                            best_dist = dist;
                            best_idx = curr_node_idx;
                        }
                    }
                }
            } else if let Some(curr_node_idx) = unwind.pop() {
                let node = self.node(curr_node_idx);

                let dist = metric.dist(&node.point, query);
                if dist < best_dist {
                    best_dist = dist;
                    best_idx = curr_node_idx;
                }

                let split_dim = node.split_dim;
                if metric.dist1(query[split_dim], node.point[split_dim]) >= best_dist {
                    #[cfg(feature = "tracing")]
                    {
                        pruned += 1;
                    }
                    continue;
                }

                if let Some(further_idx) = node.further_child(query) {
                    descend.push_back(further_idx);
                }
            }
        }

        #[cfg(feature = "tracing")]
        event!(
            Level::TRACE,
            visited,
            pruned,
            distance = ?best_dist,
            "nearest_one complete"
        );

        let best = self.node(best_idx);
        Ok(NearestNeighbour {
            distance: best_dist,
            point: &best.point,
            item: &best.item,
        })
    }

    /// Queries the tree to find the nearest element to the point held by `node`.
    ///
    /// `node` need not belong to this tree. A node that does belong to it is its own
    /// nearest neighbour (or ties with an identical point).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::{KdTree, TreeNode};
    ///
    /// let mut tree: KdTree<f64, &str> = KdTree::new(2).unwrap();
    /// tree.add(&[0.0, 0.0], "origin").unwrap();
    /// tree.add(&[4.0, 4.0], "far").unwrap();
    ///
    /// let probe = TreeNode::new(vec![1.0, 0.5], "probe");
    ///
    /// assert_eq!(*tree.nearest_one_to_node(&probe).unwrap().item, "origin");
    /// ```
    #[inline]
    pub fn nearest_one_to_node(
        &self,
        node: &TreeNode<A, T, IDX>,
    ) -> Result<NearestNeighbour<'_, A, T>> {
        self.nearest_one(&node.point)
    }
}
