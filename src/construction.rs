use az::{Az, Cast};
use std::ops::Rem;

use crate::error::{KdTreeError, Result};
use crate::kdtree::{Axis, KdTree, TreeNode};
use crate::traits::Index;
#[cfg(feature = "tracing")]
use tracing::{event, Level};

impl<A: Axis, T, IDX: Index> KdTree<A, T, IDX>
where
    usize: Cast<IDX>,
{
    /// Adds an item to the tree at the position given by `query`.
    ///
    /// Fails with [`KdTreeError::DimensionMismatch`] if `query` does not have exactly
    /// [`dimension`](KdTree::dimension) co-ordinates. On failure the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::KdTree;
    ///
    /// let mut tree: KdTree<f64, u32> = KdTree::new(3).unwrap();
    ///
    /// tree.add(&[1.0, 2.0, 5.0], 100).unwrap();
    /// assert!(tree.add(&[1.0, 2.0], 101).is_err());
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn add(&mut self, query: &[A], item: T) -> Result<()> {
        self.check_dimension(query)?;
        self.add_node(TreeNode::new(query.to_vec(), item))
    }

    /// Adds a node created with [`TreeNode::new`] to the tree.
    ///
    /// Any child links or splitting dimension carried by `node` are discarded; the
    /// node is attached as a new leaf.
    pub fn add_node(&mut self, mut node: TreeNode<A, T, IDX>) -> Result<()> {
        self.check_dimension(&node.point)?;

        let capacity = IDX::capacity();
        if self.nodes.len() >= capacity {
            return Err(KdTreeError::CapacityExceeded { capacity });
        }

        let new_idx = self.nodes.len().az::<IDX>();
        node.left = None;
        node.right = None;
        node.split_dim = 0;

        #[cfg(feature = "tracing")]
        let mut depth = 0usize;

        if let Some(mut parent_idx) = self.root() {
            loop {
                let parent = &mut self.nodes[parent_idx.az::<usize>()];
                let split_dim = parent.split_dim;

                let child = if node.point[split_dim] <= parent.point[split_dim] {
                    &mut parent.left
                } else {
                    &mut parent.right
                };

                #[cfg(feature = "tracing")]
                {
                    depth += 1;
                }

                match *child {
                    Some(child_idx) => parent_idx = child_idx,
                    None => {
                        *child = Some(new_idx);
                        node.split_dim = (split_dim + 1).rem(self.dimension);
                        break;
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        event!(
            Level::TRACE,
            depth,
            split_dim = node.split_dim,
            size = self.nodes.len() + 1,
            "added point"
        );

        self.nodes.push(node);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::KdTreeError;
    use crate::kdtree::{KdTree, TreeNode};
    use rand::Rng;

    type FLT = f32;

    #[test]
    fn can_add_an_item() {
        let mut tree: KdTree<FLT, u32> = KdTree::new(4).unwrap();

        let point: [FLT; 4] = [0.1f32, 0.2f32, 0.3f32, 0.4f32];
        let item = 123;

        tree.add(&point, item).unwrap();

        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn first_item_becomes_the_root_splitting_on_axis_zero() {
        let mut tree: KdTree<FLT, u32> = KdTree::new(3).unwrap();

        tree.add(&[7f32, 8f32, 9f32], 1).unwrap();

        let root = &tree.nodes[0];
        assert_eq!(root.point(), &[7f32, 8f32, 9f32]);
        assert_eq!(root.split_dim(), 0);
        assert_eq!(root.left, None);
        assert_eq!(root.right, None);
    }

    #[test]
    fn items_go_left_when_less_than_or_equal_and_right_when_greater() {
        let mut tree: KdTree<FLT, u32> = KdTree::new(2).unwrap();

        tree.add(&[0f32, 0f32], 1).unwrap();
        tree.add(&[0f32, 3f32], 2).unwrap(); // equal on axis 0
        tree.add(&[1f32, -3f32], 3).unwrap();
        tree.add(&[-2f32, 3f32], 4).unwrap(); // left, then equal on axis 1

        assert_eq!(tree.nodes[0].left, Some(1));
        assert_eq!(tree.nodes[0].right, Some(2));
        assert_eq!(tree.nodes[1].left, Some(3));
        assert_eq!(tree.nodes[1].right, None);

        assert_eq!(tree.nodes[1].split_dim(), 1);
        assert_eq!(tree.nodes[2].split_dim(), 1);
        assert_eq!(tree.nodes[3].split_dim(), 0);
    }

    #[test]
    fn split_dimension_cycles_through_every_axis() {
        let mut tree: KdTree<FLT, usize> = KdTree::new(3).unwrap();

        // strictly increasing on every axis, so each point is the right child of the last
        for i in 0..7 {
            let v = i as FLT;
            tree.add(&[v, v, v], i).unwrap();
        }

        let dims: Vec<usize> = tree.nodes.iter().map(|n| n.split_dim()).collect();
        assert_eq!(dims, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn adding_a_point_of_the_wrong_dimension_fails_without_changing_the_tree() {
        let mut tree: KdTree<FLT, u32> = KdTree::new(3).unwrap();
        tree.add(&[1f32, 2f32, 3f32], 1).unwrap();

        assert_eq!(
            tree.add(&[1f32, 2f32], 2),
            Err(KdTreeError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            tree.add(&[1f32, 2f32, 3f32, 4f32], 3),
            Err(KdTreeError::DimensionMismatch {
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            tree.add_node(TreeNode::new(vec![], 4)),
            Err(KdTreeError::DimensionMismatch {
                expected: 3,
                found: 0
            })
        );

        assert_eq!(tree.size(), 1);
        assert_eq!(tree.nodes[0].left, None);
        assert_eq!(tree.nodes[0].right, None);
    }

    #[test]
    fn added_nodes_lose_any_existing_links() {
        let mut tree: KdTree<FLT, u32> = KdTree::new(2).unwrap();
        tree.add(&[0f32, 0f32], 1).unwrap();
        tree.add(&[-1f32, 0f32], 2).unwrap();

        let mut copy = tree.nodes[0].clone();
        copy.point = vec![5f32, 5f32];
        tree.add_node(copy).unwrap();

        let added = &tree.nodes[2];
        assert_eq!(added.left, None);
        assert_eq!(added.right, None);
        assert_eq!(added.split_dim(), 1);
        assert_eq!(tree.nodes[0].right, Some(2));
    }

    #[test]
    fn adding_fails_once_the_index_type_is_exhausted() {
        let mut tree: KdTree<FLT, u32, u16> = KdTree::with_capacity(1, 65_536).unwrap();

        // multiplying by an odd constant permutes 0..2^16, scattering the insertion
        // order so that the tree stays shallow
        for i in 0..65_536u32 {
            let v = (i * 40_503) % 65_536;
            tree.add(&[v as FLT], v).unwrap();
        }

        assert_eq!(
            tree.add(&[0f32], 0),
            Err(KdTreeError::CapacityExceeded { capacity: 65_536 })
        );
        assert_eq!(tree.size(), 65_536);
    }

    #[test]
    fn can_add_shitloads_of_points() {
        let mut tree: KdTree<FLT, u32> = KdTree::new(4).unwrap();

        let mut rng = rand::rng();
        for i in 0..1000 {
            let point = [
                rng.random_range(0f32..0.99998f32),
                rng.random_range(0f32..0.99998f32),
                rng.random_range(0f32..0.99998f32),
                rng.random_range(0f32..0.99998f32),
            ];

            tree.add(&point, i).unwrap();
        }

        assert_eq!(tree.size(), 1000);
    }
}
