//! Incremental k-d tree, for use when the co-ordinates of the points being stored in the tree
//! are floats. f64 or f32 are supported currently.

use az::{Az, Cast};
use num_traits::float::FloatCore;
use std::fmt::Debug;

use crate::distance::SquaredEuclidean;
use crate::distance_metric::DistanceMetric;
use crate::error::{KdTreeError, Result};
use crate::iter::TreeIter;
use crate::traits::Index;
#[cfg(feature = "tracing")]
use tracing::{event, Level};

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the first generic parameter, `A`,
/// on the [`KdTree`]. This will be [`f64`] or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send + std::ops::AddAssign {}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send + std::ops::AddAssign> Axis for T {}

/// A single stored point, its item, and links to its children.
///
/// Nodes are created with [`TreeNode::new`] and handed to [`KdTree::add_node`], or
/// created implicitly by [`KdTree::add`]. The splitting dimension of a node is decided
/// at the time it is inserted and never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<A, T, IDX = u32> {
    pub(crate) point: Vec<A>,
    pub(crate) item: T,
    pub(crate) split_dim: usize,
    pub(crate) left: Option<IDX>,
    pub(crate) right: Option<IDX>,
}

impl<A: Axis, T, IDX: Index> TreeNode<A, T, IDX> {
    /// Creates a detached node holding `point` and `item`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::{KdTree, TreeNode};
    ///
    /// let mut tree: KdTree<f64, &str> = KdTree::new(2).unwrap();
    ///
    /// tree.add_node(TreeNode::new(vec![1.0, 2.0], "a")).unwrap();
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn new(point: Vec<A>, item: T) -> Self {
        Self {
            point,
            item,
            split_dim: 0,
            left: None,
            right: None,
        }
    }

    /// The co-ordinates of this node
    #[inline]
    pub fn point(&self) -> &[A] {
        &self.point
    }

    /// The item stored alongside this node's point
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the node, returning its item
    pub fn into_item(self) -> T {
        self.item
    }

    /// The axis that this node uses to decide which side new or queried points belong on
    #[inline]
    pub fn split_dim(&self) -> usize {
        self.split_dim
    }

    /// the child on the side of this node's splitting plane that `query` falls on
    #[inline]
    pub(crate) fn closer_child(&self, query: &[A]) -> Option<IDX> {
        if query[self.split_dim] <= self.point[self.split_dim] {
            self.left
        } else {
            self.right
        }
    }

    /// the child on the opposite side of this node's splitting plane from `query`
    #[inline]
    pub(crate) fn further_child(&self, query: &[A]) -> Option<IDX> {
        if query[self.split_dim] <= self.point[self.split_dim] {
            self.right
        } else {
            self.left
        }
    }
}

/// Incremental k-d tree
///
/// Points are added one at a time and each new point becomes a leaf below the
/// existing node it falls under; the tree is never rebalanced. The first point added
/// becomes the root and splits on axis 0, and each level below splits on the next axis
/// in turn.
///
/// All nodes live in a single `Vec`, with children addressed by index of type `IDX`.
/// Dropping the tree frees every node without recursion, however deep the tree grows.
///
/// Not internally synchronised: insertion takes `&mut self`, so sharing a tree between
/// writers and readers on different threads needs an external lock.
pub struct KdTree<A, T, IDX = u32> {
    pub(crate) dimension: usize,
    pub(crate) nodes: Vec<TreeNode<A, T, IDX>>,
    pub(crate) metric: Box<dyn DistanceMetric<A> + Send + Sync>,
}

impl<A: Axis, T, IDX: Index> KdTree<A, T, IDX>
where
    usize: Cast<IDX>,
{
    /// Creates a new empty KdTree for points with `dimension` co-ordinates,
    /// using [`SquaredEuclidean`] distance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::KdTree;
    ///
    /// let mut tree: KdTree<f64, u32> = KdTree::new(3).unwrap();
    ///
    /// tree.add(&[1.0, 2.0, 5.0], 100).unwrap();
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn new(dimension: usize) -> Result<Self> {
        Self::with_capacity(dimension, 0)
    }

    /// Creates a new empty KdTree and reserves capacity for a specific number of items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::KdTree;
    ///
    /// let mut tree: KdTree<f64, u32> = KdTree::with_capacity(3, 1_000_000).unwrap();
    ///
    /// tree.add(&[1.0, 2.0, 5.0], 100).unwrap();
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn with_capacity(dimension: usize, capacity: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(KdTreeError::InvalidArgument(
                "tree dimension must be at least 1",
            ));
        }
        if capacity > IDX::capacity() {
            return Err(KdTreeError::CapacityExceeded {
                capacity: IDX::capacity(),
            });
        }

        Ok(Self {
            dimension,
            nodes: Vec::with_capacity(capacity),
            metric: Box::new(SquaredEuclidean),
        })
    }

    /// Creates a new empty KdTree that measures distance with `metric`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::KdTree;
    /// use sprig::distance::Manhattan;
    ///
    /// let mut tree: KdTree<f64, u32> = KdTree::with_metric(2, Manhattan).unwrap();
    ///
    /// tree.add(&[1.0, 2.0], 100).unwrap();
    ///
    /// assert_eq!(tree.nearest_one(&[2.0, 3.0]).unwrap().distance, 2.0);
    /// ```
    pub fn with_metric<D>(dimension: usize, metric: D) -> Result<Self>
    where
        D: DistanceMetric<A> + Send + Sync + 'static,
    {
        let mut tree = Self::new(dimension)?;
        tree.set_metric(metric);
        Ok(tree)
    }

    /// Returns the number of co-ordinates that every point in this tree has
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the current number of elements stored in the tree
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::KdTree;
    ///
    /// let mut tree: KdTree<f64, u32> = KdTree::new(3).unwrap();
    ///
    /// tree.add(&[1.0, 2.0, 5.0], 100).unwrap();
    /// tree.add(&[1.1, 2.1, 5.1], 101).unwrap();
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no points have been added to the tree
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the distance metric currently used by queries
    #[inline]
    pub fn metric(&self) -> &dyn DistanceMetric<A> {
        &*self.metric
    }

    /// Replaces the distance metric used by queries, dropping the previous one.
    ///
    /// Stored points are unaffected; only subsequent queries see the new metric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::KdTree;
    /// use sprig::distance::Manhattan;
    ///
    /// let mut tree: KdTree<f64, u32> = KdTree::new(2).unwrap();
    /// tree.add(&[3.0, 4.0], 1).unwrap();
    ///
    /// assert_eq!(tree.nearest_one(&[0.0, 0.0]).unwrap().distance, 25.0);
    ///
    /// tree.set_metric(Manhattan);
    ///
    /// assert_eq!(tree.nearest_one(&[0.0, 0.0]).unwrap().distance, 7.0);
    /// ```
    pub fn set_metric<D>(&mut self, metric: D)
    where
        D: DistanceMetric<A> + Send + Sync + 'static,
    {
        self.metric = Box::new(metric);
    }

    /// Iterate over all `(point, item)` tuples in breadth-first order, starting at the root.
    ///
    /// ```
    /// use sprig::KdTree;
    ///
    /// let mut tree: KdTree<f64, u32> = KdTree::new(2).unwrap();
    /// tree.add(&[1.0, 2.0], 10).unwrap();
    /// tree.add(&[0.0, 5.0], 11).unwrap();
    ///
    /// let pairs: Vec<_> = tree.iter().collect();
    /// assert_eq!(pairs, vec![(&[1.0, 2.0][..], &10), (&[0.0, 5.0][..], &11)]);
    /// ```
    pub fn iter(&self) -> TreeIter<'_, A, T, IDX> {
        TreeIter::new(self)
    }

    /// Emits every stored `(point, item)` pair as a `DEBUG` level tracing event,
    /// in breadth-first order.
    #[cfg(feature = "tracing")]
    pub fn debug_print(&self)
    where
        T: Debug,
    {
        for (point, item) in self.iter() {
            event!(Level::DEBUG, point = ?point, item = ?item, "tree node");
        }
    }

    #[inline]
    pub(crate) fn root(&self) -> Option<IDX> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(IDX::zero())
        }
    }

    #[inline]
    pub(crate) fn node(&self, idx: IDX) -> &TreeNode<A, T, IDX> {
        &self.nodes[idx.az::<usize>()]
    }

    pub(crate) fn check_dimension(&self, point: &[A]) -> Result<()> {
        if point.len() != self.dimension {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dimension,
                found: point.len(),
            });
        }
        Ok(())
    }
}

impl<A: Axis, IDX: Index> KdTree<A, usize, IDX>
where
    usize: Cast<IDX>,
{
    /// Builds a tree from a slice of points, storing each point's position in
    /// the slice as its item. Points are inserted in slice order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprig::KdTree;
    ///
    /// let points = vec![[0.0, 0.0], [1.0, 1.0], [5.0, 5.0]];
    /// let tree: KdTree<f64, usize> = KdTree::from_points(2, &points).unwrap();
    ///
    /// assert_eq!(*tree.nearest_one(&[4.0, 4.5]).unwrap().item, 2);
    /// ```
    pub fn from_points<P: AsRef<[A]>>(dimension: usize, points: &[P]) -> Result<Self> {
        let mut tree = Self::with_capacity(dimension, points.len())?;

        for (idx, point) in points.iter().enumerate() {
            tree.add(point.as_ref(), idx)?;
        }

        Ok(tree)
    }
}

impl<A, T, IDX> Debug for KdTree<A, T, IDX> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KdTree")
            .field("dimension", &self.dimension)
            .field("size", &self.nodes.len())
            .finish_non_exhaustive()
    }
}
