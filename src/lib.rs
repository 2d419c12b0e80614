#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # Sprig
//!
//! An incremental k-d tree.
//!
//! Points are added one at a time, each becoming a leaf beneath the node it falls under,
//! with no batch construction and no rebalancing. Sprig answers exact-membership queries
//! and nearest-neighbour queries under a distance metric that can be swapped at runtime.
//! The number of dimensions is chosen when the tree is created, and every point added or
//! queried must have exactly that many co-ordinates.
//!
//! Because the tree is never rebalanced, its shape depends on insertion order: points
//! arriving in sorted order produce a chain, and queries against such a tree degrade to a
//! linear scan. Uniformly distributed input gives the usual logarithmic-depth behaviour.
//!
//! ## Usage
//! ```rust
//! use sprig::KdTree;
//! use sprig::distance::Manhattan;
//!
//! let mut kdtree: KdTree<f64, &str> = KdTree::new(2).unwrap();
//!
//! kdtree.add(&[0.0, 0.0], "a").unwrap();
//! kdtree.add(&[1.0, 1.0], "b").unwrap();
//! kdtree.add(&[2.0, 2.0], "c").unwrap();
//! kdtree.add(&[3.0, 3.0], "d").unwrap();
//!
//! assert_eq!(kdtree.size(), 4);
//! assert!(kdtree.contains(&[2.0, 2.0]).unwrap());
//!
//! let nearest = kdtree.nearest_one(&[1.2, 0.9]).unwrap();
//! assert_eq!(*nearest.item, "b");
//! assert!((nearest.distance - 0.05).abs() < 1e-12);
//!
//! kdtree.set_metric(Manhattan);
//! let nearest = kdtree.nearest_one(&[2.5, 2.0]).unwrap();
//! assert_eq!(*nearest.item, "c");
//! assert_eq!(nearest.distance, 0.5);
//! ```
//!
//! ## Cargo features
//!
//! * `tracing` (default): emits `TRACE` events for insertions and queries, and enables
//!   [`KdTree::debug_print`].
//! * `test_utils`: random data generation and a brute force oracle, used by the tests and benchmarks.

mod construction;
pub mod distance;
pub mod distance_metric;
pub mod error;
pub mod iter;
pub mod kdtree;
pub mod nearest_neighbour;
mod query;
#[cfg(feature = "test_utils")]
#[doc(hidden)]
pub mod test_utils;
pub mod traits;

pub use crate::distance::{Manhattan, SquaredEuclidean};
pub use crate::distance_metric::DistanceMetric;
pub use crate::error::{KdTreeError, Result};
pub use crate::kdtree::{KdTree, TreeNode};
pub use crate::nearest_neighbour::NearestNeighbour;
