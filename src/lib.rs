//! # kdtree2d - 2D k-d tree spatial index
//!
//! A Rust library providing a k-d tree over a rectangular domain (the unit
//! square by default) with point insertion, membership tests, axis-aligned
//! range queries, and nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Incremental Insertion**: Points are added one at a time; duplicates are ignored
//! - **Range Queries**: All points inside a closed rectangle, pruned by subtree regions
//! - **Nearest Neighbor**: Branch-and-bound search that visits the nearer subtree first
//! - **Reference Set**: A brute-force [`PointSet`] answering the same queries, for checking
//! - **Partition Walk**: Node, split axis, and region for drawing the subdivision
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree2d::prelude::*;
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point2D::new(0.5, 0.5)).unwrap();
//! tree.insert(Point2D::new(0.25, 0.25)).unwrap();
//! tree.insert(Point2D::new(0.75, 0.75)).unwrap();
//! tree.insert(Point2D::new(0.75, 0.75)).unwrap(); // duplicate, ignored
//! assert_eq!(tree.len(), 3);
//!
//! // Points in [0, 0.6] x [0, 0.6]
//! let query = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
//! let mut found = tree.range(&query);
//! found.sort_by(|a, b| a.partial_cmp(b).unwrap());
//! assert_eq!(found, vec![Point2D::new(0.25, 0.25), Point2D::new(0.5, 0.5)]);
//!
//! // Closest stored point
//! assert_eq!(tree.nearest(Point2D::new(0.1, 0.1)).unwrap(), Point2D::new(0.25, 0.25));
//! ```
//!
//! ## How It Works
//!
//! Each node stores one point and the rectangle of the domain it divides. At
//! even depths the node splits its rectangle with a vertical line through its
//! point, at odd depths with a horizontal one. Points with a strictly smaller
//! coordinate go to the lower child, the rest to the upper child.
//!
//! Because every point below a node lies inside that node's rectangle, a
//! range query can skip a subtree whose rectangle misses the query, and a
//! nearest-neighbor query can skip one whose rectangle is no closer than the
//! best candidate so far.

pub mod error;
pub mod index;
pub mod input;
pub mod kdtree;
mod node;
pub mod point;
pub mod point_set;
pub mod prelude;
pub mod queries;
pub mod rect;

#[cfg(test)]
mod test_point_set;

pub use error::{KdError, ReadError};
pub use index::PointIndex;
pub use kdtree::KdTree;
pub use point::{Axis, Point2D};
pub use point_set::PointSet;
pub use queries::{Partition, Partitions};
pub use rect::Rect;
