//! Operations shared by the k-d tree and the brute-force set.

use crate::{KdError, KdTree, Point2D, PointSet, Rect};

/// A set of distinct 2D points answering membership, range, and
/// nearest-neighbor queries.
///
/// Implemented by [`KdTree`] and by the linear-scan [`PointSet`], so either
/// can be driven through the same code.
pub trait PointIndex {
    /// Adds `point` if not already present; returns whether it was new.
    ///
    /// # Errors
    /// [`KdError::InvalidArgument`] for points the index cannot hold.
    fn insert(&mut self, point: Point2D) -> Result<bool, KdError>;

    /// Returns true if a point equal to `point` is stored.
    fn contains(&self, point: Point2D) -> bool;

    /// Appends every stored point inside `rect` to `results`.
    fn range_into(&self, rect: &Rect, results: &mut Vec<Point2D>);

    /// Every stored point inside `rect`, in unspecified order.
    fn range(&self, rect: &Rect) -> Vec<Point2D> {
        let mut results = Vec::new();
        self.range_into(rect, &mut results);
        results
    }

    /// A stored point at minimum distance from `query`.
    ///
    /// # Errors
    /// [`KdError::EmptyCollection`] when nothing is stored.
    fn nearest(&self, query: Point2D) -> Result<Point2D, KdError>;

    /// Number of distinct stored points.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PointIndex for KdTree {
    fn insert(&mut self, point: Point2D) -> Result<bool, KdError> {
        Self::insert(self, point)
    }

    fn contains(&self, point: Point2D) -> bool {
        Self::contains(self, point)
    }

    fn range_into(&self, rect: &Rect, results: &mut Vec<Point2D>) {
        Self::range_into(self, rect, results);
    }

    fn nearest(&self, query: Point2D) -> Result<Point2D, KdError> {
        Self::nearest(self, query)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl PointIndex for PointSet {
    fn insert(&mut self, point: Point2D) -> Result<bool, KdError> {
        Self::insert(self, point)
    }

    fn contains(&self, point: Point2D) -> bool {
        Self::contains(self, point)
    }

    fn range_into(&self, rect: &Rect, results: &mut Vec<Point2D>) {
        Self::range_into(self, rect, results);
    }

    fn nearest(&self, query: Point2D) -> Result<Point2D, KdError> {
        Self::nearest(self, query)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}
