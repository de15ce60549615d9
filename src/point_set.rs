//! Brute-force point set (reference implementation)
//!
//! Answers the same queries as [`KdTree`](crate::KdTree) by scanning every
//! stored point. It exists to check the tree's answers on random inputs.

use tracing::trace;

use crate::{KdError, Point2D, Rect};

/// Linear-scan set of distinct points
///
/// Points are kept in insertion order. There is no domain restriction.
///
/// # Examples
/// ```
/// use kdtree2d::{Point2D, PointSet};
///
/// let mut set = PointSet::new();
/// set.insert(Point2D::new(0.1, 0.2)).unwrap();
/// set.insert(Point2D::new(0.1, 0.2)).unwrap();
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<Point2D>,
}

impl PointSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty set with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    /// Number of distinct points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds `point` unless an equal point is already present.
    ///
    /// # Errors
    /// Returns [`KdError::InvalidArgument`] for a non-finite point.
    pub fn insert(&mut self, point: Point2D) -> Result<bool, KdError> {
        if !point.is_finite() {
            return Err(KdError::InvalidArgument(format!("point {point} is not finite")));
        }
        if self.contains(point) {
            trace!(%point, "duplicate insert ignored");
            return Ok(false);
        }
        self.points.push(point);
        Ok(true)
    }

    /// Returns true if a point equal to `point` is present
    pub fn contains(&self, point: Point2D) -> bool {
        self.points.iter().any(|&p| p == point)
    }

    /// All points inside `rect`, in insertion order
    pub fn range(&self, rect: &Rect) -> Vec<Point2D> {
        let mut results = Vec::new();
        self.range_into(rect, &mut results);
        results
    }

    /// Appends all points inside `rect` to `results`
    pub fn range_into(&self, rect: &Rect, results: &mut Vec<Point2D>) {
        results.extend(self.points.iter().copied().filter(|&p| rect.contains(p)));
    }

    /// The closest point to `query`; ties go to the earliest inserted point.
    ///
    /// # Errors
    /// [`KdError::EmptyCollection`] if the set is empty,
    /// [`KdError::InvalidArgument`] if `query` is not finite.
    pub fn nearest(&self, query: Point2D) -> Result<Point2D, KdError> {
        if !query.is_finite() {
            return Err(KdError::InvalidArgument(format!("query point {query} is not finite")));
        }
        let mut points = self.points.iter().copied();
        let first = points.next().ok_or(KdError::EmptyCollection)?;
        let mut best = (first, first.distance_squared_to(query));
        for point in points {
            let dist = point.distance_squared_to(query);
            if dist < best.1 {
                best = (point, dist);
            }
        }
        Ok(best.0)
    }

    /// Iterates over the points in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.iter().copied()
    }
}
