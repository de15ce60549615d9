//! Read-only queries on [`KdTree`]
//!
//! All queries walk the tree top-down. Range search skips any subtree whose
//! rectangle misses the query rectangle; nearest-neighbor search skips any
//! subtree whose rectangle is no closer than the best point found so far.

use std::iter::FusedIterator;

use crate::node::Node;
use crate::{Axis, KdError, KdTree, Point2D, Rect};

/// One node of the tree as seen by a renderer: the stored point, the axis it
/// splits on, and the region it splits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partition {
    /// Point stored at the node.
    pub point: Point2D,
    /// Split axis at the node's depth.
    pub axis: Axis,
    /// Region of the domain the node divides.
    pub rect: Rect,
}

impl Partition {
    /// End points of the split line through `point`, clipped to `rect`.
    ///
    /// Vertical for [`Axis::X`], horizontal for [`Axis::Y`].
    pub fn segment(&self) -> (Point2D, Point2D) {
        match self.axis {
            Axis::X => (
                Point2D::new(self.point.x(), self.rect.ymin()),
                Point2D::new(self.point.x(), self.rect.ymax()),
            ),
            Axis::Y => (
                Point2D::new(self.rect.xmin(), self.point.y()),
                Point2D::new(self.rect.xmax(), self.point.y()),
            ),
        }
    }
}

/// Pre-order iterator over the nodes of a [`KdTree`]
///
/// Created by [`KdTree::partitions`].
#[derive(Debug, Clone)]
pub struct Partitions<'a> {
    stack: Vec<(&'a Node, Axis)>,
}

impl Iterator for Partitions<'_> {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let (node, axis) = self.stack.pop()?;
        // Upper goes on the stack first so lower comes out first
        if let Some(upper) = node.upper.as_deref() {
            self.stack.push((upper, axis.next()));
        }
        if let Some(lower) = node.lower.as_deref() {
            self.stack.push((lower, axis.next()));
        }
        Some(Partition { point: node.point, axis, rect: node.rect })
    }
}

impl FusedIterator for Partitions<'_> {}

impl KdTree {
    /// Returns true if a point equal to `point` is stored.
    ///
    /// Follows a single root-to-leaf path, so it runs in O(height).
    ///
    /// # Example
    /// ```
    /// use kdtree2d::{KdTree, Point2D};
    /// let tree = KdTree::from_points([Point2D::new(0.75, 0.75)]).unwrap();
    /// assert!(tree.contains(Point2D::new(0.75, 0.75)));
    /// assert!(!tree.contains(Point2D::new(0.9, 0.9)));
    /// ```
    pub fn contains(&self, point: Point2D) -> bool {
        let mut current = self.root.as_deref();
        let mut axis = Axis::X;
        while let Some(node) = current {
            if node.point == point {
                return true;
            }
            current = node.child(node.goes_lower(point, axis));
            axis = axis.next();
        }
        false
    }

    /// Queries for all stored points inside `rect` (boundary included)
    ///
    /// The order of the result is unspecified.
    ///
    /// # Example
    /// ```
    /// use kdtree2d::{KdTree, Point2D, Rect};
    /// let tree = KdTree::from_points([Point2D::new(0.2, 0.2), Point2D::new(0.8, 0.8)]).unwrap();
    /// let found = tree.range(&Rect::new(0.0, 0.0, 0.5, 0.5).unwrap());
    /// assert_eq!(found, vec![Point2D::new(0.2, 0.2)]);
    /// ```
    pub fn range(&self, rect: &Rect) -> Vec<Point2D> {
        let mut results = Vec::new();
        self.range_into(rect, &mut results);
        results
    }

    /// Like [`range`](Self::range), but appends to `results` (not cleared first).
    pub fn range_into(&self, rect: &Rect, results: &mut Vec<Point2D>) {
        self.range_visiting(rect, results, |_| {});
    }

    /// Range search that reports every node it examines to `visit`.
    pub(crate) fn range_visiting(
        &self,
        rect: &Rect,
        results: &mut Vec<Point2D>,
        mut visit: impl FnMut(&Node),
    ) {
        let mut stack: Vec<&Node> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            // Every point below `node` lies in `node.rect`
            if !rect.intersects(&node.rect) {
                continue;
            }
            visit(node);
            if rect.contains(node.point) {
                results.push(node.point);
            }
            if let Some(upper) = node.upper.as_deref() {
                stack.push(upper);
            }
            if let Some(lower) = node.lower.as_deref() {
                stack.push(lower);
            }
        }
    }

    /// Finds a stored point at minimum Euclidean distance from `query`.
    ///
    /// When several points are equally close, the first one reached by the
    /// traversal wins.
    ///
    /// # Errors
    /// [`KdError::EmptyCollection`] if the tree holds no points, and
    /// [`KdError::InvalidArgument`] if `query` is not finite.
    ///
    /// # Example
    /// ```
    /// use kdtree2d::{KdError, KdTree, Point2D};
    /// let mut tree = KdTree::new();
    /// assert_eq!(tree.nearest(Point2D::new(0.5, 0.5)), Err(KdError::EmptyCollection));
    /// tree.insert(Point2D::new(0.9, 0.1)).unwrap();
    /// tree.insert(Point2D::new(0.4, 0.6)).unwrap();
    /// assert_eq!(tree.nearest(Point2D::new(0.5, 0.5)).unwrap(), Point2D::new(0.4, 0.6));
    /// ```
    pub fn nearest(&self, query: Point2D) -> Result<Point2D, KdError> {
        self.nearest_visiting(query, |_| {})
    }

    /// Nearest-neighbor search that reports every node it examines to `visit`,
    /// in visiting order.
    pub(crate) fn nearest_visiting(
        &self,
        query: Point2D,
        mut visit: impl FnMut(&Node),
    ) -> Result<Point2D, KdError> {
        if !query.is_finite() {
            return Err(KdError::InvalidArgument(format!("query point {query} is not finite")));
        }
        let root = self.root.as_deref().ok_or(KdError::EmptyCollection)?;

        let mut best = root.point;
        let mut best_dist = best.distance_squared_to(query);
        let mut stack: Vec<(&Node, f64)> = vec![(root, root.rect.distance_squared_to(query))];

        while let Some((node, rect_dist)) = stack.pop() {
            // `best` may have improved since this entry was pushed
            if rect_dist >= best_dist {
                continue;
            }
            visit(node);
            let dist = node.point.distance_squared_to(query);
            if dist < best_dist {
                best = node.point;
                best_dist = dist;
            }

            let lower = node.lower.as_deref().map(|n| (n, n.rect.distance_squared_to(query)));
            let upper = node.upper.as_deref().map(|n| (n, n.rect.distance_squared_to(query)));
            // Nearer subtree is pushed last so it is searched first
            let (near, far) = match (lower, upper) {
                (Some(l), Some(u)) if u.1 < l.1 => (Some(u), Some(l)),
                (l, u) => (l.or(u), l.and(u)),
            };
            for (child, child_dist) in [far, near].into_iter().flatten() {
                if child_dist < best_dist {
                    stack.push((child, child_dist));
                }
            }
        }
        Ok(best)
    }

    /// Walks every node in pre-order (node, lower subtree, upper subtree),
    /// yielding what a renderer needs to draw the partition.
    ///
    /// # Example
    /// ```
    /// use kdtree2d::{Axis, KdTree, Point2D};
    /// let tree = KdTree::from_points([Point2D::new(0.5, 0.5), Point2D::new(0.2, 0.7)]).unwrap();
    /// let axes: Vec<Axis> = tree.partitions().map(|p| p.axis).collect();
    /// assert_eq!(axes, vec![Axis::X, Axis::Y]);
    /// ```
    pub fn partitions(&self) -> Partitions<'_> {
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, Axis::X));
        }
        Partitions { stack }
    }

    /// All stored points, in the same order as [`partitions`](Self::partitions).
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.partitions().map(|partition| partition.point)
    }
}
