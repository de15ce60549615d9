//! k-d tree construction and bookkeeping.
//!
//! Points are inserted one at a time. Each insertion descends from the root,
//! comparing on x at even depths and on y at odd depths, and hangs a new leaf
//! in the first empty slot. Every node records the region of the domain it
//! splits, which the queries in [`queries`](crate::queries) use for pruning.
//!
//! There is no deletion and no rebalancing: sorted input produces a tree as
//! deep as it is large. Traversals and deallocation use explicit work
//! stacks, so depth only costs time.

use std::fmt;

use tracing::{debug, trace};

use crate::node::Node;
use crate::{Axis, KdError, Point2D, Rect};

/// 2D k-d tree over a fixed rectangular domain.
///
/// The domain defaults to the unit square. Stored points are distinct; a
/// second insertion of an equal point is a no-op.
///
/// # Examples
/// ```
/// use kdtree2d::{KdTree, Point2D, Rect};
///
/// let mut tree = KdTree::new();
/// tree.insert(Point2D::new(0.5, 0.5)).unwrap();
/// tree.insert(Point2D::new(0.25, 0.25)).unwrap();
/// tree.insert(Point2D::new(0.75, 0.75)).unwrap();
///
/// let found = tree.range(&Rect::new(0.0, 0.0, 0.6, 0.6).unwrap());
/// assert_eq!(found.len(), 2);
/// assert_eq!(tree.nearest(Point2D::new(0.1, 0.1)).unwrap(), Point2D::new(0.25, 0.25));
/// ```
pub struct KdTree {
    /// Root node; its rectangle is the whole domain
    pub(crate) root: Option<Box<Node>>,
    /// Number of distinct stored points
    len: usize,
    /// Region every stored point must lie in
    domain: Rect,
}

impl KdTree {
    /// Creates an empty tree over the unit square.
    ///
    /// # Example
    /// ```
    /// use kdtree2d::KdTree;
    /// let tree = KdTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_domain(Rect::UNIT)
    }

    /// Creates an empty tree over `domain`.
    ///
    /// Only points inside `domain` (boundary included) can be inserted.
    ///
    /// # Example
    /// ```
    /// use kdtree2d::{KdTree, Point2D, Rect};
    /// let mut tree = KdTree::with_domain(Rect::new(-10.0, -10.0, 10.0, 10.0).unwrap());
    /// assert!(tree.insert(Point2D::new(-3.0, 7.5)).unwrap());
    /// ```
    pub fn with_domain(domain: Rect) -> Self {
        Self { root: None, len: 0, domain }
    }

    /// Builds a unit-square tree by inserting `points` in order.
    ///
    /// # Errors
    /// Stops at the first point [`insert`](Self::insert) rejects and returns
    /// its error.
    pub fn from_points<I>(points: I) -> Result<Self, KdError>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut tree = Self::new();
        let mut offered = 0usize;
        for point in points {
            offered += 1;
            let _inserted = tree.insert(point)?;
        }
        debug!(offered, stored = tree.len, "built k-d tree");
        Ok(tree)
    }

    /// The region this tree accepts points from.
    #[inline]
    pub fn domain(&self) -> Rect {
        self.domain
    }

    /// Number of distinct points stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no point has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `point` unless an equal point is already stored.
    ///
    /// Returns `Ok(true)` when a new node was created and `Ok(false)` when the
    /// point was already present; only the former changes [`len`](Self::len).
    ///
    /// # Errors
    /// Returns [`KdError::InvalidArgument`] if `point` has a non-finite
    /// coordinate or lies outside the domain. The tree is left untouched.
    ///
    /// # Example
    /// ```
    /// use kdtree2d::{KdTree, Point2D};
    /// let mut tree = KdTree::new();
    /// assert!(tree.insert(Point2D::new(0.3, 0.4)).unwrap());
    /// assert!(!tree.insert(Point2D::new(0.3, 0.4)).unwrap());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, point: Point2D) -> Result<bool, KdError> {
        self.check_point(point)?;

        let Some(mut node) = self.root.as_mut() else {
            self.root = Some(Node::leaf(point, self.domain));
            self.len = 1;
            return Ok(true);
        };

        let mut axis = Axis::X;
        loop {
            if node.point == point {
                trace!(%point, "duplicate insert ignored");
                return Ok(false);
            }
            let lower = node.goes_lower(point, axis);
            let rect = node.child_rect(axis, lower);
            match node.child_slot(lower) {
                Some(child) => node = child,
                empty => {
                    *empty = Some(Node::leaf(point, rect));
                    self.len += 1;
                    return Ok(true);
                }
            }
            axis = axis.next();
        }
    }

    /// Number of levels in the tree: 0 when empty, 1 for a lone root.
    ///
    /// Random insertion order gives O(log n); sorted order gives n.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(lower) = node.lower.as_deref() {
                stack.push((lower, depth + 1));
            }
            if let Some(upper) = node.upper.as_deref() {
                stack.push((upper, depth + 1));
            }
        }
        height
    }

    fn check_point(&self, point: Point2D) -> Result<(), KdError> {
        if !point.is_finite() {
            trace!(%point, "rejected non-finite point");
            return Err(KdError::InvalidArgument(format!("point {point} is not finite")));
        }
        if !self.domain.contains(point) {
            trace!(%point, domain = %self.domain, "rejected point outside domain");
            return Err(KdError::InvalidArgument(format!(
                "point {point} lies outside the domain {}",
                self.domain
            )));
        }
        Ok(())
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KdTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

// Drop glue for `Box<Node>` recurses once per level, so detach children and
// free nodes from a work stack instead.
impl Drop for KdTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.lower.take());
            stack.extend(node.upper.take());
        }
    }
}
