//! Points and split axes.

use std::fmt;

/// Coordinate compared at a given tree depth.
///
/// The axis is a function of depth only: `X` at even depths, `Y` at odd ones.
/// Nodes never store it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "a plane has exactly two axes")]
pub enum Axis {
    /// Vertical split line, compares x coordinates.
    X,
    /// Horizontal split line, compares y coordinates.
    Y,
}

impl Axis {
    /// Returns the split axis for a node at `depth` (root is depth 0).
    ///
    /// # Example
    /// ```
    /// use kdtree2d::Axis;
    /// assert_eq!(Axis::for_depth(0), Axis::X);
    /// assert_eq!(Axis::for_depth(3), Axis::Y);
    /// ```
    #[inline]
    pub const fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }

    /// Returns the axis used one level deeper.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// A point in the plane with `f64` coordinates.
///
/// Equality is exact coordinate equality, with no tolerance. Ordering is
/// lexicographic: by x first, then by y.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// Creates a point. No validation is performed here; the index rejects
    /// non-finite points on insertion.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Coordinate on the given axis.
    #[inline]
    pub const fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Point2D};

    #[test]
    fn test_axis_alternates_with_depth() {
        for depth in 0..8 {
            assert_eq!(Axis::for_depth(depth).next(), Axis::for_depth(depth + 1), "depth {depth}");
        }
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let a = Point2D::new(0.1, 0.9);
        let b = Point2D::new(0.2, 0.0);
        let c = Point2D::new(0.2, 0.5);
        assert!(a < b, "smaller x sorts first");
        assert!(b < c, "equal x falls back to y");
    }

    #[test]
    fn test_exact_equality() {
        assert_eq!(Point2D::new(0.3, 0.3), Point2D::from((0.3, 0.3)));
        assert_ne!(Point2D::new(0.3, 0.3), Point2D::new(0.3, 0.3 + f64::EPSILON));
    }

    #[test]
    fn test_distances() {
        let p = Point2D::new(0.0, 0.0);
        let q = Point2D::new(0.3, 0.4);
        assert!((p.distance_squared_to(q) - 0.25).abs() < 1e-12, "squared distance");
        assert!((p.distance_to(q) - 0.5).abs() < 1e-12, "distance");
        assert_eq!(q.coord(Axis::X), 0.3);
        assert_eq!(q.coord(Axis::Y), 0.4);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2D::new(1.0, -2.0).is_finite());
        assert!(!Point2D::new(f64::NAN, 0.0).is_finite());
        assert!(!Point2D::new(0.0, f64::INFINITY).is_finite());
    }
}
