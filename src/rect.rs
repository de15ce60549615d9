//! Axis-aligned rectangles used for range queries and subtree pruning.

use std::fmt;

use crate::{Axis, KdError, Point2D};

/// Immutable closed axis-aligned rectangle: minX, minY, maxX, maxY
///
/// Always satisfies `xmin <= xmax` and `ymin <= ymax` with finite bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// The unit square `[0, 1] x [0, 1]`, the default tree domain.
    pub const UNIT: Self = Self { xmin: 0.0, ymin: 0.0, xmax: 1.0, ymax: 1.0 };

    /// Creates a rectangle from its bounds.
    ///
    /// # Errors
    /// Returns [`KdError::InvalidArgument`] if any bound is not finite or if
    /// a minimum exceeds its maximum.
    ///
    /// # Example
    /// ```
    /// use kdtree2d::Rect;
    /// assert!(Rect::new(0.0, 0.0, 0.5, 0.5).is_ok());
    /// assert!(Rect::new(0.6, 0.0, 0.5, 0.5).is_err());
    /// ```
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, KdError> {
        if !(xmin.is_finite() && ymin.is_finite() && xmax.is_finite() && ymax.is_finite()) {
            return Err(KdError::InvalidArgument(format!(
                "rectangle bounds must be finite: ({xmin}, {ymin}, {xmax}, {ymax})"
            )));
        }
        if xmin > xmax {
            return Err(KdError::InvalidArgument(format!("xmin {xmin} > xmax {xmax}")));
        }
        if ymin > ymax {
            return Err(KdError::InvalidArgument(format!("ymin {ymin} > ymax {ymax}")));
        }
        Ok(Self { xmin, ymin, xmax, ymax })
    }

    /// Left edge.
    #[inline]
    pub const fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Bottom edge.
    #[inline]
    pub const fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Right edge.
    #[inline]
    pub const fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Top edge.
    #[inline]
    pub const fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Extent along x.
    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along y.
    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns true if `point` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        self.xmin <= point.x()
            && point.x() <= self.xmax
            && self.ymin <= point.y()
            && point.y() <= self.ymax
    }

    /// Returns true if the two closed rectangles overlap. Touching edges or
    /// corners count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.xmax >= other.xmin
            && self.ymax >= other.ymin
            && other.xmax >= self.xmin
            && other.ymax >= self.ymin
    }

    /// Squared distance from `point` to the closest point of the rectangle.
    ///
    /// Zero when the point is contained, strictly positive otherwise.
    #[inline]
    pub fn distance_squared_to(&self, point: Point2D) -> f64 {
        let dx = axis_distance(point.x(), self.xmin, self.xmax);
        let dy = axis_distance(point.y(), self.ymin, self.ymax);
        dx * dx + dy * dy
    }

    /// Distance from `point` to the closest point of the rectangle.
    #[inline]
    pub fn distance_to(&self, point: Point2D) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// The part of this rectangle on the lower side of the split line `axis = at`.
    ///
    /// `at` must lie within the rectangle's extent on `axis`.
    #[inline]
    pub(crate) fn lower_half(&self, axis: Axis, at: f64) -> Self {
        debug_assert!(self.covers(axis, at), "split {at} outside {self}");
        match axis {
            Axis::X => Self { xmax: at, ..*self },
            Axis::Y => Self { ymax: at, ..*self },
        }
    }

    /// The part of this rectangle on the upper side of the split line `axis = at`.
    ///
    /// `at` must lie within the rectangle's extent on `axis`.
    #[inline]
    pub(crate) fn upper_half(&self, axis: Axis, at: f64) -> Self {
        debug_assert!(self.covers(axis, at), "split {at} outside {self}");
        match axis {
            Axis::X => Self { xmin: at, ..*self },
            Axis::Y => Self { ymin: at, ..*self },
        }
    }

    fn covers(&self, axis: Axis, at: f64) -> bool {
        match axis {
            Axis::X => self.xmin <= at && at <= self.xmax,
            Axis::Y => self.ymin <= at && at <= self.ymax,
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

/// Get distance along an axis
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}
