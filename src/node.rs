use std::fmt;

use crate::{Axis, Point2D, Rect};

/// A tree node: one point, the region it splits, and up to two owned subtrees.
///
/// `lower` holds points whose coordinate on the node's split axis is strictly
/// smaller than the node's; `upper` holds the rest. The split axis itself is
/// derived from depth by the traversal.
pub(crate) struct Node {
    pub(crate) point: Point2D,
    pub(crate) rect: Rect,
    pub(crate) lower: Option<Box<Node>>,
    pub(crate) upper: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn leaf(point: Point2D, rect: Rect) -> Box<Self> {
        Box::new(Self { point, rect, lower: None, upper: None })
    }

    /// Returns true if `point` belongs in the lower subtree of this node when
    /// it splits on `axis`.
    #[inline]
    pub(crate) fn goes_lower(&self, point: Point2D, axis: Axis) -> bool {
        point.coord(axis) < self.point.coord(axis)
    }

    /// Region assigned to a new child on the given side.
    #[inline]
    pub(crate) fn child_rect(&self, axis: Axis, lower: bool) -> Rect {
        let at = self.point.coord(axis);
        if lower { self.rect.lower_half(axis, at) } else { self.rect.upper_half(axis, at) }
    }

    /// Mutable slot of the child on the given side.
    #[inline]
    pub(crate) fn child_slot(&mut self, lower: bool) -> &mut Option<Box<Self>> {
        if lower { &mut self.lower } else { &mut self.upper }
    }

    /// Child on the given side.
    #[inline]
    pub(crate) fn child(&self, lower: bool) -> Option<&Self> {
        if lower { self.lower.as_deref() } else { self.upper.as_deref() }
    }
}

// Shallow: a derived impl would recurse once per level of the subtree.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("point", &self.point)
            .field("rect", &self.rect)
            .field("has_lower", &self.lower.is_some())
            .field("has_upper", &self.upper.is_some())
            .finish_non_exhaustive()
    }
}
