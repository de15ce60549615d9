//! Print the split lines of a k-d tree, as a renderer would draw them.
//!
//! Vertical lines (x splits) and horizontal lines (y splits) are each
//! clipped to the region of the node that owns them.
use kdtree2d::prelude::*;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), KdError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
    let mut tree = KdTree::new();
    for _ in 0..12 {
        let _inserted = tree.insert(Point2D::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))?;
    }

    println!("{} points, height {}", tree.len(), tree.height());
    for part in tree.partitions() {
        let (from, to) = part.segment();
        let kind = match part.axis {
            Axis::X => "vertical  ",
            Axis::Y => "horizontal",
        };
        println!("{kind} {:.3},{:.3} -> {:.3},{:.3}  through {}", from.x(), from.y(), to.x(), to.y(), part.point);
    }
    Ok(())
}
