//! Find the nearest point to a query point.
use kdtree2d::prelude::*;

fn main() -> Result<(), KdError> {
    let tree = KdTree::from_points([
        Point2D::new(0.1, 0.1),
        Point2D::new(0.4, 0.7),
        Point2D::new(0.9, 0.3),
    ])?;

    let query = Point2D::new(0.5, 0.5);
    let nearest = tree.nearest(query)?;
    println!("Nearest point to {query}: {nearest} (distance {:.4})", nearest.distance_to(query));

    match KdTree::new().nearest(query) {
        Ok(point) => println!("unexpected point {point}"),
        Err(e) => println!("Empty tree: {e}"),
    }
    Ok(())
}
