//! Find all points inside a rectangle.
use kdtree2d::prelude::*;

fn main() -> Result<(), KdError> {
    let mut tree = KdTree::new();
    let _inserted = tree.insert(Point2D::new(0.5, 0.5))?;
    let _inserted = tree.insert(Point2D::new(0.25, 0.25))?;
    let _inserted = tree.insert(Point2D::new(0.75, 0.75))?;

    let query = Rect::new(0.0, 0.0, 0.6, 0.6)?;
    for point in tree.range(&query) {
        println!("{point} is inside {query}");
    }
    Ok(())
}
