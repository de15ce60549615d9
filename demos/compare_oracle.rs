//! Time the k-d tree against the brute-force point set on the same queries.
use std::time::Instant;

use kdtree2d::prelude::*;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), KdError> {
    let num_points = 20_000;
    let num_queries = 1_000;
    let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);

    let mut tree = KdTree::new();
    let mut set = PointSet::with_capacity(num_points);
    for _ in 0..num_points {
        let point = Point2D::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        let _inserted = tree.insert(point)?;
        let _inserted = set.insert(point)?;
    }
    let queries: Vec<Point2D> = (0..num_queries)
        .map(|_| Point2D::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();

    let start = Instant::now();
    let mut tree_answers = Vec::with_capacity(num_queries);
    for &query in &queries {
        tree_answers.push(tree.nearest(query)?);
    }
    let tree_time = start.elapsed();

    let start = Instant::now();
    let mut mismatches = 0;
    for (&query, &answer) in queries.iter().zip(&tree_answers) {
        let expected = set.nearest(query)?;
        if expected.distance_squared_to(query) != answer.distance_squared_to(query) {
            mismatches += 1;
        }
    }
    let set_time = start.elapsed();

    println!("{num_queries} nearest queries over {} points", tree.len());
    println!("k-d tree:  {:>8.2}ms", tree_time.as_secs_f64() * 1000.0);
    println!("brute set: {:>8.2}ms", set_time.as_secs_f64() * 1000.0);
    println!("mismatches: {mismatches}");
    Ok(())
}
