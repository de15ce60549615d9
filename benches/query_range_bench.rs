//! Benchmark for `range` and `nearest` performance
//!
//! This benchmark measures range queries on a `KdTree` with 1M uniformly
//! distributed points in the unit square. Queries are performed with varying
//! coverage (100%, 50%, 10%, 1%, 0.01%), followed by nearest-neighbor queries.

use kdtree2d::{KdTree, Point2D, Rect};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate a random query rectangle with sides UP TO `max_size`
fn random_rect<R: Rng>(rng: &mut R, max_size: f64) -> Rect {
    let xmin = rng.random_range(0.0..(1.0 - max_size).max(f64::EPSILON));
    let ymin = rng.random_range(0.0..(1.0 - max_size).max(f64::EPSILON));
    let width = rng.random_range(0.0..max_size);
    let height = rng.random_range(0.0..max_size);
    Rect::new(xmin, ymin, (xmin + width).min(1.0), (ymin + height).min(1.0))
        .expect("generated rectangle is well formed")
}

/// Benchmark range queries with one coverage class
fn bench_search(tree: &KdTree, rects: &[Rect], percentage_str: &str) {
    let mut results = Vec::new();
    let mut found = 0;
    let start = Instant::now();

    for rect in rects {
        results.clear();
        tree.range_into(rect, &mut results);
        found += results.len();
    }

    let elapsed = start.elapsed();
    println!(
        "{} searches {}%: {}ms ({} points reported)",
        rects.len(),
        percentage_str,
        elapsed.as_millis(),
        found
    );
}

/// Benchmark nearest-neighbor queries
fn bench_neighbors(tree: &KdTree, queries: &[Point2D]) {
    let start = Instant::now();
    let mut checksum = 0.0;

    for &query in queries {
        let nearest = tree.nearest(query).expect("tree is not empty");
        checksum += nearest.x();
    }

    let elapsed = start.elapsed();
    println!("{} nearest searches: {}ms (checksum {:.3})", queries.len(), elapsed.as_millis(), checksum);
}

fn main() {
    println!("kdtree2d Range/Nearest Benchmark");
    println!("================================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let points: Vec<Point2D> = (0..num_items)
        .map(|_| Point2D::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();

    let full: Vec<Rect> = (0..num_tests).map(|_| Rect::UNIT).collect();
    let rects_50: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 0.5_f64.sqrt())).collect();
    let rects_10: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 0.1_f64.sqrt())).collect();
    let rects_1: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 0.1)).collect();
    let rects_001: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 0.01)).collect();

    println!("Building index with {} points...", num_items);
    let start = Instant::now();
    let mut tree = KdTree::new();
    for &point in &points {
        let _added = tree.insert(point).expect("point lies in the unit square");
    }
    let build_time = start.elapsed();
    println!(
        "Index built in {:.2}ms ({} distinct, height {})\n",
        build_time.as_secs_f64() * 1000.0,
        tree.len(),
        tree.height()
    );

    println!("Running range benchmarks:");
    println!("-----------------------");
    bench_search(&tree, &full, "100");
    bench_search(&tree, &rects_50, "50");
    bench_search(&tree, &rects_10, "10");
    bench_search(&tree, &rects_1, "1");
    bench_search(&tree, &rects_001, "0.01");
    println!();

    println!("Running neighbor benchmarks:");
    println!("-----------------------");
    bench_neighbors(&tree, &points[..num_tests]);
    let random_queries: Vec<Point2D> = (0..num_items / 10)
        .map(|_| Point2D::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();
    bench_neighbors(&tree, &random_queries);
    println!();
}
