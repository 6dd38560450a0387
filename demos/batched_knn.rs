//! Batched KNN query example.
//!
//! Builds a small batch of point clouds and prints the nearest neighbors of a
//! few query points under both distance layouts.

use pointops::prelude::*;

fn main() {
    env_logger::init();

    println!("pointops - Batched Brute-Force KNN Example\n");

    // One cloud of 3D points.
    let points = PointBatch::from_clouds(vec![vec![
        [0.0f32, 0.0, 0.0], // Point 0: origin
        [1.0, 0.0, 0.0],    // Point 1: unit x
        [0.0, 1.0, 0.0],    // Point 2: unit y
        [0.0, 0.0, 1.0],    // Point 3: unit z
        [1.0, 1.0, 1.0],    // Point 4: diagonal
        [0.5, 0.5, 0.5],    // Point 5: center
    ]])
    .unwrap();

    let queries = PointBatch::from_clouds(vec![vec![
        [0.4f32, 0.4, 0.4],
        [1.0, 1.0, 0.9],
    ]])
    .unwrap();

    let (b, n, _) = points.shape();
    let (_, m, _) = queries.shape();
    println!("Reference: {} batch(es) of {} points; {} queries", b, n, m);

    let k = 3;
    let (indices, distances) = knn_query(k, &points, Some(&queries)).unwrap();

    for q in 0..m {
        println!("\nQuery {}: {:?}", q, queries.point(0, q).unwrap());
        println!("{:>5} {:>10} {:>15}", "Rank", "Index", "Distance");
        println!("{:-<32}", "");
        for j in 0..k as usize {
            println!(
                "{:>5} {:>10} {:>15.6}",
                j + 1,
                indices.get(0, q, j).unwrap(),
                distances.get(0, q, j).unwrap()
            );
        }
    }

    // Same query under the legacy distance-row layout.
    println!("\n--- Legacy truncated distance layout ---\n");

    let searcher = KnnSearcher::new(
        KnnConfig::new(k).with_distance_rows(DistanceRowMode::LegacyTruncated),
    );
    let result = searcher.query(&points, Some(&queries)).unwrap();

    println!("Index shape:    {:?}", result.indices.shape());
    println!("Distance shape: {:?} (rows truncated to k - 1)", result.distances.shape());

    println!("\nDone!");
}
