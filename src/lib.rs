//! # pointops - Batched brute-force KNN over 3D point clouds
//!
//! A reference implementation of k-nearest-neighbor queries over batched
//! point clouds, computed by full pairwise distance evaluation followed by a
//! per-row sort.
//!
//! ## Overview
//!
//! For each query point in a batch of B clouds, the library returns the
//! indices and distances of its k nearest neighbors among a reference point
//! set of N points per cloud. The computation is deliberately dense: no k-d
//! tree, grid, or approximate index is built, which keeps the routine exact,
//! allocation-only, and easy to validate against other KNN kernels.
//!
//! ## Quick Start
//!
//! ```rust
//! use pointops::prelude::*;
//!
//! // One cloud of four collinear points.
//! let points = PointBatch::from_clouds(vec![vec![
//!     [0.0f32, 0.0, 0.0],
//!     [1.0, 1.0, 1.0],
//!     [2.0, 2.0, 2.0],
//!     [3.0, 3.0, 3.0],
//! ]]).unwrap();
//!
//! // Two query points in the same batch element.
//! let queries = PointBatch::from_clouds(vec![vec![
//!     [0.0f32, 0.0, 0.0],
//!     [3.0, 3.0, 3.0],
//! ]]).unwrap();
//!
//! let (indices, distances) = knn_query(3, &points, Some(&queries)).unwrap();
//!
//! assert_eq!(indices.shape(), (1, 2, 3));
//! assert_eq!(indices.row(0, 0), &[0, 1, 2]);
//! assert_eq!(indices.row(0, 1), &[3, 2, 1]);
//! assert!(distances.get(0, 0, 0).unwrap().abs() < 1e-6);
//! ```
//!
//! ## Self-KNN
//!
//! When no query batch is supplied, the reference batch queries itself and
//! every point's first neighbor is itself at distance zero:
//!
//! ```rust
//! use pointops::prelude::*;
//!
//! let points = PointBatch::from_clouds(vec![vec![
//!     [0.0f32, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 2.0, 0.0],
//! ]]).unwrap();
//!
//! let (indices, _) = knn_query(2, &points, None).unwrap();
//! for i in 0..3 {
//!     assert_eq!(indices.get(0, i, 0), Some(i as u32));
//! }
//! ```
//!
//! ## Configured queries
//!
//! [`KnnSearcher`] exposes the full configuration surface: squared versus
//! Euclidean distances, sequential versus parallel batch execution, and an
//! opt-in legacy distance-row layout kept for parity with an earlier
//! implementation (see [`config::DistanceRowMode`]).
//!
//! ```rust
//! use pointops::prelude::*;
//!
//! let points = PointBatch::from_clouds(vec![vec![
//!     [0.0f32, 0.0, 0.0],
//!     [1.0, 1.0, 1.0],
//!     [2.0, 2.0, 2.0],
//! ]]).unwrap();
//!
//! let searcher = KnnSearcher::new(
//!     KnnConfig::new(2)
//!         .with_root_distances(false)
//!         .with_blocking(true),
//! );
//! let result = searcher.query(&points, None).unwrap();
//! assert_eq!(result.distances.get(0, 0, 1), Some(3.0)); // squared
//! ```
//!
//! ## Module Overview
//!
//! - [`knn`]: the searcher, the brute-force selector, and the strategy seam
//! - [`point_batch`]: batched (B, N, 3) point cloud storage
//! - [`neighbor`]: output index/distance grids
//! - [`distance`]: squared-L2 primitives over packed 3D coordinates
//! - [`config`]: query configuration
//! - [`error`]: error codes and the crate [`Result`] alias

pub mod config;
pub mod distance;
pub mod knn;
pub mod neighbor;
pub mod point_batch;

mod error;
mod types;

pub use config::KnnConfig;
pub use error::{ErrorCode, PointOpsError, Result};
pub use knn::{knn_query, KnnSearcher};
pub use types::{CoordValue, NeighborPair, PointIndex, POINT_DIM};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{DistanceRowMode, ExecutionConfig, KnnConfig, SelectionStrategy};
    pub use crate::error::{ErrorCode, PointOpsError, Result};
    pub use crate::knn::{knn_query, BruteForceSelector, CandidateSelector, KnnSearcher};
    pub use crate::neighbor::{KnnResult, NeighborDistances, NeighborIndices};
    pub use crate::point_batch::PointBatch;
    pub use crate::types::{CoordValue, NeighborPair, PointIndex, POINT_DIM};
}
