//! Batched KNN searcher.

use crate::config::{DistanceRowMode, KnnConfig, SelectionStrategy};
use crate::error::{PointOpsError, Result};
use crate::knn::brute_force::BruteForceSelector;
use crate::knn::strategy::CandidateSelector;
use crate::neighbor::{KnnResult, NeighborDistances, NeighborIndices};
use crate::point_batch::PointBatch;
use crate::types::{CoordValue, PointIndex};
use log::debug;
use rayon::prelude::*;

/// Batched k-nearest-neighbor searcher.
///
/// Stateless apart from its configuration: each call computes its result from
/// scratch and allocates fresh output grids. Batch elements are independent
/// and may be processed in parallel (see [`ExecutionConfig`]); the caller
/// observes no difference beyond wall time.
///
/// [`ExecutionConfig`]: crate::config::ExecutionConfig
pub struct KnnSearcher {
    config: KnnConfig,
}

impl KnnSearcher {
    /// Create a searcher from a configuration.
    pub fn new(config: KnnConfig) -> Self {
        Self { config }
    }

    /// Create a searcher returning the given number of neighbors, with
    /// default options otherwise.
    pub fn with_neighbors(k: u32) -> Self {
        Self::new(KnnConfig::new(k))
    }

    /// Get the configuration.
    pub fn config(&self) -> &KnnConfig {
        &self.config
    }

    /// Find the k nearest reference points for every query point.
    ///
    /// When `queries` is `None`, the reference batch queries itself
    /// (self-KNN, M = N). Fails with `InvalidArgument` if k is zero, k
    /// exceeds the reference cloud size, or the batch dimensions differ.
    pub fn query<T: CoordValue>(
        &self,
        points: &PointBatch<T>,
        queries: Option<&PointBatch<T>>,
    ) -> Result<KnnResult> {
        let k = self.config.num_neighbors as usize;
        let n = points.points_per_cloud();

        if k == 0 {
            return Err(PointOpsError::invalid_argument(
                "num_neighbors must be positive",
            ));
        }
        if k > n {
            return Err(PointOpsError::invalid_argument(format!(
                "num_neighbors {} exceeds cloud size {}",
                k, n
            )));
        }

        let queries = queries.unwrap_or(points);
        if queries.batches() != points.batches() {
            return Err(PointOpsError::invalid_argument(format!(
                "query batch size {} does not match reference batch size {}",
                queries.batches(),
                points.batches()
            )));
        }

        let b = points.batches();
        let m = queries.points_per_cloud();

        debug!(
            "knn query: batches={} queries={} candidates={} k={} strategy={:?}",
            b, m, n, k, self.config.strategy
        );

        let selector = self.selector::<T>();
        let run = |batch: usize| {
            let mut indices = vec![0 as PointIndex; m * k];
            let mut distances = vec![0.0f32; m * k];
            selector.select(
                queries.cloud(batch),
                points.cloud(batch),
                k,
                &mut indices,
                &mut distances,
            );
            (indices, distances)
        };

        let parallel = !self.config.execution.blocking
            && b >= self.config.execution.parallel_batch_threshold;
        let per_batch: Vec<(Vec<PointIndex>, Vec<f32>)> = if parallel {
            (0..b).into_par_iter().map(run).collect()
        } else {
            (0..b).map(run).collect()
        };

        Ok(self.assemble(per_batch, b, m, k))
    }

    /// Instantiate the configured candidate selector.
    fn selector<T: CoordValue>(&self) -> Box<dyn CandidateSelector<T>> {
        match self.config.strategy {
            SelectionStrategy::BruteForce => Box::new(BruteForceSelector),
        }
    }

    /// Assemble per-batch selector output into the final grids.
    fn assemble(
        &self,
        per_batch: Vec<(Vec<PointIndex>, Vec<f32>)>,
        b: usize,
        m: usize,
        k: usize,
    ) -> KnnResult {
        // Row count of the distance grid. The legacy layout keeps only the
        // first k - 1 rows (clamped to M), matching the earlier
        // implementation's slice; indices always keep all M rows.
        let dist_rows = match self.config.distance_rows {
            DistanceRowMode::PerQuery => m,
            DistanceRowMode::LegacyTruncated => (k - 1).min(m),
        };

        let mut all_indices = Vec::with_capacity(b * m * k);
        let mut all_distances = Vec::with_capacity(b * dist_rows * k);

        for (indices, distances) in per_batch {
            all_indices.extend_from_slice(&indices);
            let kept = &distances[..dist_rows * k];
            if self.config.root_distances {
                all_distances.extend(kept.iter().map(|d| d.sqrt()));
            } else {
                all_distances.extend_from_slice(kept);
            }
        }

        KnnResult {
            indices: NeighborIndices::from_flat(all_indices, b, m, k),
            distances: NeighborDistances::from_flat(all_distances, b, dist_rows, k),
        }
    }
}

/// Find the k nearest reference points for every query point, with default
/// options.
///
/// Convenience wrapper over [`KnnSearcher`]: Euclidean distances, one
/// distance row per query point, brute-force selection.
pub fn knn_query<T: CoordValue>(
    k: u32,
    points: &PointBatch<T>,
    queries: Option<&PointBatch<T>>,
) -> Result<(NeighborIndices, NeighborDistances)> {
    let result = KnnSearcher::with_neighbors(k).query(points, queries)?;
    Ok((result.indices, result.distances))
}
