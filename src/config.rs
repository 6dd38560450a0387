//! Configuration types for KNN queries.

use serde::{Deserialize, Serialize};

/// Candidate-selection strategy, selected by configuration.
///
/// Only the dense brute-force strategy ships today; the enum is the seam a
/// spatial-index strategy would plug into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SelectionStrategy {
    /// Full pairwise distance computation followed by a per-row sort.
    #[default]
    BruteForce,
}

/// Row layout of the distance output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceRowMode {
    /// One distance row per query point: shape (B, M, k).
    #[default]
    PerQuery,

    /// Reproduce the row slice of an earlier implementation that truncated
    /// the distance output to its first `k - 1` rows, yielding shape
    /// (B, min(k - 1, M), k). Only useful for output parity with that
    /// implementation; the index output is unaffected.
    LegacyTruncated,
}

/// Execution options for a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Force sequential execution across batch elements. When false, batches
    /// at or above `parallel_batch_threshold` are processed in parallel.
    pub blocking: bool,

    /// Minimum batch size for parallel execution.
    pub parallel_batch_threshold: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            blocking: false,
            parallel_batch_threshold: 8,
        }
    }
}

/// Configuration for a KNN query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnConfig {
    /// Number of neighbors to return per query point.
    pub num_neighbors: u32,

    /// Candidate-selection strategy.
    pub strategy: SelectionStrategy,

    /// Report Euclidean distances (square root applied). When false, squared
    /// distances are returned.
    pub root_distances: bool,

    /// Row layout of the distance output.
    pub distance_rows: DistanceRowMode,

    /// Execution options.
    pub execution: ExecutionConfig,
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self {
            num_neighbors: 1,
            strategy: SelectionStrategy::default(),
            root_distances: true,
            distance_rows: DistanceRowMode::default(),
            execution: ExecutionConfig::default(),
        }
    }
}

impl KnnConfig {
    /// Create a configuration returning the given number of neighbors.
    pub fn new(num_neighbors: u32) -> Self {
        Self {
            num_neighbors,
            ..Default::default()
        }
    }

    /// Set the number of neighbors to return.
    pub fn with_num_neighbors(mut self, k: u32) -> Self {
        self.num_neighbors = k;
        self
    }

    /// Set the candidate-selection strategy.
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set whether to report Euclidean (rooted) distances.
    pub fn with_root_distances(mut self, root: bool) -> Self {
        self.root_distances = root;
        self
    }

    /// Set the distance row layout.
    pub fn with_distance_rows(mut self, mode: DistanceRowMode) -> Self {
        self.distance_rows = mode;
        self
    }

    /// Force sequential execution across batch elements.
    pub fn with_blocking(mut self, blocking: bool) -> Self {
        self.execution.blocking = blocking;
        self
    }

    /// Set the minimum batch size for parallel execution.
    pub fn with_parallel_batch_threshold(mut self, threshold: usize) -> Self {
        self.execution.parallel_batch_threshold = threshold;
        self
    }
}
