//! Candidate-selection strategy interface.

use crate::types::{CoordValue, PointIndex};

/// Trait for per-cloud candidate selection.
///
/// A selector answers one batch element at a time: given a packed query set
/// (M points) and a packed reference cloud (N points), it produces the k
/// nearest reference indices and their squared distances for every query row,
/// nearest first. The order among exactly-equal distances is unspecified.
///
/// Inputs are validated by the caller; implementations may assume
/// `1 <= k <= N` and packed `[x, y, z]` layout.
pub trait CandidateSelector<T: CoordValue>: Send + Sync {
    /// Fill `indices_out` and `squared_distances_out` (both length M * k)
    /// with the k nearest neighbors of each query row.
    fn select(
        &self,
        queries: &[T],
        cloud: &[T],
        k: usize,
        indices_out: &mut [PointIndex],
        squared_distances_out: &mut [f32],
    );
}
