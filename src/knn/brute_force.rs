//! Dense brute-force candidate selection.
//!
//! Computes the full pairwise distance row for every query point and sorts an
//! index permutation of it, exactly as the whole-array formulation does. No
//! spatial index is built or reused across calls.

use crate::distance::one_to_many_squared_l2_3d;
use crate::knn::strategy::CandidateSelector;
use crate::types::{CoordValue, PointIndex, POINT_DIM};
use ordered_float::OrderedFloat;

/// Brute-force selector: full distance row, argsort, truncate to k.
///
/// O(M * N) memory and O(M * N * log N) time per batch element, dominated by
/// the sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSelector;

impl<T: CoordValue> CandidateSelector<T> for BruteForceSelector {
    fn select(
        &self,
        queries: &[T],
        cloud: &[T],
        k: usize,
        indices_out: &mut [PointIndex],
        squared_distances_out: &mut [f32],
    ) {
        let n = cloud.len() / POINT_DIM;
        debug_assert!(k >= 1 && k <= n);
        debug_assert_eq!(indices_out.len(), squared_distances_out.len());
        debug_assert_eq!(indices_out.len(), (queries.len() / POINT_DIM) * k);

        let mut row = vec![0.0f32; n];
        let mut perm: Vec<PointIndex> = (0..n as PointIndex).collect();

        for (m, query) in queries.chunks_exact(POINT_DIM).enumerate() {
            one_to_many_squared_l2_3d(query, cloud, &mut row);

            for (slot, i) in perm.iter_mut().zip(0..n as PointIndex) {
                *slot = i;
            }
            perm.sort_unstable_by_key(|&i| OrderedFloat(row[i as usize]));

            let offset = m * k;
            for (j, &i) in perm[..k].iter().enumerate() {
                indices_out[offset + j] = i;
                squared_distances_out[offset + j] = row[i as usize];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_f32(
        queries: &[f32],
        cloud: &[f32],
        k: usize,
    ) -> (Vec<PointIndex>, Vec<f32>) {
        let m = queries.len() / POINT_DIM;
        let mut indices = vec![0; m * k];
        let mut distances = vec![0.0; m * k];
        BruteForceSelector.select(queries, cloud, k, &mut indices, &mut distances);
        (indices, distances)
    }

    #[test]
    fn test_select_nearest_first() {
        let cloud = [
            0.0f32, 0.0, 0.0, //
            1.0, 1.0, 1.0, //
            2.0, 2.0, 2.0, //
            3.0, 3.0, 3.0,
        ];
        let queries = [0.0f32, 0.0, 0.0, 3.0, 3.0, 3.0];

        let (indices, distances) = select_f32(&queries, &cloud, 3);

        assert_eq!(indices, vec![0, 1, 2, 3, 2, 1]);
        assert_eq!(distances, vec![0.0, 3.0, 12.0, 0.0, 3.0, 12.0]);
    }

    #[test]
    fn test_select_k_equals_n() {
        let cloud = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0];
        let queries = [0.9f32, 0.0, 0.0];

        let (indices, _) = select_f32(&queries, &cloud, 2);
        assert_eq!(indices, vec![1, 0]);
    }

    #[test]
    fn test_select_distances_non_decreasing() {
        let cloud = [
            5.0f32, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            3.0, 0.0, 0.0, //
            2.0, 0.0, 0.0, //
            4.0, 0.0, 0.0,
        ];
        let queries = [0.0f32, 0.0, 0.0];

        let (indices, distances) = select_f32(&queries, &cloud, 5);

        assert_eq!(indices, vec![1, 3, 2, 4, 0]);
        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
