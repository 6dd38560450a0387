//! Neighbor query output grids.
//!
//! Query results come back as flat (batch, row, k) grids: one of indices into
//! the reference cloud and one of distances. Both are constructed per call and
//! never mutated afterwards.

use crate::types::PointIndex;

/// Indices of the k nearest reference points for each query point.
///
/// Shape (B, M, k); every value lies in `[0, N)` where N is the reference
/// cloud size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborIndices {
    data: Vec<PointIndex>,
    batches: usize,
    rows: usize,
    k: usize,
}

impl NeighborIndices {
    pub(crate) fn from_flat(
        data: Vec<PointIndex>,
        batches: usize,
        rows: usize,
        k: usize,
    ) -> Self {
        debug_assert_eq!(data.len(), batches * rows * k);
        Self {
            data,
            batches,
            rows,
            k,
        }
    }

    /// Get the (B, M, k) shape.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.batches, self.rows, self.k)
    }

    /// Get the j-th nearest index for a query row, or `None` if out of range.
    pub fn get(&self, batch: usize, row: usize, j: usize) -> Option<PointIndex> {
        if batch >= self.batches || row >= self.rows || j >= self.k {
            return None;
        }
        Some(self.data[(batch * self.rows + row) * self.k + j])
    }

    /// Get the k nearest indices for a query row, nearest first.
    ///
    /// Panics if `batch` or `row` is out of range.
    pub fn row(&self, batch: usize, row: usize) -> &[PointIndex] {
        let offset = (batch * self.rows + row) * self.k;
        &self.data[offset..offset + self.k]
    }

    /// Get raw access to the flat index buffer.
    pub fn raw_data(&self) -> &[PointIndex] {
        &self.data
    }
}

/// Distances from each query point to its selected neighbors.
///
/// Shape (B, R, k); R equals M under the fixed per-query layout, or
/// `min(k - 1, M)` under the legacy truncated layout (see
/// [`DistanceRowMode`](crate::config::DistanceRowMode)). Values are
/// non-negative and non-decreasing along the k axis.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborDistances {
    data: Vec<f32>,
    batches: usize,
    rows: usize,
    k: usize,
}

impl NeighborDistances {
    pub(crate) fn from_flat(data: Vec<f32>, batches: usize, rows: usize, k: usize) -> Self {
        debug_assert_eq!(data.len(), batches * rows * k);
        Self {
            data,
            batches,
            rows,
            k,
        }
    }

    /// Get the (B, R, k) shape.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.batches, self.rows, self.k)
    }

    /// Get the j-th nearest distance for a row, or `None` if out of range.
    pub fn get(&self, batch: usize, row: usize, j: usize) -> Option<f32> {
        if batch >= self.batches || row >= self.rows || j >= self.k {
            return None;
        }
        Some(self.data[(batch * self.rows + row) * self.k + j])
    }

    /// Get the k nearest distances for a row, nearest first.
    ///
    /// Panics if `batch` or `row` is out of range.
    pub fn row(&self, batch: usize, row: usize) -> &[f32] {
        let offset = (batch * self.rows + row) * self.k;
        &self.data[offset..offset + self.k]
    }

    /// Get raw access to the flat distance buffer.
    pub fn raw_data(&self) -> &[f32] {
        &self.data
    }
}

/// Result of a KNN query: neighbor indices and their distances.
#[derive(Debug, Clone)]
pub struct KnnResult {
    /// Indices of the k nearest reference points, shape (B, M, k).
    pub indices: NeighborIndices,

    /// Distances to the selected neighbors, shape (B, R, k).
    pub distances: NeighborDistances,
}
