//! Batched point cloud storage.
//!
//! A [`PointBatch`] holds B independent clouds of N points each, stored as one
//! contiguous row-major (B, N, 3) buffer. Batches are immutable after
//! construction and never interact with each other.

use crate::error::{PointOpsError, Result};
use crate::types::{CoordValue, POINT_DIM};

/// A batch of B point clouds, each containing N points in 3D space.
#[derive(Debug)]
pub struct PointBatch<T: CoordValue> {
    /// Contiguous storage, length B * N * 3.
    data: Vec<T>,

    /// Number of clouds in the batch.
    batches: usize,

    /// Number of points per cloud.
    points_per_cloud: usize,
}

impl<T: CoordValue> PointBatch<T> {
    /// Create a batch from per-cloud point lists.
    ///
    /// Every cloud must contain the same number of points; ragged input is
    /// rejected with a shape mismatch.
    pub fn from_clouds(clouds: Vec<Vec<[T; POINT_DIM]>>) -> Result<Self> {
        if clouds.is_empty() {
            return Err(PointOpsError::shape_mismatch("batch cannot be empty"));
        }

        let points_per_cloud = clouds[0].len();
        if points_per_cloud == 0 {
            return Err(PointOpsError::shape_mismatch("clouds cannot be empty"));
        }

        let batches = clouds.len();
        let mut data = Vec::with_capacity(batches * points_per_cloud * POINT_DIM);
        for (b, cloud) in clouds.iter().enumerate() {
            if cloud.len() != points_per_cloud {
                return Err(PointOpsError::shape_mismatch(format!(
                    "cloud {} has {} points but cloud 0 has {}",
                    b,
                    cloud.len(),
                    points_per_cloud
                )));
            }
            for point in cloud {
                data.extend_from_slice(point);
            }
        }

        Ok(Self {
            data,
            batches,
            points_per_cloud,
        })
    }

    /// Create a batch from a flat coordinate buffer.
    ///
    /// The buffer must hold exactly `batches * points_per_cloud * 3` values in
    /// row-major (B, N, 3) order.
    pub fn from_flat(data: Vec<T>, batches: usize, points_per_cloud: usize) -> Result<Self> {
        if batches == 0 || points_per_cloud == 0 {
            return Err(PointOpsError::shape_mismatch(
                "batch and point dimensions must be non-zero",
            ));
        }

        let expected = batches * points_per_cloud * POINT_DIM;
        if data.len() != expected {
            return Err(PointOpsError::shape_mismatch(format!(
                "expected {} coordinates for shape ({}, {}, {}), got {}",
                expected,
                batches,
                points_per_cloud,
                POINT_DIM,
                data.len()
            )));
        }

        Ok(Self {
            data,
            batches,
            points_per_cloud,
        })
    }

    /// Get the number of clouds in the batch (B).
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Get the number of points per cloud (N).
    pub fn points_per_cloud(&self) -> usize {
        self.points_per_cloud
    }

    /// Get the (B, N, 3) shape of the batch.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.batches, self.points_per_cloud, POINT_DIM)
    }

    /// Get the packed coordinates of one cloud (an N * 3 slice).
    ///
    /// Panics if `batch` is out of range.
    pub fn cloud(&self, batch: usize) -> &[T] {
        let stride = self.points_per_cloud * POINT_DIM;
        &self.data[batch * stride..(batch + 1) * stride]
    }

    /// Get the coordinates of a single point, or `None` if out of range.
    pub fn point(&self, batch: usize, index: usize) -> Option<&[T]> {
        if batch >= self.batches || index >= self.points_per_cloud {
            return None;
        }
        let offset = (batch * self.points_per_cloud + index) * POINT_DIM;
        Some(&self.data[offset..offset + POINT_DIM])
    }

    /// Get raw access to the underlying coordinate buffer.
    pub fn raw_data(&self) -> &[T] {
        &self.data
    }
}

impl<T: CoordValue> Clone for PointBatch<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            batches: self.batches,
            points_per_cloud: self.points_per_cloud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_clouds() {
        let batch = PointBatch::from_clouds(vec![
            vec![[0.0f32, 0.0, 0.0], [1.0, 1.0, 1.0]],
            vec![[2.0, 2.0, 2.0], [3.0, 3.0, 3.0]],
        ])
        .unwrap();

        assert_eq!(batch.shape(), (2, 2, 3));
        assert_eq!(batch.point(0, 1).unwrap(), &[1.0, 1.0, 1.0]);
        assert_eq!(batch.point(1, 0).unwrap(), &[2.0, 2.0, 2.0]);
        assert_eq!(batch.cloud(1), &[2.0, 2.0, 2.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_from_flat() {
        let data = vec![0.0f32, 0.0, 0.0, 1.0, 1.0, 1.0];
        let batch = PointBatch::from_flat(data, 1, 2).unwrap();

        assert_eq!(batch.batches(), 1);
        assert_eq!(batch.points_per_cloud(), 2);
        assert_eq!(batch.point(0, 1).unwrap(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_from_flat_wrong_length() {
        let data = vec![0.0f32; 7];
        let result = PointBatch::from_flat(data, 1, 2);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_clouds_ragged() {
        let result = PointBatch::from_clouds(vec![
            vec![[0.0f32, 0.0, 0.0], [1.0, 1.0, 1.0]],
            vec![[2.0, 2.0, 2.0]],
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_clouds_empty() {
        assert!(PointBatch::<f32>::from_clouds(vec![]).is_err());
        assert!(PointBatch::<f32>::from_clouds(vec![vec![]]).is_err());
    }

    #[test]
    fn test_point_out_of_bounds() {
        let batch =
            PointBatch::from_clouds(vec![vec![[0.0f32, 0.0, 0.0], [1.0, 1.0, 1.0]]]).unwrap();
        assert!(batch.point(0, 1).is_some());
        assert!(batch.point(0, 2).is_none());
        assert!(batch.point(1, 0).is_none());
    }

    #[test]
    fn test_f64_storage() {
        let batch = PointBatch::from_clouds(vec![vec![[0.0f64, 1.0, 2.0]]]).unwrap();
        assert_eq!(batch.point(0, 0).unwrap(), &[0.0, 1.0, 2.0]);
    }
}
