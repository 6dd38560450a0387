//! Squared-L2 distance primitives over packed 3D coordinates.
//!
//! All inputs are flat slices of packed `[x, y, z]` triples; distances are
//! accumulated in f32 regardless of the coordinate storage type.

use crate::types::{CoordValue, POINT_DIM};

/// Helper to convert to f32 without ambiguity with NumCast::to_f32
#[inline(always)]
fn to_f32<T: CoordValue>(v: T) -> f32 {
    CoordValue::to_f32(v)
}

/// Squared Euclidean distance between two 3D points.
#[inline]
pub fn squared_l2_3d<T: CoordValue>(a: &[T], b: &[T]) -> f32 {
    debug_assert_eq!(a.len(), POINT_DIM);
    debug_assert_eq!(b.len(), POINT_DIM);
    let dx = to_f32(a[0]) - to_f32(b[0]);
    let dy = to_f32(a[1]) - to_f32(b[1]);
    let dz = to_f32(a[2]) - to_f32(b[2]);
    dx * dx + dy * dy + dz * dz
}

/// Compute squared L2 distances from one query point to every point of a
/// packed cloud, filling `out` (length N).
pub fn one_to_many_squared_l2_3d<T: CoordValue>(query: &[T], cloud: &[T], out: &mut [f32]) {
    debug_assert_eq!(query.len(), POINT_DIM);
    debug_assert_eq!(cloud.len(), out.len() * POINT_DIM);
    for (slot, point) in out.iter_mut().zip(cloud.chunks_exact(POINT_DIM)) {
        *slot = squared_l2_3d(query, point);
    }
}

/// Compute the full (M, N) pairwise squared L2 matrix between a packed query
/// set (M points) and a packed cloud (N points), filling `out` row-major.
pub fn pairwise_squared_l2_3d<T: CoordValue>(queries: &[T], cloud: &[T], out: &mut [f32]) {
    let n = cloud.len() / POINT_DIM;
    debug_assert_eq!(out.len(), (queries.len() / POINT_DIM) * n);
    for (row, query) in out
        .chunks_exact_mut(n)
        .zip(queries.chunks_exact(POINT_DIM))
    {
        one_to_many_squared_l2_3d(query, cloud, row);
    }
}
