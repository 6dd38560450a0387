//! Core type definitions for pointops.

use num_traits::NumCast;

/// Index type for points within a cloud.
/// Can address up to 4 billion reference points with u32.
pub type PointIndex = u32;

/// Fixed coordinate dimensionality: all clouds are 3D.
pub const POINT_DIM: usize = 3;

/// A nearest neighbor result: (index, distance).
pub type NeighborPair = (PointIndex, f32);

/// Trait for floating-point types usable as point coordinates.
///
/// Distances are always accumulated in f32, regardless of the storage type.
pub trait CoordValue:
    Copy + Clone + Default + PartialOrd + NumCast + Send + Sync + 'static
{
    /// Convert to f32 for distance computations.
    fn to_f32(self) -> f32;

    /// Create from f32.
    fn from_f32(v: f32) -> Self;
}

impl CoordValue for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }
}

impl CoordValue for f64 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v as f64
    }
}
