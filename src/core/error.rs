use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("voxel ({x}, {y}, {z}) is outside the grid")]
    OutOfBounds { x: Coord, y: Coord, z: Coord },

    /// Only reachable on grids whose width differs from their depth.
    #[error("voxel ({x}, {y}, {z}) maps onto a plane cell outside the plane arrays")]
    UnaddressablePlane { x: Coord, y: Coord, z: Coord },

    #[error("expected {expected} voxel states, got {actual}")]
    VoxelCountMismatch { expected: usize, actual: usize },
}
