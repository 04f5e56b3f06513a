pub mod error;
pub mod frame;
pub mod grid;
pub mod index;
pub mod storage;
pub mod voxel;

pub mod prelude {
    /// Signed coordinate used for voxel and lattice addressing.
    pub type Coord = i64;

    pub use nalgebra::Point3;

    pub use nalgebra::Vector3;
}
