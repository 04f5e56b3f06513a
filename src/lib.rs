pub mod core;
pub mod device;

pub use crate::core::error::GridError;
pub use crate::core::grid::{GridConfig, VoxelGrid};
pub use crate::device::{Device, RecordingDevice, WriterDevice};
