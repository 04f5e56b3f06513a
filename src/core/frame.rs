use super::prelude::*;
use super::storage::GridStorage;
use super::voxel::Lit;

/// Precedes the x-plane cells.
pub const X_PLANES_START: u8 = 0x09;
/// Precedes the y-plane cells.
pub const Y_PLANES_START: u8 = 0x10;
/// Terminates a frame.
pub const FRAME_END: u8 = 0xff;

/// Shape of the x-plane store for a `(width, depth, height)` grid.
pub fn x_plane_shape(extent: &Vector3<usize>) -> Vector3<usize> {
    Vector3::new(extent.y + 1, extent.x, extent.z)
}

/// Shape of the y-plane store for a `(width, depth, height)` grid.
pub fn y_plane_shape(extent: &Vector3<usize>) -> Vector3<usize> {
    Vector3::new(extent.y, extent.x + 1, extent.z)
}

/// `(d+1)*w*h + d*(w+1)*h + 3`
pub fn frame_len(extent: &Vector3<usize>) -> usize {
    let x = x_plane_shape(extent);
    let y = y_plane_shape(extent);

    x.x * x.y * x.z + y.x * y.y * y.z + 3
}

/// Serialize both plane stores into one device frame.
pub fn encode_frame(xplanes: &GridStorage<Lit>, yplanes: &GridStorage<Lit>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(xplanes.len() + yplanes.len() + 3);

    buf.push(X_PLANES_START);
    buf.extend_from_slice(bytemuck::cast_slice(xplanes.as_slice()));
    buf.push(Y_PLANES_START);
    buf.extend_from_slice(bytemuck::cast_slice(yplanes.as_slice()));
    buf.push(FRAME_END);

    buf
}
