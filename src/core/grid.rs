use std::sync::Arc;

use parking_lot::Mutex;

use crate::device::{self, Device, DeviceRef};

use super::error::GridError;
use super::frame::{encode_frame, x_plane_shape, y_plane_shape};
use super::index::{PlaneKind, VoxelIndex};
use super::prelude::*;
use super::storage::GridStorage;
use super::voxel::Lit;

/// Cells flipped by one voxel toggle, as offsets into the stores.
#[derive(Debug, Clone, Copy)]
struct Toggle {
    voxel: usize,
    planes: [(PlaneKind, usize); 4],
}

#[derive(Debug, Clone)]
pub struct GridConfig {
    pub width: usize,
    pub depth: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 8,
            depth: 8,
            height: 8,
        }
    }
}

/// Voxel Grid
///
/// Keeps the lit state of every voxel together with the two edge-plane
/// stores the display is driven from. Every voxel toggle flips exactly
/// four plane cells; [`VoxelGrid::flush`] serializes the planes into a
/// frame for a [`Device`].
pub struct VoxelGrid {
    extent: Vector3<usize>,
    voxels: GridStorage<Lit>,
    xplanes: GridStorage<Lit>,
    yplanes: GridStorage<Lit>,
    device: Option<DeviceRef>,
}

impl VoxelGrid {
    pub fn new(width: usize, depth: usize, height: usize) -> Self {
        let extent = Vector3::new(width, depth, height);

        log::debug!("allocating {width}x{depth}x{height} voxel grid");

        Self {
            extent,
            voxels: GridStorage::new(extent),
            xplanes: GridStorage::new(x_plane_shape(&extent)),
            yplanes: GridStorage::new(y_plane_shape(&extent)),
            device: None,
        }
    }

    pub fn with_device<D: Device + 'static>(
        width: usize,
        depth: usize,
        height: usize,
        device: &Arc<Mutex<D>>,
    ) -> Self {
        let mut grid = Self::new(width, depth, height);
        grid.set_device(device);
        grid
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.width, config.depth, config.height)
    }

    /// The 8x8x8 display.
    pub fn cube8() -> Self {
        Self::from_config(&GridConfig::default())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.extent.x
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.extent.y
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.extent.z
    }

    #[inline]
    pub fn extent(&self) -> &Vector3<usize> {
        &self.extent
    }

    #[inline]
    pub fn xplanes(&self) -> &GridStorage<Lit> {
        &self.xplanes
    }

    #[inline]
    pub fn yplanes(&self) -> &GridStorage<Lit> {
        &self.yplanes
    }

    /// Discard all voxel and plane state.
    pub fn zero(&mut self) {
        self.voxels.clear();
        self.xplanes.clear();
        self.yplanes.clear();

        log::debug!("zeroed voxel grid");
    }

    /// Flip voxel (x, y, z). Coordinates outside the grid are ignored.
    pub fn toggle_voxel(&mut self, x: Coord, y: Coord, z: Coord) {
        if let Err(err) = self.try_toggle_voxel(x, y, z) {
            log::trace!("ignored toggle: {err}");
        }
    }

    /// Like [`VoxelGrid::toggle_voxel`] but reports why nothing was flipped.
    pub fn try_toggle_voxel(&mut self, x: Coord, y: Coord, z: Coord) -> Result<(), GridError> {
        let toggle = self.resolve_toggle(&VoxelIndex::new(x, y, z))?;
        self.apply_toggle(&toggle);

        log::trace!("toggled voxel ({x}, {y}, {z})");

        Ok(())
    }

    /// Resolve the voxel cell and all four plane cells a toggle would flip,
    /// without flipping anything.
    fn resolve_toggle(&self, voxel: &VoxelIndex) -> Result<Toggle, GridError> {
        let (x, y, z) = (voxel.x, voxel.y, voxel.z);

        let voxel_index = voxel
            .linear_index(&self.extent)
            .ok_or(GridError::OutOfBounds { x, y, z })?;
        let edges = voxel
            .edge_lattice_indices()
            .ok_or(GridError::OutOfBounds { x, y, z })?;

        let mut planes = [(PlaneKind::X, 0); 4];
        for (target, edge) in planes.iter_mut().zip(edges) {
            let kind = edge.plane_kind();
            let storage = match kind {
                PlaneKind::X => &self.xplanes,
                PlaneKind::Y => &self.yplanes,
            };

            let lin_index = edge
                .plane_index()
                .to_unsigned()
                .and_then(|index| storage.lin_index(&index))
                .ok_or(GridError::UnaddressablePlane { x, y, z })?;

            *target = (kind, lin_index);
        }

        Ok(Toggle {
            voxel: voxel_index,
            planes,
        })
    }

    fn apply_toggle(&mut self, toggle: &Toggle) {
        for &(kind, lin_index) in &toggle.planes {
            let storage = match kind {
                PlaneKind::X => &mut self.xplanes,
                PlaneKind::Y => &mut self.yplanes,
            };
            storage.as_mut_slice()[lin_index].toggle();
        }
        self.voxels.as_mut_slice()[toggle.voxel].toggle();
    }

    /// Toggle voxel (x, y, z) only if its lit state differs from `state`.
    pub fn set_voxel(&mut self, x: Coord, y: Coord, z: Coord, state: bool) -> Result<(), GridError> {
        let lit = self.is_lit(x, y, z).ok_or(GridError::OutOfBounds { x, y, z })?;

        if lit != state {
            self.try_toggle_voxel(x, y, z)?;
        }

        Ok(())
    }

    /// `None` if (x, y, z) is outside the grid.
    pub fn is_lit(&self, x: Coord, y: Coord, z: Coord) -> Option<bool> {
        VoxelIndex::new(x, y, z)
            .linear_index(&self.extent)
            .map(|i| self.voxels.as_slice()[i].is_lit())
    }

    pub fn lit_count(&self) -> usize {
        self.voxels.as_slice().iter().filter(|v| v.is_lit()).count()
    }

    /// Voxel states in x-outer, y, z-inner order.
    pub fn voxels(&self) -> Vec<bool> {
        self.voxels.as_slice().iter().map(Lit::is_lit).collect()
    }

    /// Load voxel states laid out as returned by [`VoxelGrid::voxels`].
    ///
    /// Every voxel that has to change is resolved before any is toggled, so
    /// on error the grid is left as it was.
    pub fn set_voxels(&mut self, states: &[bool]) -> Result<(), GridError> {
        if states.len() != self.voxels.len() {
            return Err(GridError::VoxelCountMismatch {
                expected: self.voxels.len(),
                actual: states.len(),
            });
        }

        let extent = self.extent;
        let positions = (0..extent.x).flat_map(move |x| {
            (0..extent.y).flat_map(move |y| {
                (0..extent.z).map(move |z| VoxelIndex::new(x as Coord, y as Coord, z as Coord))
            })
        });

        let toggles = positions
            .zip(states)
            .zip(self.voxels.as_slice())
            .filter(|((_, &state), current)| current.is_lit() != state)
            .map(|((voxel, _), _)| self.resolve_toggle(&voxel))
            .collect::<Result<Vec<_>, _>>()?;

        for toggle in &toggles {
            self.apply_toggle(toggle);
        }

        log::debug!("loaded voxel states, {} toggled", toggles.len());

        Ok(())
    }

    pub fn set_device<D: Device + 'static>(&mut self, device: &Arc<Mutex<D>>) {
        self.device = Some(device::downgrade(device));
    }

    pub fn clear_device(&mut self) {
        self.device = None;
    }

    /// The current plane state as a device frame.
    pub fn frame(&self) -> Vec<u8> {
        encode_frame(&self.xplanes, &self.yplanes)
    }

    /// Write the current frame to `device`, or to the bound device if none
    /// is given. Does nothing when neither is available.
    pub fn flush(&self, device: Option<&mut dyn Device>) {
        if let Some(device) = device {
            let frame = self.frame();
            log::debug!("flushing {} byte frame", frame.len());
            device.write(&frame);
            return;
        }

        match self.device.as_ref().and_then(|device| device.upgrade()) {
            Some(device) => {
                let frame = self.frame();
                log::debug!("flushing {} byte frame to bound device", frame.len());
                device.lock().write(&frame);
            }
            None => log::debug!("no device to flush to"),
        }
    }
}
