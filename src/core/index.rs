use std::ops::Deref;

use num_integer::Integer;

use super::prelude::*;

/// Which of the two plane stores a lattice coordinate lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneKind {
    X,
    Y,
}

/// Voxel Index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoxelIndex(pub Point3<Coord>);

impl Deref for VoxelIndex {
    type Target = Point3<Coord>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl VoxelIndex {
    pub fn new(x: Coord, y: Coord, z: Coord) -> Self {
        Self(Point3::new(x, y, z))
    }

    /// `extent` is (width, depth, height).
    pub fn is_within(&self, extent: &Vector3<usize>) -> bool {
        let inside = |c: Coord, len: usize| usize::try_from(c).map_or(false, |c| c < len);

        inside(self.x, extent.x) && inside(self.y, extent.y) && inside(self.z, extent.z)
    }

    /// The four edges surrounding the voxel on the doubled lattice:
    /// left, right, front, back. `None` if doubling overflows.
    pub fn edge_lattice_indices(&self) -> Option<[LatticeIndex; 4]> {
        let x2 = self.x.checked_mul(2)?;
        let y2 = self.y.checked_mul(2)?;
        let z = self.z;

        Some([
            LatticeIndex::new(x2, y2.checked_add(1)?, z),
            LatticeIndex::new(x2.checked_add(2)?, y2 + 1, z),
            LatticeIndex::new(x2 + 1, y2, z),
            LatticeIndex::new(x2 + 1, y2.checked_add(2)?, z),
        ])
    }

    /// Offset into a voxel store laid out x-outer, then y, then z.
    pub fn linear_index(&self, extent: &Vector3<usize>) -> Option<usize> {
        if !self.is_within(extent) {
            return None;
        }

        let (x, y, z) = (self.x as usize, self.y as usize, self.z as usize);
        Some((x * extent.y + y) * extent.z + z)
    }
}

/// Doubled Lattice Index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeIndex(pub Point3<Coord>);

impl Deref for LatticeIndex {
    type Target = Point3<Coord>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl LatticeIndex {
    pub fn new(x: Coord, y: Coord, z: Coord) -> Self {
        Self(Point3::new(x, y, z))
    }

    /// Classified by the parity of the untransformed x component only.
    pub fn plane_kind(&self) -> PlaneKind {
        if self.x.is_even() {
            PlaneKind::X
        } else {
            PlaneKind::Y
        }
    }

    pub fn plane_index(&self) -> PlaneIndex {
        PlaneIndex(transform(&self.0))
    }
}

/// Plane Index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneIndex(pub Point3<Coord>);

impl Deref for PlaneIndex {
    type Target = Point3<Coord>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PlaneIndex {
    /// `None` if any component is negative.
    pub fn to_unsigned(&self) -> Option<Point3<usize>> {
        Some(Point3::new(
            usize::try_from(self.x).ok()?,
            usize::try_from(self.y).ok()?,
            usize::try_from(self.z).ok()?,
        ))
    }
}

/// Maps a doubled lattice coordinate `(x2, y2, z)` to `(floor(x2/2), floor(y2/2), z)`.
pub fn transform(v: &Point3<Coord>) -> Point3<Coord> {
    Point3::new(Integer::div_floor(&v.x, &2), Integer::div_floor(&v.y, &2), v.z)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_transform() {
        assert_eq!(transform(&Point3::new(0, 1, 0)), Point3::new(0, 0, 0));
        assert_eq!(transform(&Point3::new(2, 1, 0)), Point3::new(1, 0, 0));
        assert_eq!(transform(&Point3::new(7, 4, 3)), Point3::new(3, 2, 3));

        // floor, not truncation
        assert_eq!(transform(&Point3::new(-1, -3, -5)), Point3::new(-1, -2, -5));
    }

    #[test]
    fn test_edge_lattice_indices() {
        let edges = VoxelIndex::new(0, 0, 0).edge_lattice_indices();
        assert_eq!(
            edges,
            Some([
                LatticeIndex::new(0, 1, 0),
                LatticeIndex::new(2, 1, 0),
                LatticeIndex::new(1, 0, 0),
                LatticeIndex::new(1, 2, 0),
            ])
        );

        let edges = VoxelIndex::new(3, 1, 2).edge_lattice_indices().unwrap();
        assert_eq!(edges[0], LatticeIndex::new(6, 3, 2));
        assert_eq!(edges[3], LatticeIndex::new(7, 4, 2));

        assert_eq!(VoxelIndex::new(Coord::MAX, 0, 0).edge_lattice_indices(), None);
        assert_eq!(VoxelIndex::new(0, Coord::MAX, 0).edge_lattice_indices(), None);
        assert_eq!(VoxelIndex::new(0, Coord::MIN, 0).edge_lattice_indices(), None);
        assert!(VoxelIndex::new(Coord::MAX / 2 - 1, 0, Coord::MAX)
            .edge_lattice_indices()
            .is_some());
    }

    #[test]
    fn test_plane_kind() {
        let kinds = VoxelIndex::new(5, 2, 1)
            .edge_lattice_indices()
            .unwrap()
            .map(|edge| edge.plane_kind());
        assert_eq!(kinds, [PlaneKind::X, PlaneKind::X, PlaneKind::Y, PlaneKind::Y]);

        assert_eq!(LatticeIndex::new(-2, 0, 0).plane_kind(), PlaneKind::X);
        assert_eq!(LatticeIndex::new(-1, 0, 0).plane_kind(), PlaneKind::Y);
    }

    #[test]
    fn test_plane_index() {
        let planes = VoxelIndex::new(1, 1, 0)
            .edge_lattice_indices()
            .unwrap()
            .map(|edge| edge.plane_index());

        assert_eq!(planes[0], PlaneIndex(Point3::new(1, 1, 0)));
        assert_eq!(planes[1], PlaneIndex(Point3::new(2, 1, 0)));
        assert_eq!(planes[2], PlaneIndex(Point3::new(1, 1, 0)));
        assert_eq!(planes[3], PlaneIndex(Point3::new(1, 2, 0)));

        assert_eq!(PlaneIndex(Point3::new(0, -1, 0)).to_unsigned(), None);
        assert_eq!(
            PlaneIndex(Point3::new(4, 0, 2)).to_unsigned(),
            Some(Point3::new(4, 0, 2))
        );
    }

    #[test]
    fn test_voxel_bounds() {
        let extent = Vector3::new(2, 3, 4);

        assert!(VoxelIndex::new(0, 0, 0).is_within(&extent));
        assert!(VoxelIndex::new(1, 2, 3).is_within(&extent));
        assert!(!VoxelIndex::new(2, 0, 0).is_within(&extent));
        assert!(!VoxelIndex::new(0, 3, 0).is_within(&extent));
        assert!(!VoxelIndex::new(0, 0, 4).is_within(&extent));
        assert!(!VoxelIndex::new(-1, 0, 0).is_within(&extent));
        assert!(!VoxelIndex::new(0, 0, 0).is_within(&Vector3::new(0, 3, 4)));

        assert_eq!(VoxelIndex::new(1, 2, 3).linear_index(&extent), Some(23));
        assert_eq!(VoxelIndex::new(0, 0, 1).linear_index(&extent), Some(1));
        assert_eq!(VoxelIndex::new(0, 1, 0).linear_index(&extent), Some(4));
        assert_eq!(VoxelIndex::new(-1, 1, 0).linear_index(&extent), None);
    }
}
