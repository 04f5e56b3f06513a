use super::prelude::*;
use super::voxel::Cell;

/// Dense 3D store with a fixed shape.
///
/// Cells are laid out row-major: the first axis is outermost and the
/// third axis (z) is innermost, which is also the order frames are
/// serialized in.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStorage<T> {
    shape: Vector3<usize>,
    cells: Vec<T>,
}

impl<T: Cell> GridStorage<T> {
    pub fn new(shape: Vector3<usize>) -> Self {
        Self {
            shape,
            cells: vec![T::default(); shape.x * shape.y * shape.z],
        }
    }

    #[inline]
    pub fn shape(&self) -> &Vector3<usize> {
        &self.shape
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn lin_index(&self, index: &Point3<usize>) -> Option<usize> {
        if index.x >= self.shape.x || index.y >= self.shape.y || index.z >= self.shape.z {
            return None;
        }

        Some((index.x * self.shape.y + index.y) * self.shape.z + index.z)
    }

    pub fn index_from_lin_index(&self, lin_index: usize) -> Option<Point3<usize>> {
        if lin_index >= self.cells.len() {
            return None;
        }

        let (q, z) = num_integer::div_rem(lin_index, self.shape.z);
        let (x, y) = num_integer::div_rem(q, self.shape.y);

        Some(Point3::new(x, y, z))
    }

    #[inline]
    pub fn get(&self, index: &Point3<usize>) -> Option<&T> {
        self.lin_index(index).and_then(|i| self.cells.get(i))
    }

    #[inline]
    pub fn get_mut(&mut self, index: &Point3<usize>) -> Option<&mut T> {
        self.lin_index(index).and_then(|i| self.cells.get_mut(i))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(T::default());
    }
}
