use std::fmt::Debug;

pub trait Cell: Default + Clone + Copy + Debug {}

/// Lit Cell
///
/// Stored as the byte the display expects on the wire: `1` when lit, `0`
/// otherwise. A slice of cells casts directly to frame payload bytes.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Lit(u8);

impl Cell for Lit {}

impl Lit {
    pub const ON: Lit = Lit(1);
    pub const OFF: Lit = Lit(0);

    #[inline]
    pub fn is_lit(&self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.0 ^= 1;
    }
}

impl From<bool> for Lit {
    fn from(value: bool) -> Self {
        if value {
            Lit::ON
        } else {
            Lit::OFF
        }
    }
}
