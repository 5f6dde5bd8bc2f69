//! Three-component unsigned vector (`uint3`)

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::swizzle::{Swizzle, WritableSwizzle};
use crate::vector::{impl_uint_vector, UInt4};

/// Three `u32` lanes packed with no padding: 12 bytes, 4-byte aligned,
/// `x` at offset 0, `y` at 4, `z` at 8.
///
/// `r`, `g` and `b` are the colour names of `x`, `y` and `z`.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct UInt3 {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl_uint_vector!(UInt3, "uint3", 3, x: 0, y: 1, z: 2);

impl UInt3 {
    #[inline]
    pub const fn component(&self, c: Component) -> u32 {
        match c {
            Component::X => self.x,
            Component::Y => self.y,
            Component::Z => self.z,
        }
    }

    #[inline]
    pub fn component_mut(&mut self, c: Component) -> &mut u32 {
        match c {
            Component::X => &mut self.x,
            Component::Y => &mut self.y,
            Component::Z => &mut self.z,
        }
    }

    #[inline]
    pub const fn r(&self) -> u32 {
        self.x
    }

    #[inline]
    pub const fn g(&self) -> u32 {
        self.y
    }

    #[inline]
    pub const fn b(&self) -> u32 {
        self.z
    }

    #[inline]
    pub fn r_mut(&mut self) -> &mut u32 {
        &mut self.x
    }

    #[inline]
    pub fn g_mut(&mut self) -> &mut u32 {
        &mut self.y
    }

    #[inline]
    pub fn b_mut(&mut self) -> &mut u32 {
        &mut self.z
    }

    /// Read the lanes picked by `sel`, in selection order
    #[inline]
    pub fn swizzle<const N: usize>(&self, sel: Swizzle<N>) -> [u32; N] {
        sel.lanes().map(|c| self.component(c))
    }

    /// Assign `values[i]` to lane `sel.lanes()[i]` for every `i`
    #[inline]
    pub fn set_swizzle<const N: usize>(&mut self, sel: WritableSwizzle<N>, values: [u32; N]) {
        for (c, value) in sel.lanes().into_iter().zip(values) {
            *self.component_mut(c) = value;
        }
    }

    /// Append a fourth lane
    #[inline]
    pub const fn extend(self, w: u32) -> UInt4 {
        UInt4::from_xyz(self, w)
    }
}

impl From<(u32, u32, u32)> for UInt3 {
    #[inline]
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Self::new(x, y, z)
    }
}

impl std::ops::Index<Component> for UInt3 {
    type Output = u32;

    #[inline]
    fn index(&self, c: Component) -> &u32 {
        &self.as_array()[c.index()]
    }
}

impl std::ops::IndexMut<Component> for UInt3 {
    #[inline]
    fn index_mut(&mut self, c: Component) -> &mut u32 {
        self.component_mut(c)
    }
}
