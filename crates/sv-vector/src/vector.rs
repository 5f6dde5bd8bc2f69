//! Unsigned integer vector types
//!
//! All vectors are `#[repr(C)]` runs of `u32` with no padding, so they can
//! be cast straight into GPU upload buffers with `bytemuck`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::UInt3;

/// Implements the behaviour shared by every vector width.
macro_rules! impl_uint_vector {
    ($name:ident, $hlsl:literal, $lanes:literal, $( $field:ident: $idx:literal ),+) => {
        impl $name {
            pub const ZERO: Self = Self::splat(0);
            pub const ONE: Self = Self::splat(1);
            pub const MAX: Self = Self::splat(u32::MAX);

            #[inline]
            pub const fn new($( $field: u32 ),+) -> Self {
                Self { $( $field ),+ }
            }

            #[inline]
            pub const fn splat(value: u32) -> Self {
                Self { $( $field: value ),+ }
            }

            #[inline]
            pub const fn from_array(lanes: [u32; $lanes]) -> Self {
                Self { $( $field: lanes[$idx] ),+ }
            }

            #[inline]
            pub const fn to_array(self) -> [u32; $lanes] {
                [$( self.$field ),+]
            }

            /// Lanes as an array view over the same storage
            #[inline]
            pub fn as_array(&self) -> &[u32; $lanes] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn as_mut_array(&mut self) -> &mut [u32; $lanes] {
                bytemuck::cast_mut(self)
            }

            #[inline]
            pub fn get(&self, index: usize) -> Option<&u32> {
                self.as_array().get(index)
            }

            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Option<&mut u32> {
                self.as_mut_array().get_mut(index)
            }

            /// Read a lane by runtime index
            pub fn try_component(&self, index: usize) -> Result<u32, sv_core::VectorError> {
                self.get(index).copied().ok_or(sv_core::VectorError::IndexOutOfRange {
                    index,
                    len: $lanes,
                })
            }

            /// Combine two vectors lane by lane
            #[inline]
            pub const fn map2(self, rhs: Self, op: $crate::ops::BinaryOp) -> Self {
                Self { $( $field: op.apply(self.$field, rhs.$field) ),+ }
            }

            /// Native-endian bytes of the value
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }

            pub fn to_le_bytes(self) -> [u8; $lanes * 4] {
                let mut out = [0u8; $lanes * 4];
                for (chunk, lane) in out.chunks_exact_mut(4).zip(self.to_array()) {
                    chunk.copy_from_slice(&lane.to_le_bytes());
                }
                out
            }

            pub fn from_le_bytes(bytes: [u8; $lanes * 4]) -> Self {
                let mut lanes = [0u32; $lanes];
                for (lane, chunk) in lanes.iter_mut().zip(bytes.chunks_exact(4)) {
                    *lane = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                Self::from_array(lanes)
            }

            /// Render with the separator of `format`
            pub fn display_with<'a>(
                &'a self,
                format: &'a $crate::format::NumberFormat,
            ) -> $crate::format::VectorDisplay<'a> {
                $crate::format::VectorDisplay::new(self.as_array(), format)
            }

            /// Constructor expression in HLSL, e.g. `uint3(1, 2, 3)`
            pub fn to_hlsl_literal(&self) -> String {
                let lanes: Vec<String> = self.to_array().iter().map(u32::to_string).collect();
                format!("{}({})", $hlsl, lanes.join(", "))
            }
        }

        impl $crate::shader::ShaderType for $name {
            const HLSL_NAME: &'static str = $hlsl;
            const LANES: usize = $lanes;
        }

        impl From<[u32; $lanes]> for $name {
            #[inline]
            fn from(lanes: [u32; $lanes]) -> Self {
                Self::from_array(lanes)
            }
        }

        impl From<$name> for [u32; $lanes] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = u32;

            #[inline]
            fn index(&self, index: usize) -> &u32 {
                &self.as_array()[index]
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut u32 {
                &mut self.as_mut_array()[index]
            }
        }

        $crate::ops::impl_binary_op!($name, Add, Add, add, AddAssign, add_assign);
        $crate::ops::impl_binary_op!($name, Sub, Sub, sub, SubAssign, sub_assign);
        $crate::ops::impl_binary_op!($name, Mul, Mul, mul, MulAssign, mul_assign);
        $crate::ops::impl_binary_op!($name, Div, Div, div, DivAssign, div_assign);
        $crate::ops::impl_binary_op!($name, Rem, Rem, rem, RemAssign, rem_assign);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::format::write_lanes(f, self.as_array(), ",", <u32 as std::fmt::Display>::fmt)
            }
        }

        impl std::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::format::write_lanes(f, self.as_array(), ",", <u32 as std::fmt::LowerHex>::fmt)
            }
        }

        impl std::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::format::write_lanes(f, self.as_array(), ",", <u32 as std::fmt::UpperHex>::fmt)
            }
        }

        const _: () = assert!(std::mem::size_of::<$name>() == $lanes * 4);
        const _: () = assert!(std::mem::align_of::<$name>() == 4);
    };
}

pub(crate) use impl_uint_vector;

/// Two-component unsigned vector (`uint2`)
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct UInt2 {
    pub x: u32,
    pub y: u32,
}

impl_uint_vector!(UInt2, "uint2", 2, x: 0, y: 1);

impl UInt2 {
    /// Append a third lane
    #[inline]
    pub const fn extend(self, z: u32) -> UInt3 {
        UInt3::new(self.x, self.y, z)
    }
}

/// Four-component unsigned vector (`uint4`)
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct UInt4 {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub w: u32,
}

impl_uint_vector!(UInt4, "uint4", 4, x: 0, y: 1, z: 2, w: 3);

impl UInt4 {
    #[inline]
    pub const fn from_xyz(xyz: UInt3, w: u32) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    /// First three lanes
    #[inline]
    pub const fn xyz(self) -> UInt3 {
        UInt3::new(self.x, self.y, self.z)
    }

    /// The first three lanes as a `UInt3` sharing this vector's storage
    #[inline]
    pub fn xyz_mut(&mut self) -> &mut UInt3 {
        let lanes: &mut [u32; 4] = self.as_mut_array();
        let head: &mut [u32] = &mut lanes[..3];
        &mut bytemuck::cast_slice_mut::<u32, UInt3>(head)[0]
    }
}

impl From<(UInt3, u32)> for UInt4 {
    fn from((xyz, w): (UInt3, u32)) -> Self {
        Self::from_xyz(xyz, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint2_basics() {
        let v = UInt2::new(3, 4);
        assert_eq!(v.to_array(), [3, 4]);
        assert_eq!(v.extend(5), UInt3::new(3, 4, 5));
        assert_eq!(v.to_string(), "<3, 4>");
        assert_eq!(v.to_hlsl_literal(), "uint2(3, 4)");
    }

    #[test]
    fn test_uint4_embeds_uint3() {
        let mut v = UInt4::from((UInt3::new(1, 2, 3), 4));
        assert_eq!(v, UInt4::new(1, 2, 3, 4));
        assert_eq!(v.xyz(), UInt3::new(1, 2, 3));

        *v.xyz_mut() += 10;
        assert_eq!(v, UInt4::new(11, 12, 13, 4));
    }

    #[test]
    fn test_uint4_layout_prefix() {
        let v = UInt4::new(0xAABBCCDD, 1, 2, 3);
        assert_eq!(&v.as_bytes()[..12], v.xyz().as_bytes());
        assert_eq!(v.to_le_bytes()[..4], [0xDD, 0xCC, 0xBB, 0xAA]);
    }

    #[test]
    fn test_scalar_ops() {
        let v = UInt4::new(2, 4, 6, 8) * 2;
        assert_eq!(v, UInt4::new(4, 8, 12, 16));
        assert_eq!(v / 4, UInt4::new(1, 2, 3, 4));
        assert_eq!(UInt2::new(5, 9) % 4, UInt2::new(1, 1));
    }
}
