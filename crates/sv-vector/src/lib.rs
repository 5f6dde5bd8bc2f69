//! Fixed-layout unsigned integer vectors for shader interop
//!
//! [`UInt3`] mirrors the shader `uint3`: three `u32` lanes, 12 bytes, no
//! padding. It carries the full swizzle surface (`xy()`, `zyx()`, the
//! `rgb` colour spellings, `set_` forms for non-repeating selections) and
//! element-wise arithmetic with shader `uint` semantics.
//!
//! Swizzles are also available as tagged selectors ([`Swizzle`],
//! [`WritableSwizzle`]) that a translator can lower to member accesses.

pub mod component;
pub mod format;
pub mod ops;
pub mod shader;
pub mod swizzle;
mod swizzles;
mod uint3;
pub mod vector;

pub use component::{Component, ComponentMask, Naming};
pub use format::{NumberFormat, VectorDisplay};
pub use ops::BinaryOp;
pub use shader::ShaderType;
pub use swizzle::{Swizzle, WritableSwizzle};
pub use uint3::UInt3;
pub use vector::{UInt2, UInt4};
