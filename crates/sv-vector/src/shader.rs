//! Shader-side names of the vector types

use bytemuck::Pod;

/// A host type with a fixed shader-language counterpart
pub trait ShaderType: Pod {
    /// HLSL type name, e.g. `uint3`
    const HLSL_NAME: &'static str;
    /// Number of `u32` lanes
    const LANES: usize;
}
