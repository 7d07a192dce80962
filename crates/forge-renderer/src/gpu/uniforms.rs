//! GPU uniform blocks for the avatar pass.
//!
//! `CameraUniforms` is uploaded once per frame to bind group 0,
//! `NodeUniforms` once per shape node to bind group 1.

use crate::compose::Material;
use crate::matrix::Mat4;

/// Direction toward the key light (unnormalized).
pub const KEY_LIGHT_DIRECTION: [f32; 3] = [4.0, 6.0, 4.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.1;
pub const AMBIENT_INTENSITY: f32 = 0.25;

/// Matches the WGSL `Camera` struct.
///
/// Layout: mat4 + 3 × vec4 = 112 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view_proj: Mat4,
    /// Eye position (w unused).
    pub eye: [f32; 4],
    /// Normalized direction toward the key light, intensity in w.
    pub light: [f32; 4],
    /// Ambient color, intensity in w.
    pub ambient: [f32; 4],
}

impl CameraUniforms {
    pub fn new(view_proj: Mat4, eye: [f32; 3]) -> Self {
        let [x, y, z] = KEY_LIGHT_DIRECTION;
        let len = (x * x + y * y + z * z).sqrt();
        Self {
            view_proj,
            eye: [eye[0], eye[1], eye[2], 1.0],
            light: [x / len, y / len, z / len, KEY_LIGHT_INTENSITY],
            ambient: [1.0, 1.0, 1.0, AMBIENT_INTENSITY],
        }
    }
}

/// Matches the WGSL `Node` struct.
///
/// Layout: 2 × mat4 + 2 × vec4 = 160 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NodeUniforms {
    pub model: Mat4,
    pub normal: Mat4,
    /// Linear RGB base color; alpha is always 1.
    pub color: [f32; 4],
    /// x = roughness, y = metalness.
    pub material: [f32; 4],
}

impl NodeUniforms {
    pub fn new(model: Mat4, normal: Mat4, material: &Material) -> Self {
        let [r, g, b, _] = material.color.to_linear_rgba();
        Self {
            model,
            normal,
            color: [r, g, b, 1.0],
            material: [material.roughness, material.metalness, 0.0, 0.0],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
