//! GPU uniform packing.
//!
//! Every struct here is overwritten wholesale each frame by the renderer;
//! none carries residual state between frames. Layouts match the WGSL
//! declarations in the web crate's shaders.

use glam::{Mat4, Vec3};

/// Fragment uniforms for the texture-reveal pass: monotonic time, pointer in
/// local UV space (v up), and the canvas resolution.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RevealUniforms {
    pub pointer: [f32; 2],
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: [f32; 3],
}

impl RevealUniforms {
    pub fn pack(time: f32, pointer_uv: [f32; 2], resolution: [f32; 2]) -> Self {
        Self {
            pointer: pointer_uv,
            resolution,
            time,
            _pad: [0.0; 3],
        }
    }
}

/// Vertex/fragment uniforms for the deformed-surface pass.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub light_dir: [f32; 3],
    pub _pad: f32,
    pub base_color: [f32; 4],
}

impl SurfaceUniforms {
    pub fn pack(view_proj: Mat4, light_dir: Vec3, base_color: [f32; 4]) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: light_dir.normalize_or_zero().to_array(),
            _pad: 0.0,
            base_color,
        }
    }
}

/// Remap a pointer position in element-local CSS pixels (y down) into
/// normalized UV space with v up, clamped to [0, 1]. Degenerate geometry
/// reads as the element center.
#[inline]
pub fn pointer_to_uv(local_x: f32, local_y: f32, width: f32, height: f32) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.5, 0.5];
    }
    let u = (local_x / width).clamp(0.0, 1.0);
    let v = (1.0 - local_y / height).clamp(0.0, 1.0);
    [u, v]
}

/// Camera matrix for the surface pass: perspective over the canvas aspect,
/// eye pulled back on +Z, plane tilted about X.
pub fn surface_view_proj(aspect: f32, camera_z: f32, tilt_rad: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect.max(1e-3), 0.1, 100.0);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, camera_z), Vec3::ZERO, Vec3::Y);
    let model = Mat4::from_rotation_x(tilt_rad);
    proj * view * model
}
