//! Procedural fabric surface: an n×n grid whose heights are recomputed from
//! scratch every frame from two traveling waves plus a pointer-centered
//! ripple, then re-lit by finite-difference normals.

use crate::constants::{
    RIPPLE_FREQ, RIPPLE_RADIUS, RIPPLE_SPEED, RIPPLE_STRENGTH, WAVE_AMP_X, WAVE_AMP_Y,
    WAVE_FREQ_X, WAVE_FREQ_Y, WAVE_SPEED_X, WAVE_SPEED_Y,
};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct SurfaceParams {
    pub wave_freq: Vec2,
    pub wave_speed: Vec2,
    pub wave_amp: Vec2,
    pub ripple_freq: f32,
    pub ripple_speed: f32,
    pub ripple_radius: f32,
    pub ripple_strength: f32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            wave_freq: Vec2::new(WAVE_FREQ_X, WAVE_FREQ_Y),
            wave_speed: Vec2::new(WAVE_SPEED_X, WAVE_SPEED_Y),
            wave_amp: Vec2::new(WAVE_AMP_X, WAVE_AMP_Y),
            ripple_freq: RIPPLE_FREQ,
            ripple_speed: RIPPLE_SPEED,
            ripple_radius: RIPPLE_RADIUS,
            ripple_strength: RIPPLE_STRENGTH,
        }
    }
}

/// Height of the ambient wave field at a rest position.
#[inline]
pub fn wave_height(params: &SurfaceParams, x: f32, y: f32, time: f32) -> f32 {
    let wave_x = (x * params.wave_freq.x + time * params.wave_speed.x).sin() * params.wave_amp.x;
    let wave_y = (y * params.wave_freq.y + time * params.wave_speed.y).cos() * params.wave_amp.y;
    wave_x + wave_y
}

/// Pointer ripple contribution at distance `dist` from the pointer.
///
/// Exactly zero at and beyond `ripple_radius`: the falloff term is
/// `max(0, (radius - dist) / radius)`, a hard cutoff, not an asymptote.
#[inline]
pub fn ripple(params: &SurfaceParams, dist: f32, time: f32) -> f32 {
    if params.ripple_radius <= f32::EPSILON {
        return 0.0;
    }
    let falloff = ((params.ripple_radius - dist) / params.ripple_radius).max(0.0);
    if falloff <= 0.0 {
        return 0.0;
    }
    (dist * params.ripple_freq - time * params.ripple_speed).sin() * falloff * params.ripple_strength
}

/// Map a pointer position in local UV space (v up) into the grid's centered
/// world coordinates.
#[inline]
pub fn pointer_to_world(uv: [f32; 2], extent: Vec2) -> Vec2 {
    Vec2::new((uv[0] - 0.5) * extent.x, (uv[1] - 0.5) * extent.y)
}

/// GPU-visible vertex: displaced position plus the normal rederived from
/// this frame's height field.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub normal: [f32; 3],
    pub _pad1: f32,
}

/// Square lattice with immutable rest geometry and per-frame transient
/// heights/normals.
pub struct SurfaceGrid {
    size: usize,
    extent: Vec2,
    rest: Vec<Vec2>,
    heights: Vec<f32>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl SurfaceGrid {
    /// `size` is the vertex count per side (≥ 2); `extent` the world-space
    /// width/height of the plane, centered on the origin.
    pub fn new(size: usize, extent: Vec2) -> Self {
        let size = size.max(2);
        let count = size * size;
        let mut rest = Vec::with_capacity(count);
        for j in 0..size {
            for i in 0..size {
                let fx = i as f32 / (size - 1) as f32;
                let fy = j as f32 / (size - 1) as f32;
                rest.push(Vec2::new(
                    (fx - 0.5) * extent.x,
                    (fy - 0.5) * extent.y,
                ));
            }
        }
        let mut indices = Vec::with_capacity((size - 1) * (size - 1) * 6);
        for j in 0..size - 1 {
            for i in 0..size - 1 {
                let a = (j * size + i) as u32;
                let b = a + 1;
                let c = a + size as u32;
                let d = c + 1;
                indices.extend_from_slice(&[a, b, c, b, d, c]);
            }
        }
        Self {
            size,
            extent,
            rest,
            heights: vec![0.0; count],
            normals: vec![Vec3::Z; count],
            indices,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn height_at(&self, i: usize, j: usize) -> f32 {
        self.heights[j * self.size + i]
    }

    #[inline]
    pub fn normal_at(&self, i: usize, j: usize) -> Vec3 {
        self.normals[j * self.size + i]
    }

    #[inline]
    pub fn rest_at(&self, i: usize, j: usize) -> Vec2 {
        self.rest[j * self.size + i]
    }

    /// Recompute every height from scratch for this frame, then rederive
    /// normals. O(vertex count).
    pub fn deform(&mut self, params: &SurfaceParams, time: f32, pointer_world: Vec2) {
        for (idx, p) in self.rest.iter().enumerate() {
            let dist = p.distance(pointer_world);
            self.heights[idx] = wave_height(params, p.x, p.y, time) + ripple(params, dist, time);
        }
        self.recompute_normals();
    }

    /// Central-difference normals from the current height field; one-sided
    /// at the borders.
    fn recompute_normals(&mut self) {
        let n = self.size;
        let step_x = self.extent.x / (n - 1) as f32;
        let step_y = self.extent.y / (n - 1) as f32;
        for j in 0..n {
            for i in 0..n {
                let (left, right, dx) = if i == 0 {
                    (i, i + 1, step_x)
                } else if i == n - 1 {
                    (i - 1, i, step_x)
                } else {
                    (i - 1, i + 1, 2.0 * step_x)
                };
                let (down, up, dy) = if j == 0 {
                    (j, j + 1, step_y)
                } else if j == n - 1 {
                    (j - 1, j, step_y)
                } else {
                    (j - 1, j + 1, 2.0 * step_y)
                };
                let dzdx = (self.heights[j * n + right] - self.heights[j * n + left]) / dx;
                let dzdy = (self.heights[up * n + i] - self.heights[down * n + i]) / dy;
                self.normals[j * n + i] = Vec3::new(-dzdx, -dzdy, 1.0).normalize();
            }
        }
    }

    /// Pack displaced positions and normals for upload. Reuses `out`.
    pub fn write_vertices(&self, out: &mut Vec<SurfaceVertex>) {
        out.clear();
        out.reserve(self.rest.len());
        for (idx, p) in self.rest.iter().enumerate() {
            out.push(SurfaceVertex {
                position: [p.x, p.y, self.heights[idx]],
                _pad0: 0.0,
                normal: self.normals[idx].to_array(),
                _pad1: 0.0,
            });
        }
    }
}
