//! Seeded procedural weave texture for the reveal pass.
//!
//! The shipped site reveals a photograph; here the renderer gets a
//! deterministic fabric-like RGBA image instead, so the reveal shader has
//! real luminance structure to desaturate and warp without bundling assets.

use rand::prelude::*;

/// Generate `width * height` RGBA8 pixels of a two-tone woven pattern with
/// per-thread jitter. Same seed, same bytes.
pub fn weave_rgba(width: u32, height: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let warp: Vec<f32> = (0..width).map(|_| rng.gen_range(-0.08..0.08)).collect();
    let weft: Vec<f32> = (0..height).map(|_| rng.gen_range(-0.08..0.08)).collect();

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let u = x as f32 / width.max(1) as f32;
            let v = y as f32 / height.max(1) as f32;
            // Alternating thread bands, 16 per axis, with a soft sine profile.
            let thread_u = (u * 16.0 * std::f32::consts::TAU).sin() * 0.5 + 0.5;
            let thread_v = (v * 16.0 * std::f32::consts::TAU).sin() * 0.5 + 0.5;
            let over = ((x / 8 + y / 8) % 2) as f32; // which thread is on top
            let shade = 0.55 + 0.30 * (over * thread_u + (1.0 - over) * thread_v)
                + warp[x as usize]
                + weft[y as usize];
            let shade = shade.clamp(0.0, 1.0);
            // Warm/cool split between the two thread directions gives the
            // color reveal something to restore.
            let (r, g, b) = if over > 0.5 {
                (shade * 0.82, shade * 0.55, shade * 0.38)
            } else {
                (shade * 0.35, shade * 0.52, shade * 0.72)
            };
            pixels.push((r * 255.0) as u8);
            pixels.push((g * 255.0) as u8);
            pixels.push((b * 255.0) as u8);
            pixels.push(255);
        }
    }
    pixels
}
