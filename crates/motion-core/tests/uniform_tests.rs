use motion_core::texture::weave_rgba;
use motion_core::uniforms::{pointer_to_uv, surface_view_proj, RevealUniforms, SurfaceUniforms};

#[test]
fn pointer_uv_flips_y_and_clamps() {
    // Top-left of the element is v = 1 (up-positive UV space).
    assert_eq!(pointer_to_uv(0.0, 0.0, 800.0, 600.0), [0.0, 1.0]);
    assert_eq!(pointer_to_uv(800.0, 600.0, 800.0, 600.0), [1.0, 0.0]);
    let mid = pointer_to_uv(400.0, 300.0, 800.0, 600.0);
    assert!((mid[0] - 0.5).abs() < 1e-6 && (mid[1] - 0.5).abs() < 1e-6);
    // Outside the element: clamped, never out of range.
    let out = pointer_to_uv(-50.0, 900.0, 800.0, 600.0);
    assert_eq!(out, [0.0, 0.0]);
}

#[test]
fn degenerate_geometry_reads_center() {
    assert_eq!(pointer_to_uv(10.0, 10.0, 0.0, 600.0), [0.5, 0.5]);
    assert_eq!(pointer_to_uv(10.0, 10.0, 800.0, 0.0), [0.5, 0.5]);
}

#[test]
fn reveal_uniforms_pack_the_whole_set() {
    let u = RevealUniforms::pack(4.2, [0.25, 0.75], [1920.0, 1080.0]);
    assert_eq!(u.time, 4.2);
    assert_eq!(u.pointer, [0.25, 0.75]);
    assert_eq!(u.resolution, [1920.0, 1080.0]);
    // 16-byte aligned for a WebGPU uniform buffer.
    assert_eq!(std::mem::size_of::<RevealUniforms>() % 16, 0);
}

#[test]
fn surface_uniforms_normalize_the_light() {
    use glam::Vec3;
    let u = SurfaceUniforms::pack(
        surface_view_proj(16.0 / 9.0, 6.0, -0.2),
        Vec3::new(0.0, 10.0, 0.0),
        [1.0, 1.0, 1.0, 1.0],
    );
    assert!((u.light_dir[1] - 1.0).abs() < 1e-6);
    assert_eq!(std::mem::size_of::<SurfaceUniforms>() % 16, 0);
}

#[test]
fn view_proj_survives_degenerate_aspect() {
    let m = surface_view_proj(0.0, 6.0, -0.2);
    assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
}

#[test]
fn weave_texture_is_deterministic_and_opaque() {
    let a = weave_rgba(64, 64, 7);
    let b = weave_rgba(64, 64, 7);
    assert_eq!(a, b);
    assert_eq!(a.len(), 64 * 64 * 4);
    assert!(a.chunks_exact(4).all(|px| px[3] == 255));

    let other = weave_rgba(64, 64, 8);
    assert_ne!(a, other);
}
