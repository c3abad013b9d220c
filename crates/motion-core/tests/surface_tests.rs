use glam::{Vec2, Vec3};
use motion_core::surface::{
    pointer_to_world, ripple, wave_height, SurfaceGrid, SurfaceParams, SurfaceVertex,
};

#[test]
fn ripple_is_exactly_zero_at_and_beyond_radius() {
    let params = SurfaceParams::default(); // radius 5
    for t in [0.0, 0.37, 12.5, 1000.0] {
        assert_eq!(ripple(&params, 5.0, t), 0.0);
        assert_eq!(ripple(&params, 6.0, t), 0.0);
        assert_eq!(ripple(&params, 500.0, t), 0.0);
    }
    // Inside the radius it actually contributes.
    let inside = ripple(&params, 1.0, 0.9);
    assert!(inside != 0.0);
    assert!(inside.abs() <= params.ripple_strength + 1e-6);
}

#[test]
fn height_outside_ripple_radius_is_waves_only() {
    // Vertex at distance 6 from the pointer with radius 5: z comes from the
    // wave field alone.
    let params = SurfaceParams::default();
    let mut grid = SurfaceGrid::new(2, Vec2::new(12.0, 12.0));
    // Rest corners sit at (±6, ±6): sqrt(72) ≈ 8.49 from an origin pointer,
    // well past the cutoff.
    let pointer = Vec2::ZERO;
    let t = 1.25;
    grid.deform(&params, t, pointer);
    for j in 0..2 {
        for i in 0..2 {
            let rest = grid.rest_at(i, j);
            let expected = wave_height(&params, rest.x, rest.y, t);
            assert!((grid.height_at(i, j) - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn deform_matches_wave_plus_ripple_inside_radius() {
    let params = SurfaceParams::default();
    let mut grid = SurfaceGrid::new(9, Vec2::new(8.0, 8.0));
    let pointer = Vec2::new(1.0, -0.5);
    let t = 2.0;
    grid.deform(&params, t, pointer);
    for j in 0..9 {
        for i in 0..9 {
            let rest = grid.rest_at(i, j);
            let dist = rest.distance(pointer);
            let expected = wave_height(&params, rest.x, rest.y, t) + ripple(&params, dist, t);
            assert!((grid.height_at(i, j) - expected).abs() < 1e-5);
        }
    }
}

#[test]
fn heights_are_recomputed_from_scratch_each_frame() {
    let params = SurfaceParams::default();
    let mut grid = SurfaceGrid::new(8, Vec2::new(10.0, 10.0));
    grid.deform(&params, 0.0, Vec2::ZERO);
    let first = grid.height_at(3, 3);
    grid.deform(&params, 5.0, Vec2::new(50.0, 50.0));
    grid.deform(&params, 0.0, Vec2::ZERO);
    // Replaying the same snapshot reproduces the same output; nothing
    // accumulated across the intermediate frame.
    assert_eq!(grid.height_at(3, 3), first);
}

#[test]
fn flat_field_has_straight_up_normals() {
    let params = SurfaceParams {
        wave_amp: Vec2::ZERO,
        ripple_strength: 0.0,
        ..SurfaceParams::default()
    };
    let mut grid = SurfaceGrid::new(6, Vec2::new(4.0, 4.0));
    grid.deform(&params, 3.0, Vec2::ZERO);
    for j in 0..6 {
        for i in 0..6 {
            let n = grid.normal_at(i, j);
            assert!((n - Vec3::Z).length() < 1e-6);
        }
    }
}

#[test]
fn normals_follow_the_height_field() {
    let params = SurfaceParams::default();
    let mut grid = SurfaceGrid::new(32, Vec2::new(12.0, 12.0));
    grid.deform(&params, 1.7, Vec2::new(0.5, 0.5));
    let n = grid.size();
    for j in 0..n {
        for i in 0..n {
            let normal = grid.normal_at(i, j);
            assert!((normal.length() - 1.0).abs() < 1e-4);
            assert!(normal.z > 0.0, "normal flipped at ({i},{j})");
        }
    }
    // Somewhere on a wave slope the normal must actually lean.
    let leaning = (0..n * n).any(|k| grid.normal_at(k % n, k / n).z < 0.999);
    assert!(leaning);
}

#[test]
fn grid_topology_is_consistent() {
    let grid = SurfaceGrid::new(4, Vec2::new(2.0, 2.0));
    assert_eq!(grid.vertex_count(), 16);
    assert_eq!(grid.indices().len(), 3 * 3 * 6);
    assert!(grid.indices().iter().all(|&i| (i as usize) < 16));

    // Degenerate size is promoted to the minimum lattice.
    let tiny = SurfaceGrid::new(0, Vec2::new(1.0, 1.0));
    assert_eq!(tiny.size(), 2);
}

#[test]
fn vertex_packing_carries_heights_and_normals() {
    let params = SurfaceParams::default();
    let mut grid = SurfaceGrid::new(5, Vec2::new(6.0, 6.0));
    grid.deform(&params, 0.8, Vec2::ZERO);
    let mut verts: Vec<SurfaceVertex> = Vec::new();
    grid.write_vertices(&mut verts);
    assert_eq!(verts.len(), grid.vertex_count());
    let v = &verts[2 * 5 + 3];
    assert_eq!(v.position[2], grid.height_at(3, 2));
    assert_eq!(v.normal, grid.normal_at(3, 2).to_array());
}

#[test]
fn pointer_world_mapping_is_centered_with_v_up() {
    let extent = Vec2::new(12.0, 8.0);
    let center = pointer_to_world([0.5, 0.5], extent);
    assert!(center.length() < 1e-6);
    let top_right = pointer_to_world([1.0, 1.0], extent);
    assert!((top_right - Vec2::new(6.0, 4.0)).length() < 1e-6);
}
