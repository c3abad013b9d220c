use motion_core::interp::RangeMap;

#[test]
fn endpoint_scenario_from_declared_config() {
    // breakpoints [(0,0),(1,100)], x=0.25 -> 25
    let map = RangeMap::clamped([(0.0, 0.0_f32), (1.0, 100.0)]);
    assert!((map.sample(0.25) - 25.0).abs() < 1e-6);
}

#[test]
fn clamps_below_and_above_range() {
    let map = RangeMap::clamped([(0.0, 200.0_f32), (1.0, -200.0)]);
    assert_eq!(map.sample(-5.0), 200.0);
    assert_eq!(map.sample(5.0), -200.0);
}

#[test]
fn interpolates_signed_ranges() {
    // scroll progress 0.3 with [0,1] -> [200,-200] gives 80
    let map = RangeMap::clamped([(0.0, 200.0_f32), (1.0, -200.0)]);
    assert!((map.sample(0.3) - 80.0).abs() < 1e-4);
}

#[test]
fn outputs_monotonic_for_ascending_config() {
    let map = RangeMap::clamped([(0.0, 0.0_f32), (0.4, 10.0), (1.0, 40.0)]);
    let mut prev = f32::NEG_INFINITY;
    for i in 0..=100 {
        let x = i as f32 / 100.0;
        let y = map.sample(x);
        assert!(y >= prev, "non-monotonic at x={x}: {y} < {prev}");
        prev = y;
    }
}

#[test]
fn repairs_descending_and_duplicate_inputs() {
    // Normalizes to [(0.2,1),(0.5,0)]: stable sort keeps the first output
    // for a duplicated input.
    let map = RangeMap::clamped([(0.5, 0.0_f32), (0.2, 1.0), (0.5, 0.0)]);
    assert_eq!(map.len(), 2);
    for i in 0..=50 {
        let x = i as f32 / 50.0;
        let y = map.sample(x);
        assert!(y.is_finite(), "NaN/inf at x={x}");
    }
    assert!((map.sample(0.2) - 1.0).abs() < 1e-6);
    assert!(map.sample(0.5).abs() < 1e-6);
}

#[test]
fn duplicate_inputs_pick_first_output_deterministically() {
    let map = RangeMap::clamped([(0.0, 0.0_f32), (0.5, 7.0), (0.5, 99.0), (1.0, 10.0)]);
    assert!((map.sample(0.5) - 7.0).abs() < 1e-6);
}

#[test]
fn non_finite_outputs_are_dropped_at_construction() {
    // A NaN output knot must not poison sampling; the pair is discarded and
    // the remaining knots interpolate normally.
    let map = RangeMap::clamped([(0.0, 0.0_f32), (0.5, f32::NAN), (1.0, 10.0)]);
    assert_eq!(map.len(), 2);
    for i in 0..=20 {
        let x = i as f32 / 20.0;
        assert!(map.sample(x).is_finite(), "non-finite sample at x={x}");
    }
    assert!((map.sample(0.5) - 5.0).abs() < 1e-6);

    let map = RangeMap::clamped([(0.0, 1.0_f32), (1.0, f32::INFINITY)]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.sample(0.8), 1.0);
}

#[test]
fn unclamped_extrapolates_end_segments() {
    let map = RangeMap::new([(0.0, 0.0_f32), (1.0, 10.0)], false);
    assert!((map.sample(2.0) - 20.0).abs() < 1e-4);
    assert!((map.sample(-1.0) + 10.0).abs() < 1e-4);
}

#[test]
fn vector_outputs_interpolate_componentwise() {
    use glam::Vec2;
    let map = RangeMap::clamped([(0.0, Vec2::new(0.0, 100.0)), (1.0, Vec2::new(10.0, -100.0))]);
    let mid = map.sample(0.5);
    assert!((mid.x - 5.0).abs() < 1e-5);
    assert!(mid.y.abs() < 1e-4);
}

#[test]
fn single_knot_returns_its_output_everywhere() {
    let map = RangeMap::clamped([(0.3, 42.0_f32)]);
    assert_eq!(map.sample(-1.0), 42.0);
    assert_eq!(map.sample(0.3), 42.0);
    assert_eq!(map.sample(9.0), 42.0);
}

#[test]
fn empty_config_stays_finite() {
    let map: RangeMap<f32> = RangeMap::clamped(std::iter::empty());
    assert!(map.is_empty());
    assert_eq!(map.sample(0.5), 0.0);
}
