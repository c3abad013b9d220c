use motion_core::spring::{Spring, SpringParams};

const DT: f32 = 1.0 / 120.0;

#[test]
fn critically_damped_converges_without_sustained_overshoot() {
    let params = SpringParams::critically_damped(100.0, 1.0);
    assert!(params.is_critically_damped());

    let target = 1.0_f32;
    let mut spring = Spring::new(params, 0.0);
    let mut max_pos = f32::NEG_INFINITY;
    for _ in 0..(5.0 / DT) as usize {
        let p = spring.advance(target, DT);
        max_pos = max_pos.max(p);
    }
    assert!((spring.position() - target).abs() < 1e-3);
    // Discrete integration allows a hair of overshoot, nothing visible.
    assert!(max_pos <= target + 1e-2, "overshoot {}", max_pos - target);
}

#[test]
fn underdamped_overshoot_is_bounded_by_initial_displacement() {
    // Deliberately bouncy: damping well under critical.
    let params = SpringParams::new(150.0, 4.0, 1.0);
    assert!(!params.is_critically_damped());

    let target = 1.0_f32;
    let mut spring = Spring::new(params, 0.0);
    let mut max_pos = f32::NEG_INFINITY;
    for _ in 0..(8.0 / DT) as usize {
        let p = spring.advance(target, DT);
        max_pos = max_pos.max(p);
    }
    // Oscillated past the target, but never beyond the initial displacement.
    assert!(max_pos > target);
    assert!(max_pos < target + 1.0);
    assert!((spring.position() - target).abs() < 1e-2);
}

#[test]
fn dt_spike_is_clamped_before_integration() {
    let params = SpringParams::new(400.0, 50.0, 1.0);
    let mut spring = Spring::new(params, 0.0);
    // A 2-second frame (tab backgrounding) must not explode the state.
    let p = spring.advance(1.0, 2.0);
    assert!(p.is_finite());
    assert!(p.abs() < 10.0);
    // Recovers normally afterwards.
    for _ in 0..(3.0 / DT) as usize {
        spring.advance(1.0, DT);
    }
    assert!((spring.position() - 1.0).abs() < 1e-2);
}

#[test]
fn pointer_follow_constants_stay_finite_at_60hz() {
    use motion_core::constants::{FOLLOW_DAMPING, FOLLOW_MASS, FOLLOW_STIFFNESS};
    // damping/mass = 150 here, well past the single-step stability bound at
    // 60 Hz; the integrator has to subdivide or the transform goes NaN.
    let params = SpringParams::new(FOLLOW_STIFFNESS, FOLLOW_DAMPING, FOLLOW_MASS);
    let mut spring = Spring::new(params, 0.0);
    let mut max_abs = 0.0_f32;
    for _ in 0..600 {
        let p = spring.advance(1.0, 1.0 / 60.0);
        assert!(p.is_finite(), "position diverged");
        max_abs = max_abs.max(p.abs());
    }
    assert!(max_abs <= 1.05, "position escaped the target: {max_abs}");
    assert!((spring.position() - 1.0).abs() < 1e-3);
}

#[test]
fn stiff_velocity_constants_stay_finite_on_a_sustained_15fps_page() {
    use motion_core::constants::{VELOCITY_DAMPING, VELOCITY_MASS, VELOCITY_STIFFNESS};
    // Every frame of a struggling page arrives at the dt clamp, so the clamp
    // alone cannot keep this parameter set stable.
    let params = SpringParams::new(VELOCITY_STIFFNESS, VELOCITY_DAMPING, VELOCITY_MASS);
    let mut spring = Spring::new(params, 0.0);
    for _ in 0..300 {
        let p = spring.advance(1.0, 1.0 / 15.0);
        assert!(p.is_finite(), "position diverged");
    }
    assert!((spring.position() - 1.0).abs() < 1e-3);
}

#[test]
fn velocity_is_exposed_for_downstream_consumers() {
    let mut spring = Spring::new(SpringParams::critically_damped(100.0, 1.0), 0.0);
    spring.advance(1.0, DT);
    assert!(spring.velocity() > 0.0);
    spring.reset(0.0);
    assert_eq!(spring.velocity(), 0.0);
    assert_eq!(spring.position(), 0.0);
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut spring = Spring::new(SpringParams::default(), 0.25);
    let p = spring.advance(1.0, 0.0);
    assert_eq!(p, 0.25);
}

#[test]
fn spring2_tracks_both_axes() {
    use glam::Vec2;
    use motion_core::spring::Spring2;

    let mut s = Spring2::new(SpringParams::critically_damped(150.0, 1.0), Vec2::ZERO);
    let target = Vec2::new(3.0, -2.0);
    for _ in 0..(4.0 / DT) as usize {
        s.advance(target, DT);
    }
    assert!((s.position() - target).length() < 1e-2);
}
