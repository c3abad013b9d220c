//! Direction-reversing marquee drift.
//!
//! An unbounded position accumulates a constant base drift, modulated by the
//! smoothed scroll velocity: the drift direction snaps to the most recent
//! scroll direction and the speed scales with a bounded factor map. The
//! rendered position wraps into `[lo, hi)` so the duplicated strip content
//! never shows a seam.

use crate::constants::{
    MARQUEE_BASE_VELOCITY, MARQUEE_FACTOR_POINTS, MARQUEE_WRAP_HI, MARQUEE_WRAP_LO,
    MAX_STEP_DT_SEC,
};
use crate::interp::RangeMap;

/// Euclidean-modulo wrap of `v` into the half-open range `[lo, hi)`.
#[inline]
pub fn wrap(v: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span <= f32::EPSILON {
        return lo;
    }
    lo + (v - lo).rem_euclid(span)
}

#[derive(Clone, Debug)]
pub struct MarqueeParams {
    /// Base drift in percent of strip width per second; sign sets the
    /// initial direction.
    pub base_velocity: f32,
    pub wrap_lo: f32,
    pub wrap_hi: f32,
    /// Smoothed scroll velocity (px/s) -> drift multiplier. Clamped at the
    /// ends so extreme fling speeds stay bounded.
    pub factor_points: Vec<(f32, f32)>,
}

impl Default for MarqueeParams {
    fn default() -> Self {
        Self {
            base_velocity: MARQUEE_BASE_VELOCITY,
            wrap_lo: MARQUEE_WRAP_LO,
            wrap_hi: MARQUEE_WRAP_HI,
            factor_points: MARQUEE_FACTOR_POINTS.to_vec(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Marquee {
    params: MarqueeParams,
    factor: RangeMap<f32>,
    position: f32,
    direction: f32,
}

impl Marquee {
    pub fn new(params: MarqueeParams) -> Self {
        let factor = RangeMap::clamped(params.factor_points.iter().copied());
        let direction = if params.base_velocity < 0.0 { -1.0 } else { 1.0 };
        let params = MarqueeParams {
            base_velocity: params.base_velocity.abs(),
            ..params
        };
        Self {
            params,
            factor,
            position: 0.0,
            direction,
        }
    }

    /// Advance one tick. `scroll_velocity` is the smoothed document scroll
    /// speed; its sign flips the drift direction, its magnitude accelerates
    /// the drift through the factor map.
    pub fn tick(&mut self, scroll_velocity: f32, dt: f32) {
        let dt = dt.clamp(0.0, MAX_STEP_DT_SEC);
        let factor = self.factor.sample(scroll_velocity);
        if factor < 0.0 {
            self.direction = -1.0;
        } else if factor > 0.0 {
            self.direction = 1.0;
        }
        let mut move_by = self.direction * self.params.base_velocity * dt;
        move_by += self.direction * move_by * factor;
        self.position += move_by;
    }

    /// Unbounded accumulated position.
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Position wrapped into the visual range, ready to render.
    #[inline]
    pub fn wrapped(&self) -> f32 {
        wrap(self.position, self.params.wrap_lo, self.params.wrap_hi)
    }

    #[inline]
    pub fn direction(&self) -> f32 {
        self.direction
    }
}
