//! Second-order damped tracking filter.
//!
//! Semi-implicit Euler on `a = (k(target - x) - c*v) / m`. The same filter
//! backs pointer-follow, scroll-velocity smoothing, and any per-property
//! smoothing the derived-value graph asks for.

use crate::constants::MAX_STEP_DT_SEC;
use glam::Vec2;

/// Physical spring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Damping that settles without overshoot for the given stiffness/mass.
    pub fn critically_damped(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
        }
    }

    #[inline]
    pub fn is_critically_damped(&self) -> bool {
        self.damping >= 2.0 * (self.stiffness * self.mass).sqrt()
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::critically_damped(100.0, 1.0)
    }
}

/// Scalar spring state: tracks a moving target.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub params: SpringParams,
    position: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(params: SpringParams, initial: f32) -> Self {
        Self {
            params,
            position: initial,
            velocity: 0.0,
        }
    }

    /// Integrate one step toward `target` and return the new position.
    ///
    /// `dt` is clamped to [`MAX_STEP_DT_SEC`] so a stalled host loop cannot
    /// produce an explosive step. The step is then sliced into substeps
    /// small enough that `damping/mass * h` and the natural frequency stay
    /// inside the integrator's stability bound; stiff parameter sets (high
    /// damping on a light mass) would otherwise diverge at ordinary frame
    /// rates.
    pub fn advance(&mut self, target: f32, dt: f32) -> f32 {
        let dt = dt.clamp(0.0, MAX_STEP_DT_SEC);
        if dt <= 0.0 {
            return self.position;
        }
        let p = &self.params;
        let m = p.mass.max(f32::EPSILON);
        let rate = (p.damping / m).max((p.stiffness / m).max(0.0).sqrt());
        let steps = (dt * rate).ceil().clamp(1.0, 64.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            let accel =
                (p.stiffness * (target - self.position) - p.damping * self.velocity) / m;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
        self.position
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Snap to a value, killing any stored velocity.
    pub fn reset(&mut self, value: f32) {
        self.position = value;
        self.velocity = 0.0;
    }
}

/// Two independent scalar springs sharing one parameter set, for 2D
/// pointer-follow.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(params: SpringParams, initial: Vec2) -> Self {
        Self {
            x: Spring::new(params, initial.x),
            y: Spring::new(params, initial.y),
        }
    }

    pub fn advance(&mut self, target: Vec2, dt: f32) -> Vec2 {
        Vec2::new(self.x.advance(target.x, dt), self.y.advance(target.y, dt))
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity(), self.y.velocity())
    }

    pub fn reset(&mut self, value: Vec2) {
        self.x.reset(value.x);
        self.y.reset(value.y);
    }
}
