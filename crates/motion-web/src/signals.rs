//! Raw input state written by event listeners and read once per tick.
//!
//! Listeners only ever *write* here; all derived-value recomputation happens
//! inside the frame tick, so input frequency is decoupled from compute
//! frequency.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// A named input value with the timestamp (seconds) of its last update.
#[derive(Clone, Copy, Debug)]
pub struct Signal<T> {
    value: T,
    stamp: f64,
}

impl<T: Copy> Signal<T> {
    pub fn new(value: T) -> Self {
        Self { value, stamp: 0.0 }
    }

    #[inline]
    pub fn set(&mut self, value: T, stamp_sec: f64) {
        self.value = value;
        self.stamp = self.stamp.max(stamp_sec);
    }

    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    #[inline]
    pub fn stamp(&self) -> f64 {
        self.stamp
    }
}

/// Every source the engine samples per tick.
pub struct Signals {
    /// Pointer position in viewport CSS pixels.
    pub pointer: Signal<Vec2>,
    /// Document scroll offset in CSS pixels.
    pub scroll_y: Signal<f32>,
    /// Viewport size in CSS pixels.
    pub viewport: Signal<Vec2>,
}

impl Signals {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            // Start the pointer at the viewport center so distance-based
            // effects have a sane value before the first move event.
            pointer: Signal::new(viewport * 0.5),
            scroll_y: Signal::new(0.0),
            viewport: Signal::new(viewport),
        }
    }
}

pub type SharedSignals = Rc<RefCell<Signals>>;
