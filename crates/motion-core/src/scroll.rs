//! Scroll-progress normalization and scroll-velocity estimation.
//!
//! A [`ScrollTrack`] turns an element's viewport-space bounding box plus a
//! pair of edge rules into a progress scalar in [0, 1]. Anchors are derived
//! from the geometry passed in on every call; nothing is cached across
//! frames, so reflow and resize are picked up for free.

use crate::constants::{VELOCITY_DAMPING, VELOCITY_EPS_SEC, VELOCITY_MASS, VELOCITY_STIFFNESS};
use crate::spring::{Spring, SpringParams};

/// Edge of the tracked element, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementEdge {
    Top,
    Center,
    Bottom,
}

/// Edge of the viewport, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEdge {
    Top,
    Center,
    Bottom,
}

impl ElementEdge {
    #[inline]
    fn fraction(self) -> f32 {
        match self {
            ElementEdge::Top => 0.0,
            ElementEdge::Center => 0.5,
            ElementEdge::Bottom => 1.0,
        }
    }
}

impl ViewportEdge {
    #[inline]
    fn fraction(self) -> f32 {
        match self {
            ViewportEdge::Top => 0.0,
            ViewportEdge::Center => 0.5,
            ViewportEdge::Bottom => 1.0,
        }
    }
}

/// "Element edge meets viewport edge" boundary rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRule {
    pub element: ElementEdge,
    pub viewport: ViewportEdge,
}

impl EdgeRule {
    pub const fn new(element: ElementEdge, viewport: ViewportEdge) -> Self {
        Self { element, viewport }
    }
}

/// Element bounding box in viewport space (what a layout query returns).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackRect {
    pub top: f32,
    pub height: f32,
}

/// Start/end boundary pair producing a clamped progress scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTrack {
    pub start: EdgeRule,
    pub end: EdgeRule,
}

impl ScrollTrack {
    pub const fn new(start: EdgeRule, end: EdgeRule) -> Self {
        Self { start, end }
    }

    /// "start end" .. "end start": element enters at the viewport bottom,
    /// leaves at the top. The usual parallax window.
    pub const fn enter_to_exit() -> Self {
        Self::new(
            EdgeRule::new(ElementEdge::Top, ViewportEdge::Bottom),
            EdgeRule::new(ElementEdge::Bottom, ViewportEdge::Top),
        )
    }

    /// "start start" .. "end end": progress spans the element's own height
    /// while it is pinned. Used by the tunnel section.
    pub const fn pinned() -> Self {
        Self::new(
            EdgeRule::new(ElementEdge::Top, ViewportEdge::Top),
            EdgeRule::new(ElementEdge::Bottom, ViewportEdge::Bottom),
        )
    }

    /// Document-space scroll offset at which `rule` is satisfied.
    ///
    /// The element's document-space edge position is reconstructed from the
    /// current viewport-space rect, so the anchor is always consistent with
    /// the geometry of this frame.
    #[inline]
    fn anchor(rule: EdgeRule, rect: TrackRect, viewport_h: f32, scroll_y: f32) -> f32 {
        let edge_doc = scroll_y + rect.top + rule.element.fraction() * rect.height;
        edge_doc - rule.viewport.fraction() * viewport_h
    }

    /// Progress through the track, clamped to [0, 1].
    ///
    /// A zero-length track (anchors coincide) reads 1 at or past the start
    /// and 0 before it, never NaN.
    pub fn progress(&self, rect: TrackRect, viewport_h: f32, scroll_y: f32) -> f32 {
        let start = Self::anchor(self.start, rect, viewport_h, scroll_y);
        let end = Self::anchor(self.end, rect, viewport_h, scroll_y);
        let span = end - start;
        if span.abs() <= f32::EPSILON {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / span).clamp(0.0, 1.0)
    }
}

/// Differentiates a scalar signal over wall time and smooths the result.
///
/// The raw derivative of a scroll offset is extremely jittery (scroll events
/// quantize to lines/pixels); a stiff, heavily damped spring turns it into a
/// usable speed signal for the marquee's direction logic.
#[derive(Clone, Copy, Debug)]
pub struct VelocityEstimator {
    prev: Option<(f32, f64)>,
    spring: Spring,
}

impl Default for VelocityEstimator {
    fn default() -> Self {
        Self::new(SpringParams::new(
            VELOCITY_STIFFNESS,
            VELOCITY_DAMPING,
            VELOCITY_MASS,
        ))
    }
}

impl VelocityEstimator {
    pub fn new(params: SpringParams) -> Self {
        Self {
            prev: None,
            spring: Spring::new(params, 0.0),
        }
    }

    /// Feed one sample and return the smoothed velocity (units/second).
    pub fn update(&mut self, value: f32, now_sec: f64) -> f32 {
        let raw = match self.prev {
            Some((prev_value, prev_sec)) => {
                let dt = (now_sec - prev_sec).max(VELOCITY_EPS_SEC);
                (value - prev_value) / dt as f32
            }
            None => 0.0,
        };
        let dt = match self.prev {
            Some((_, prev_sec)) => (now_sec - prev_sec).max(VELOCITY_EPS_SEC) as f32,
            None => 0.0,
        };
        self.prev = Some((value, now_sec));
        self.spring.advance(raw, dt)
    }

    #[inline]
    pub fn smoothed(&self) -> f32 {
        self.spring.position()
    }
}
