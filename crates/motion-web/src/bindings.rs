//! Connections between engine values and DOM elements.
//!
//! Each binding pairs an element with the piece of engine state that drives
//! it and knows how to paint the computed values back as inline styles.

use crate::dom;
use glam::Vec2;
use motion_core::{
    Marquee, Spring2, SpringParams, StyleProperty, FOLLOW_DAMPING, FOLLOW_MASS, FOLLOW_STIFFNESS,
    MAGNETIC_CAPTURE_RADIUS_PX, MAGNETIC_STRENGTH,
};
use web_sys as web;

/// A scroll-driven section: the graph group named `key` animates `target`,
/// with progress measured against `tracked`'s bounding box.
pub struct SectionBinding {
    pub key: String,
    pub target: web::HtmlElement,
    pub tracked: web::Element,
}

/// A ticker row translated by a [`Marquee`].
pub struct MarqueeBinding {
    pub element: web::HtmlElement,
    pub marquee: Marquee,
}

/// An element eased toward the pointer while it hovers nearby.
pub struct MagneticBinding {
    pub element: web::HtmlElement,
    pub spring: Spring2,
    pub strength: f32,
}

impl MagneticBinding {
    pub fn new(element: web::HtmlElement) -> Self {
        Self {
            element,
            spring: Spring2::new(
                SpringParams::new(FOLLOW_STIFFNESS, FOLLOW_DAMPING, FOLLOW_MASS),
                Vec2::ZERO,
            ),
            strength: MAGNETIC_STRENGTH,
        }
    }

    /// Advance toward the pointer (or back to rest once it leaves the capture
    /// radius) and paint the offset.
    pub fn tick(&mut self, pointer: Vec2, dt: f32) {
        let (cx, cy) = dom::element_center(&self.element);
        let delta = pointer - Vec2::new(cx, cy);
        let captured = delta.length() <= MAGNETIC_CAPTURE_RADIUS_PX;

        // Strength is a divisor: the element moves a fraction of the pointer's
        // offset from its center.
        let target = if captured {
            delta / self.strength.max(1.0)
        } else {
            Vec2::ZERO
        };

        let pos = self.spring.advance(target, dt);
        let style = self.element.style();
        let _ = style.set_property(
            "transform",
            &format!("translate({:.2}px, {:.2}px)", pos.x, pos.y),
        );
    }
}

/// Paint a property list as inline `transform` + `opacity`.
///
/// Transform components compose in a fixed order so a group that drives both
/// translation and rotation always reads the same way.
pub fn apply_effects(target: &web::HtmlElement, values: &[(StyleProperty, f32)]) {
    let mut transform = String::new();
    let mut opacity: Option<f32> = None;

    for &(prop, v) in values {
        match prop {
            StyleProperty::TranslateX => {
                transform.push_str(&format!("translateX({v:.2}px) "));
            }
            StyleProperty::TranslateY => {
                transform.push_str(&format!("translateY({v:.2}px) "));
            }
            StyleProperty::Scale => {
                transform.push_str(&format!("scale({v:.4}) "));
            }
            StyleProperty::Rotate => {
                transform.push_str(&format!("rotate({v:.3}deg) "));
            }
            StyleProperty::Opacity => opacity = Some(v),
        }
    }

    let style = target.style();
    if !transform.is_empty() {
        let _ = style.set_property("transform", transform.trim_end());
    }
    if let Some(o) = opacity {
        let _ = style.set_property("opacity", &format!("{:.4}", o.clamp(0.0, 1.0)));
    }
}

/// Paint the marquee's wrapped offset. Percentage units keep the wrap window
/// meaningful regardless of row pixel width.
pub fn paint_marquee(binding: &MarqueeBinding) {
    let style = binding.element.style();
    let _ = style.set_property(
        "transform",
        &format!("translateX({:.3}%)", binding.marquee.wrapped()),
    );
}
