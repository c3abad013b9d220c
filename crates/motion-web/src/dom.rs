//! Thin DOM helpers shared by the bindings and render layers.

use anyhow::{anyhow, Result};
use motion_core::TrackRect;
use web_sys as web;

pub fn window() -> Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub fn document(window: &web::Window) -> Result<web::Document> {
    window.document().ok_or_else(|| anyhow!("no document"))
}

/// Current viewport-space geometry of an element's bounding box.
///
/// Read fresh every call so layout changes between frames are picked up
/// without any invalidation bookkeeping.
pub fn track_rect(element: &web::Element) -> TrackRect {
    let rect = element.get_bounding_client_rect();
    TrackRect {
        top: rect.top() as f32,
        height: rect.height() as f32,
    }
}

/// Match the canvas backing store to its CSS size; returns true on change.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> bool {
    let rect = canvas.get_bounding_client_rect();
    let w = (rect.width().max(1.0)) as u32;
    let h = (rect.height().max(1.0)) as u32;
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
        true
    } else {
        false
    }
}

/// Pointer position relative to an element's top-left, in CSS pixels.
pub fn element_local(element: &web::Element, client_x: f32, client_y: f32) -> (f32, f32) {
    let rect = element.get_bounding_client_rect();
    (client_x - rect.left() as f32, client_y - rect.top() as f32)
}

/// Center of an element's bounding box in viewport coordinates.
pub fn element_center(element: &web::Element) -> (f32, f32) {
    let rect = element.get_bounding_client_rect();
    (
        (rect.left() + rect.width() * 0.5) as f32,
        (rect.top() + rect.height() * 0.5) as f32,
    )
}
