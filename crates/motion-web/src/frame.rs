//! Per-frame orchestration: snapshot the input signals once, derive every
//! output from that snapshot, paint DOM styles, then draw the GPU passes.
//!
//! Render errors and missing graph groups are logged and skipped, never
//! propagated; one bad element must not stall the loop.

use crate::bindings::{apply_effects, paint_marquee};
use crate::dom;
use crate::driver::FrameSubscription;
use crate::events::ListenerHandle;
use crate::render::reveal::RevealRenderer;
use crate::render::surface::SurfaceRenderer;
use crate::scene::Scene;
use crate::signals::SharedSignals;
use glam::{Vec2, Vec3};
use motion_core::{
    pointer_to_uv, pointer_to_world, surface_view_proj, RevealUniforms, SurfaceGrid, SurfaceParams,
    SurfaceUniforms, SurfaceVertex, VelocityEstimator, SURFACE_BASE_COLOR, SURFACE_CAMERA_Z,
    SURFACE_TILT_RAD,
};
use web_sys as web;

pub struct RevealState {
    pub renderer: RevealRenderer,
    pub canvas: web::HtmlCanvasElement,
}

pub struct FabricState {
    pub renderer: SurfaceRenderer,
    pub canvas: web::HtmlCanvasElement,
    pub grid: SurfaceGrid,
    pub params: SurfaceParams,
    pub scratch: Vec<SurfaceVertex>,
}

pub struct FrameContext {
    signals: SharedSignals,
    _listeners: Vec<ListenerHandle>,
    scene: Scene,
    velocity: VelocityEstimator,
    reveal: Option<RevealState>,
    fabric: Option<FabricState>,
    /// Held so that dropping the context tears the rAF callback down too.
    pub subscription: Option<FrameSubscription>,
}

impl FrameContext {
    pub fn new(signals: SharedSignals, listeners: Vec<ListenerHandle>, scene: Scene) -> Self {
        Self {
            signals,
            _listeners: listeners,
            scene,
            velocity: VelocityEstimator::default(),
            reveal: None,
            fabric: None,
            subscription: None,
        }
    }

    pub fn set_reveal(&mut self, state: RevealState) {
        self.reveal = Some(state);
    }

    pub fn set_fabric(&mut self, state: FabricState) {
        self.fabric = Some(state);
    }

    pub fn frame(&mut self, dt: f32, elapsed: f32) {
        let (pointer, scroll_y, viewport) = {
            let s = self.signals.borrow();
            (s.pointer.get(), s.scroll_y.get(), s.viewport.get())
        };

        let scroll_velocity = self.velocity.update(scroll_y, elapsed as f64);

        self.drive_sections(viewport, scroll_y, dt);

        for binding in &mut self.scene.marquees {
            binding.marquee.tick(scroll_velocity, dt);
            if binding.element.is_connected() {
                paint_marquee(binding);
            }
        }

        for binding in &mut self.scene.magnetics {
            if binding.element.is_connected() {
                binding.tick(pointer, dt);
            }
        }

        self.draw_reveal(pointer, elapsed);
        self.draw_fabric(pointer, elapsed);
    }

    fn drive_sections(&mut self, viewport: Vec2, scroll_y: f32, dt: f32) {
        for binding in &self.scene.sections {
            if !binding.target.is_connected() {
                continue;
            }
            let rect = dom::track_rect(&binding.tracked);
            match self
                .scene
                .graph
                .advance(&binding.key, rect, viewport.y, scroll_y, dt)
            {
                Ok(values) => apply_effects(&binding.target, values),
                Err(e) => log::warn!("effect graph: {e}"),
            }
        }
    }

    fn draw_reveal(&mut self, pointer: Vec2, elapsed: f32) {
        let Some(state) = self.reveal.as_mut() else {
            return;
        };
        dom::sync_canvas_backing_size(&state.canvas);
        state
            .renderer
            .resize_if_needed(state.canvas.width(), state.canvas.height());

        let rect = state.canvas.get_bounding_client_rect();
        let uv = pointer_to_uv(
            pointer.x - rect.left() as f32,
            pointer.y - rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        let (w, h) = state.renderer.size();
        let uniforms = RevealUniforms::pack(elapsed, uv, [w as f32, h as f32]);
        if let Err(e) = state.renderer.render(uniforms) {
            log::warn!("reveal pass: {e:?}");
        }
    }

    fn draw_fabric(&mut self, pointer: Vec2, elapsed: f32) {
        let Some(state) = self.fabric.as_mut() else {
            return;
        };
        dom::sync_canvas_backing_size(&state.canvas);
        state
            .renderer
            .resize_if_needed(state.canvas.width(), state.canvas.height());

        let rect = state.canvas.get_bounding_client_rect();
        let uv = pointer_to_uv(
            pointer.x - rect.left() as f32,
            pointer.y - rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        let pointer_world = pointer_to_world(uv, state.grid.extent());

        state.grid.deform(&state.params, elapsed, pointer_world);
        state.grid.write_vertices(&mut state.scratch);

        let view_proj = surface_view_proj(state.renderer.aspect(), SURFACE_CAMERA_Z, SURFACE_TILT_RAD);
        let uniforms = SurfaceUniforms::pack(
            view_proj,
            Vec3::new(0.3, 0.4, 1.0),
            SURFACE_BASE_COLOR,
        );
        if let Err(e) = state.renderer.render(uniforms, &state.scratch) {
            log::warn!("surface pass: {e:?}");
        }
    }
}
