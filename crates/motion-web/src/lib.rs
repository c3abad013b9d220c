#![cfg(target_arch = "wasm32")]
//! Browser entry point: wires input signals, discovers the scene, starts the
//! shared frame loop, and attaches the optional GPU passes when their
//! canvases are present in the page.

mod bindings;
mod dom;
mod driver;
mod events;
mod frame;
mod render;
mod scene;
mod signals;

use crate::driver::FrameDriver;
use crate::frame::{FabricState, FrameContext, RevealState};
use crate::render::reveal::RevealRenderer;
use crate::render::surface::{surface_extent, SurfaceRenderer};
use crate::scene::Scene;
use crate::signals::Signals;
use motion_core::{SurfaceGrid, SurfaceParams, SURFACE_GRID_SIZE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let viewport = events::viewport_size(&window);
    let signals = Rc::new(RefCell::new(Signals::new(viewport)));
    let listeners = events::wire_signal_listeners(&window, signals.clone());

    let scene = Scene::build(&document, viewport);
    log::info!(
        "scene: {} effect groups, {} marquees, {} magnetics",
        scene.graph.len(),
        scene.marquees.len(),
        scene.magnetics.len()
    );

    let mut context = FrameContext::new(signals, listeners, scene);

    // GPU passes are optional; pages without the canvases still get the
    // scroll/pointer effects.
    if let Some(canvas) = canvas_by_id(&document, "hero-canvas") {
        dom::sync_canvas_backing_size(&canvas);
        match RevealRenderer::new(&canvas).await {
            Ok(renderer) => context.set_reveal(RevealState { renderer, canvas }),
            Err(e) => log::warn!("reveal pass unavailable: {e:?}"),
        }
    } else {
        log::info!("no #hero-canvas, skipping reveal pass");
    }

    if let Some(canvas) = canvas_by_id(&document, "fabric-canvas") {
        dom::sync_canvas_backing_size(&canvas);
        let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
        let grid = SurfaceGrid::new(SURFACE_GRID_SIZE, surface_extent(aspect));
        match SurfaceRenderer::new(&canvas, grid.vertex_count(), grid.indices()).await {
            Ok(renderer) => context.set_fabric(FabricState {
                renderer,
                canvas,
                grid,
                params: SurfaceParams::default(),
                scratch: Vec::new(),
            }),
            Err(e) => log::warn!("surface pass unavailable: {e:?}"),
        }
    } else {
        log::info!("no #fabric-canvas, skipping surface pass");
    }

    let context = Rc::new(RefCell::new(context));
    let driver = FrameDriver::new(window);
    let sub = {
        let context = context.clone();
        driver.subscribe(move |dt, elapsed| {
            context.borrow_mut().frame(dt, elapsed);
        })
    };
    // The cycle context -> subscription -> tick closure -> context keeps the
    // whole engine alive for the lifetime of the page.
    context.borrow_mut().subscription = Some(sub);
    Ok(())
}

fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}
