#![cfg(target_arch = "wasm32")]
use glowsphere_core::{launch, LoopHandle, ParticleField, RenderLoop, SphereConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod frame;
mod surface;
mod values;

pub(crate) type SphereLoop = RenderLoop<surface::CanvasSurface, StdRng>;

/// Running effect returned to JavaScript hosts.
#[wasm_bindgen]
pub struct SphereHandle {
    render_loop: Rc<RefCell<SphereLoop>>,
    handle: LoopHandle,
}

#[wasm_bindgen]
impl SphereHandle {
    /// Stop drawing; the next scheduled frame exits without rescheduling.
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        !self.handle.is_cancelled()
    }

    #[wasm_bindgen(js_name = setSphereRadius)]
    pub fn set_sphere_radius(&self, value: f32) {
        controls::apply(&self.render_loop, controls::Control::SphereRadius, value);
    }

    #[wasm_bindgen(js_name = setProjectionScale)]
    pub fn set_projection_scale(&self, value: f32) {
        controls::apply(&self.render_loop, controls::Control::ProjectionScale, value);
    }
}

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glowsphere-web starting");

    match auto_start() {
        // Page-lifetime effect; the frame closure keeps the loop alive.
        Ok(Some(_)) => log::info!("running on #{}", constants::CANVAS_ID),
        Ok(None) => {}
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Start the effect on the canvas with id `canvas_id`.
///
/// Returns `undefined` instead of throwing when the canvas is missing or has
/// no 2D context.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Option<SphereHandle> {
    let Some(document) = dom::window_document() else {
        log::warn!("no document; rendering unavailable");
        return None;
    };
    let Some(canvas) = dom::canvas_by_id(&document, canvas_id) else {
        log::warn!("missing #{canvas_id}; rendering unavailable");
        return None;
    };
    match start_on_canvas(&canvas) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("start error: {:?}", e);
            None
        }
    }
}

fn auto_start() -> anyhow::Result<Option<SphereHandle>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::canvas_by_id(&document, constants::CANVAS_ID) else {
        log::info!("no #{}; waiting for start()", constants::CANVAS_ID);
        return Ok(None);
    };
    let handle = start_on_canvas(&canvas)?;
    if let Some(h) = &handle {
        controls::wire_sliders(&document, &h.render_loop);
    }
    Ok(handle)
}

fn start_on_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Option<SphereHandle>> {
    let resize = dom::wire_canvas_resize(canvas);
    let surface = surface::CanvasSurface::from_canvas(canvas)?;
    let viewport = match &surface {
        Some(s) => s.size(),
        None => glam::Vec2::ONE,
    };
    let field = ParticleField::with_rng(SphereConfig::default(), viewport, StdRng::from_entropy())?;
    let Some((render_loop, handle)) = launch(surface, field) else {
        return Ok(None);
    };
    let render_loop = Rc::new(RefCell::new(render_loop));
    frame::start_loop(render_loop.clone(), resize);
    Ok(Some(SphereHandle {
        render_loop,
        handle,
    }))
}
