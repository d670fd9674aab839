#![cfg(target_arch = "wasm32")]
use polygon_core::{build_regular_polygon, RenderLoop, RenderState, POLYGON_RADIUS, POLYGON_SIDES};
use polygon_gpu::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod overlay;

// Keep the canvas backing store at CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("polygon-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            dom::alert(&format!("Unable to start the renderer: {e:#}"));
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let vertices = build_regular_polygon(POLYGON_SIDES, POLYGON_RADIUS)?;
    let gpu = GpuState::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        canvas.width(),
        canvas.height(),
        &vertices,
    )
    .await?;

    let state = Rc::new(RefCell::new(RenderState::default()));
    controls::wire_buttons(&document, &state);
    events::wire_global_keydown(&document, state.clone());

    let target = Rc::new(RefCell::new(frame::CanvasTarget::new(canvas, gpu)));
    let scheduler = Rc::new(frame::AnimationFrameScheduler::new(window));
    RenderLoop::new(state, target, scheduler).start();
    Ok(())
}
