#![cfg(target_arch = "wasm32")]
use ripple_core::{RippleMaterial, RippleParams, RippleTracker, SinceStart};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let params = RippleParams::default();
    let material = RippleMaterial::ripple(&params.wave).instantiate();
    let gpu = render::GpuState::new(&canvas, &material).await?;

    let tracker = RippleTracker::new(material, dom::canvas_local_rect(&canvas), params)?;
    let tracker = Rc::new(RefCell::new(tracker));
    let clock = SinceStart::new();

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        tracker: tracker.clone(),
        clock,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        tracker,
        clock,
        gpu,
    }));
    frame::start_animation_loop(frame_ctx);
    log::info!("[gpu] ripple renderer running");
    Ok(())
}
