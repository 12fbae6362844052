use crate::input;
use ripple_core::{Clock, MaterialInstance, RippleTracker, SinceStart};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub tracker: Rc<RefCell<RippleTracker<MaterialInstance>>>,
    pub clock: SinceStart,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerup(&w);
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // primary button / touch / pen contact only
        if ev.button() != 0 {
            return;
        }
        let pos = input::pointer_client_px(&ev);
        let now = w.clock.now_secs();
        let mut tracker = w.tracker.borrow_mut();
        let Some(projection) = input::canvas_projection(&w.canvas, tracker.rect()) else {
            log::warn!("[click] canvas has no on-screen area; ignoring");
            return;
        };
        match tracker.register_click(pos, &projection, now) {
            Ok(hit) => log::info!(
                "[click] ripple slot {} at uv=({:.2},{:.2})",
                hit.slot,
                hit.uv.x,
                hit.uv.y
            ),
            Err(e) => log::warn!("[click] ignored: {}", e),
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
