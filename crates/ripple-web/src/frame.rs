use crate::dom;
use crate::render::GpuState;
use ripple_core::{Clock, MaterialInstance, RippleTracker, RippleUniforms, SinceStart};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub tracker: Rc<RefCell<RippleTracker<MaterialInstance>>>,
    pub clock: SinceStart,
    pub gpu: GpuState,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);

        let mut tracker = self.tracker.borrow_mut();
        let local = dom::canvas_local_rect(&self.canvas);
        if local != tracker.rect() {
            tracker.set_rect(local);
            if let Err(e) = tracker.publish() {
                log::warn!("[resize] publish failed: {}", e);
            }
        }

        let (gw, gh) = self.gpu.size();
        let uniforms = RippleUniforms::pack(
            tracker.surface(),
            self.clock.now_secs(),
            [gw as f32, gh as f32],
        );
        let full = tracker.surface_mut().take_dirty();
        drop(tracker);
        self.gpu.upload(&uniforms, full);

        match self.gpu.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_animation_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
