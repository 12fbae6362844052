use crate::dom;
use glam::Vec2;
use ripple_core::{Rect, ScreenProjection, ScreenYAxis};
use web_sys as web;

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Map client-space pointer positions into the canvas' local rect.
///
/// `None` while the canvas has no on-screen area (hidden or collapsed).
pub fn canvas_projection(canvas: &web::HtmlCanvasElement, local: Rect) -> Option<ScreenProjection> {
    ScreenProjection::from_bounds(dom::canvas_client_bounds(canvas), local, ScreenYAxis::Down)
}
