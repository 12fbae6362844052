use ripple_core::Rect;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store at CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Element-local rect of the canvas, in backing-store pixels.
#[inline]
pub fn canvas_local_rect(canvas: &web::HtmlCanvasElement) -> Rect {
    Rect::from_size(canvas.width() as f32, canvas.height() as f32)
}

/// Where the canvas sits in client (CSS pixel) space, top-left origin.
#[inline]
pub fn canvas_client_bounds(canvas: &web::HtmlCanvasElement) -> Rect {
    let r = canvas.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}
