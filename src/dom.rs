use crate::catalog::{self, Destination};
use crate::constants::CATALOG_SCRIPT_ID;
use globe_core::GlobeConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that is removed from its target when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    /// Listen on the element with `element_id`, if the page has one.
    pub fn on_element(
        document: &web::Document,
        element_id: &str,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let el = document.get_element_by_id(element_id)?;
        Some(Self::new(el.as_ref(), kind, handler))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the ratio so drawing can keep working in CSS pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    dpr
}

fn data_f32(el: &web::Element, name: &str) -> Option<f32> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse::<f32>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}", name, raw);
            None
        }
    }
}

/// Build the globe configuration from `data-*` attributes on the canvas,
/// falling back to the defaults for anything missing or unparsable.
pub fn config_from_dataset(canvas: &web::HtmlCanvasElement) -> GlobeConfig {
    let mut cfg = GlobeConfig::default();
    if let Some(v) = data_f32(canvas, "data-radius") {
        cfg = cfg.with_radius(v);
    }
    if let Some(v) = data_f32(canvas, "data-focal-length") {
        cfg = cfg.with_focal_length(v);
    }
    if let Some(v) = data_f32(canvas, "data-idle-step") {
        cfg = cfg.with_idle_yaw_step(v);
    }
    if let Some(v) = data_f32(canvas, "data-drag-sensitivity") {
        cfg = cfg.with_drag_sensitivity(v);
    }
    cfg
}

/// Items from an inline `<script type="application/json">` block, or the
/// built-in list when the page has none or it does not parse.
pub fn load_catalog(document: &web::Document) -> Vec<Destination> {
    let Some(el) = document.get_element_by_id(CATALOG_SCRIPT_ID) else {
        return catalog::default_catalog();
    };
    let text = el.text_content().unwrap_or_default();
    match catalog::parse_catalog(&text) {
        Ok(items) => {
            log::info!("[catalog] {} items from #{}", items.len(), CATALOG_SCRIPT_ID);
            items
        }
        Err(e) => {
            log::error!("[catalog] #{} unreadable, using defaults: {}", CATALOG_SCRIPT_ID, e);
            catalog::default_catalog()
        }
    }
}
