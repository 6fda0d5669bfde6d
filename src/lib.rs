#![cfg(target_arch = "wasm32")]
use catalog::Destination;
use globe_core::Globe;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod catalog;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod selection;

/// A globe attached to a canvas: the frame registration, the DOM listeners
/// and the state they drive. Dropping it releases all of them.
struct Mount {
    globe: Rc<RefCell<Globe<Destination>>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<dom::EventListener>,
}

impl Mount {
    fn release(mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        // a drag may still be in flight; its pointerup will never arrive
        self.globe.borrow_mut().deactivate();
        if let Some(document) = dom::window_document() {
            overlay::hide(&document);
        }
        log::info!("globe unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mount>> = const { RefCell::new(None) };
}

fn mounted_globe() -> Option<Rc<RefCell<Globe<Destination>>>> {
    MOUNTED.with(|m| m.borrow().as_ref().map(|mount| mount.globe.clone()))
}

fn mount_canvas(canvas_id: &str) -> anyhow::Result<Mount> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let config = dom::config_from_dataset(&canvas);
    let items = dom::load_catalog(&document);
    let globe = Rc::new(RefCell::new(Globe::new(items, config)?));
    overlay::hide(&document);

    let mut listeners = events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        globe: globe.clone(),
        pointer: Rc::new(RefCell::new(input::PointerTracker::default())),
    });
    listeners.push(events::wire_global_keydown(&window, globe.clone()));
    listeners.extend(events::wire_detail_buttons(&document, &globe));

    let painter = render::Painter::new(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        globe: globe.clone(),
        canvas,
        painter,
    }));
    let frame_loop = frame::FrameLoop::start(frame_ctx);

    Ok(Mount {
        globe,
        frame_loop,
        listeners,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::DEFAULT_CANVAS_ID))
        .is_some();
    if has_canvas {
        if let Err(e) = mount(constants::DEFAULT_CANVAS_ID) {
            log::error!("mount error: {:?}", e);
        }
    }
    Ok(())
}

/// Attach the globe to the canvas with `canvas_id`, replacing any mounted one.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<(), JsValue> {
    unmount();
    let mounted = mount_canvas(canvas_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("globe mounted on #{}", canvas_id);
    MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
    Ok(())
}

/// Stop the frame loop and remove every listener the globe registered.
#[wasm_bindgen]
pub fn unmount() {
    let mount = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(mount) = mount {
        mount.release();
    }
}

/// Replace the displayed items with a JSON array of destinations.
#[wasm_bindgen]
pub fn set_items_json(json: &str) -> Result<(), JsValue> {
    let items = catalog::parse_catalog(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let globe = mounted_globe().ok_or_else(|| JsValue::from_str("globe is not mounted"))?;
    selection::apply(&globe, |g| g.set_items(items));
    Ok(())
}

/// Register `callback(id | null)`, called whenever the selection changes.
#[wasm_bindgen]
pub fn on_selection_change(callback: Option<js_sys::Function>) {
    selection::set_listener(callback);
}

/// Close the detail view, resuming auto-rotation.
#[wasm_bindgen]
pub fn dismiss_selection() {
    if let Some(globe) = mounted_globe() {
        selection::apply(&globe, |g| g.dismiss());
    }
}
