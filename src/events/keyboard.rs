use crate::catalog::Destination;
use crate::dom::EventListener;
use crate::input::is_dismiss_key;
use crate::selection;
use globe_core::Globe;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(
    window: &web::Window,
    globe: Rc<RefCell<Globe<Destination>>>,
) -> EventListener {
    EventListener::new(window.as_ref(), "keydown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if is_dismiss_key(&ev.key()) {
            selection::apply(&globe, |g| g.dismiss());
        }
    })
}

/// Close button and backdrop of the detail overlay both dismiss the selection.
pub fn wire_detail_buttons(
    document: &web::Document,
    globe: &Rc<RefCell<Globe<Destination>>>,
) -> Vec<EventListener> {
    ["detail-close", "detail-backdrop"]
        .into_iter()
        .filter_map(|id| {
            let globe = globe.clone();
            EventListener::on_element(document, id, "click", move |_ev: web::Event| {
                selection::apply(&globe, |g| g.dismiss());
            })
        })
        .collect()
}
