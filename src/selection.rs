use crate::catalog::Destination;
use crate::dom;
use crate::overlay;
use globe_core::{Globe, SelectionChange};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

thread_local! {
    static LISTENER: RefCell<Option<js_sys::Function>> = const { RefCell::new(None) };
}

pub fn set_listener(callback: Option<js_sys::Function>) {
    LISTENER.with(|l| *l.borrow_mut() = callback);
}

/// Show or hide the detail overlay and tell the embedding page.
///
/// Must be called with no borrow of the globe held: the page callback may
/// call back into the exported API.
pub fn publish(change: SelectionChange, item: Option<&Destination>) {
    if let Some(document) = dom::window_document() {
        match (change, item) {
            (SelectionChange::Selected(_), Some(dest)) => overlay::show(&document, dest),
            _ => overlay::hide(&document),
        }
    }
    let arg = match (change, item) {
        (SelectionChange::Selected(_), Some(dest)) => JsValue::from_str(&dest.id),
        _ => JsValue::NULL,
    };
    let callback = LISTENER.with(|l| l.borrow().clone());
    if let Some(cb) = callback {
        if let Err(e) = cb.call1(&JsValue::NULL, &arg) {
            log::error!("[selection] listener threw: {:?}", e);
        }
    }
}

/// Run a selection operation on the globe and publish its outcome, if any,
/// after the borrow has been released.
pub fn apply<F>(globe: &Rc<RefCell<Globe<Destination>>>, op: F)
where
    F: FnOnce(&mut Globe<Destination>) -> Option<SelectionChange>,
{
    let (change, item) = {
        let mut g = globe.borrow_mut();
        let Some(change) = op(&mut g) else {
            return;
        };
        (change, g.selected_item().cloned())
    };
    publish(change, item.as_ref());
}
