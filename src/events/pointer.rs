use crate::catalog::Destination;
use crate::constants::{ITEM_RADIUS_PX, TAP_SLOP_PX};
use crate::dom::EventListener;
use crate::input;
use crate::selection;
use globe_core::Globe;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub globe: Rc<RefCell<Globe<Destination>>>,
    pub pointer: Rc<RefCell<input::PointerTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) -> Vec<EventListener> {
    vec![
        wire_pointerdown(&w),
        wire_pointermove(&w),
        wire_pointerup(&w),
        wire_pointercancel(&w),
        wire_pointerleave(&w),
    ]
}

fn set_class(canvas: &web::HtmlCanvasElement, class: &str, on: bool) {
    let cl = canvas.class_list();
    let _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Pointer position relative to the globe centre.
fn globe_point(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    input::pointer_canvas_css(ev, canvas) - input::canvas_center_css(canvas)
}

fn wire_pointerdown(w: &InputWiring) -> EventListener {
    let w = w.clone();
    let target = w.canvas.clone();

    EventListener::new(target.as_ref(), "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = input::pointer_canvas_css(ev, &w.canvas);
        w.pointer.borrow_mut().press(ev.pointer_id(), pos);
        w.globe.borrow_mut().begin_drag();
        let _ = w.canvas.set_pointer_capture(ev.pointer_id());
        set_class(&w.canvas, "grabbing", true);
        ev.prevent_default();
    })
}

fn wire_pointermove(w: &InputWiring) -> EventListener {
    let w = w.clone();
    let target = w.canvas.clone();

    EventListener::new(target.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = input::pointer_canvas_css(ev, &w.canvas);
        let delta = w.pointer.borrow_mut().motion(ev.pointer_id(), pos);
        let mut globe = w.globe.borrow_mut();
        match delta {
            Some(d) => globe.drag_by(d),
            None => {
                if globe.hover_at(globe_point(ev, &w.canvas), ITEM_RADIUS_PX) {
                    set_class(&w.canvas, "hovering", globe.hovered().is_some());
                }
            }
        }
    })
}

fn wire_pointerup(w: &InputWiring) -> EventListener {
    let w = w.clone();
    let target = w.canvas.clone();

    EventListener::new(target.as_ref(), "pointerup", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let released = w.pointer.borrow_mut().release(ev.pointer_id(), TAP_SLOP_PX);
        let Some(is_tap) = released else {
            return;
        };
        w.globe.borrow_mut().end_drag();
        let _ = w.canvas.release_pointer_capture(ev.pointer_id());
        set_class(&w.canvas, "grabbing", false);

        if is_tap {
            let point = globe_point(ev, &w.canvas);
            selection::apply(&w.globe, |g| g.click_at(point, ITEM_RADIUS_PX));
        }
        ev.prevent_default();
    })
}

fn wire_pointercancel(w: &InputWiring) -> EventListener {
    let w = w.clone();
    let target = w.canvas.clone();

    EventListener::new(target.as_ref(), "pointercancel", move |_ev: web::Event| {
        w.pointer.borrow_mut().cancel();
        w.globe.borrow_mut().end_drag();
        set_class(&w.canvas, "grabbing", false);
    })
}

fn wire_pointerleave(w: &InputWiring) -> EventListener {
    let w = w.clone();
    let target = w.canvas.clone();

    EventListener::new(target.as_ref(), "pointerleave", move |_ev: web::Event| {
        w.globe.borrow_mut().clear_hover();
        set_class(&w.canvas, "hovering", false);
    })
}
