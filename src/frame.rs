use crate::catalog::Destination;
use crate::dom;
use crate::input;
use crate::render;
use globe_core::Globe;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub globe: Rc<RefCell<Globe<Destination>>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: render::Painter,
}

impl FrameContext {
    /// Rotation is advanced before projection, and both finish before the
    /// frame is painted.
    pub fn frame(&mut self) {
        let dpr = dom::sync_canvas_backing_size(&self.canvas);
        let size = input::canvas_center_css(&self.canvas) * 2.0;

        let mut globe = self.globe.borrow_mut();
        globe.tick();
        let heading = globe.orientation().heading_degrees();
        self.painter.draw(&render::Scene {
            size,
            dpr,
            projected: globe.projected(),
            items: globe.items(),
            hovered: globe.hovered(),
            heading,
        });
    }
}

/// A `requestAnimationFrame` registration that re-arms itself every frame.
///
/// The pending request is cancelled by [`stop`](Self::stop) or on drop, so a
/// torn-down globe never leaves a recurring callback behind.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_clone.set(None);
            frame_ctx.borrow_mut().frame();
            // stopped while drawing: the closure is gone, do not re-arm
            if let Some(cb) = tick_clone.borrow().as_ref() {
                handle_clone.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            handle.set(request_frame(cb));
        }
        log::info!("[frame] loop started");
        Self { handle, tick }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
            log::info!("[frame] loop stopped");
        }
        // Dropping the closure breaks its reference cycle with `tick`.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
