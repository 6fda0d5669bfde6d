use glam::Vec2;
use web_sys as web;

/// Per-gesture pointer bookkeeping: where it went down, where it was last
/// seen and how far it travelled, so a release can be told apart as a tap.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    pub down: bool,
    pub pointer_id: i32,
    pub last: Vec2,
    pub travel: f32,
}

impl PointerTracker {
    pub fn press(&mut self, pointer_id: i32, pos: Vec2) {
        self.down = true;
        self.pointer_id = pointer_id;
        self.last = pos;
        self.travel = 0.0;
    }

    /// Delta since the previous event of the same gesture, or `None` when
    /// the pointer is not pressed or belongs to another gesture.
    pub fn motion(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if !self.down || pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.travel += delta.length();
        Some(delta)
    }

    /// End the gesture. Returns `Some(is_tap)` if a gesture was in progress.
    pub fn release(&mut self, pointer_id: i32, tap_slop: f32) -> Option<bool> {
        if !self.down || pointer_id != self.pointer_id {
            return None;
        }
        self.down = false;
        Some(self.travel < tap_slop)
    }

    pub fn cancel(&mut self) {
        self.down = false;
    }
}

/// Keys that close the detail view.
#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Centre of the canvas in CSS pixels; projected offsets are relative to it.
#[inline]
pub fn canvas_center_css(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.width() as f32 * 0.5, rect.height() as f32 * 0.5)
}
