//! View orientation of the globe and the state machine that advances it.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Wrap an angle into `[-π, π)`.
#[inline]
pub fn wrap_angle(radians: f32) -> f32 {
    if (-PI..PI).contains(&radians) {
        return radians;
    }
    (radians + PI).rem_euclid(TAU) - PI
}

/// Pitch (about the horizontal axis) and yaw (about the vertical axis), in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self {
            pitch: wrap_angle(pitch),
            yaw: wrap_angle(yaw),
        }
    }

    /// Apply yaw about `+y`, then pitch about `+x` to the yaw-rotated point.
    #[inline]
    pub fn rotate(&self, p: Vec3) -> Vec3 {
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let (sin_p, cos_p) = self.pitch.sin_cos();
        let x = p.x * cos_y - p.z * sin_y;
        let z = p.z * cos_y + p.x * sin_y;
        let y = p.y * cos_p - z * sin_p;
        let z = z * cos_p + p.y * sin_p;
        Vec3::new(x, y, z)
    }

    /// Undo [`rotate`](Self::rotate): pitch is removed first, then yaw.
    #[inline]
    pub fn inverse_rotate(&self, p: Vec3) -> Vec3 {
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let (sin_p, cos_p) = self.pitch.sin_cos();
        let y = p.y * cos_p + p.z * sin_p;
        let z = p.z * cos_p - p.y * sin_p;
        let x = p.x * cos_y + z * sin_y;
        let z = z * cos_y - p.x * sin_y;
        Vec3::new(x, y, z)
    }

    /// Yaw as a compass heading in whole degrees, `0..360`.
    pub fn heading_degrees(&self) -> u32 {
        let deg = self.yaw.to_degrees().round().rem_euclid(360.0);
        (deg as u32) % 360
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// Auto-rotating.
    #[default]
    Idle,
    /// Following pointer drag input.
    Dragging,
    /// Frozen while a selection is shown.
    Suspended,
}

/// Current orientation plus the mode that decides who may change it.
#[derive(Clone, Debug)]
pub struct RotationState {
    orientation: Orientation,
    mode: RotationMode,
    idle_yaw_step: f32,
    drag_sensitivity: f32,
}

impl RotationState {
    pub fn new(idle_yaw_step: f32, drag_sensitivity: f32) -> Self {
        Self {
            orientation: Orientation::default(),
            mode: RotationMode::Idle,
            idle_yaw_step,
            drag_sensitivity,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Orientation::new(orientation.pitch, orientation.yaw);
    }

    /// Advance one frame. Returns `true` if the orientation moved.
    pub fn tick(&mut self) -> bool {
        if self.mode != RotationMode::Idle {
            return false;
        }
        self.orientation.yaw = wrap_angle(self.orientation.yaw + self.idle_yaw_step);
        true
    }

    pub fn begin_drag(&mut self) {
        match self.mode {
            RotationMode::Idle => {
                self.mode = RotationMode::Dragging;
                log::debug!("[rotation] idle -> dragging");
            }
            RotationMode::Dragging | RotationMode::Suspended => {}
        }
    }

    /// Apply a pointer delta in pixels. Ignored unless a drag is in progress.
    pub fn drag_by(&mut self, delta: Vec2) -> bool {
        if self.mode != RotationMode::Dragging {
            return false;
        }
        let o = &mut self.orientation;
        o.pitch = wrap_angle(o.pitch + delta.y * self.drag_sensitivity);
        o.yaw = wrap_angle(o.yaw - delta.x * self.drag_sensitivity);
        true
    }

    pub fn end_drag(&mut self) {
        if self.mode == RotationMode::Dragging {
            self.mode = RotationMode::Idle;
            log::debug!("[rotation] dragging -> idle");
        }
    }

    pub fn suspend(&mut self) {
        if self.mode != RotationMode::Suspended {
            log::debug!("[rotation] {:?} -> suspended", self.mode);
            self.mode = RotationMode::Suspended;
        }
    }

    pub fn resume(&mut self) {
        if self.mode == RotationMode::Suspended {
            self.mode = RotationMode::Idle;
            log::debug!("[rotation] suspended -> idle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_angle_stays_in_range() {
        for a in [-10.0_f32, -PI, 0.0, PI, 7.5, 100.0] {
            let w = wrap_angle(a);
            assert!((-PI..PI).contains(&w), "{} wrapped to {}", a, w);
            assert!(((a - w) / TAU - ((a - w) / TAU).round()).abs() < 1e-4);
        }
    }

    #[test]
    fn heading_is_compass_degrees() {
        assert_eq!(Orientation::new(0.0, 0.0).heading_degrees(), 0);
        assert_eq!(Orientation::new(0.0, PI / 2.0).heading_degrees(), 90);
        assert_eq!(Orientation::new(0.0, -PI / 2.0).heading_degrees(), 270);
    }

    #[test]
    fn end_drag_without_drag_is_noop() {
        let mut s = RotationState::new(0.01, 0.005);
        s.end_drag();
        assert_eq!(s.mode(), RotationMode::Idle);
        s.suspend();
        s.end_drag();
        assert_eq!(s.mode(), RotationMode::Suspended);
    }
}
