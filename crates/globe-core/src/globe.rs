//! The globe controller: owns the layout, rotation, selection and the most
//! recent projection, and turns pointer input into state changes.

use crate::config::GlobeConfig;
use crate::error::GlobeError;
use crate::layout::fibonacci_sphere;
use crate::projection::{hit_test, project_into, ProjectedItem};
use crate::rotation::{Orientation, RotationMode, RotationState};
use glam::{Vec2, Vec3};

/// Notification for the host to show or hide its detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(usize),
    Cleared,
}

pub struct Globe<T> {
    items: Vec<T>,
    positions: Vec<Vec3>,
    config: GlobeConfig,
    rotation: RotationState,
    selected: Option<usize>,
    hovered: Option<usize>,
    projected: Vec<ProjectedItem>,
}

impl<T> Globe<T> {
    pub fn new(items: Vec<T>, config: GlobeConfig) -> Result<Self, GlobeError> {
        config.validate()?;
        let positions = fibonacci_sphere(items.len(), config.radius);
        log::info!(
            "[globe] laid out {} items on r={:.1}",
            positions.len(),
            config.radius
        );
        let rotation = RotationState::new(config.idle_yaw_step, config.drag_sensitivity);
        let mut globe = Self {
            items,
            positions,
            config,
            rotation,
            selected: None,
            hovered: None,
            projected: Vec::new(),
        };
        globe.reproject();
        Ok(globe)
    }

    /// Replace the item list and lay the sphere out again.
    ///
    /// Slots from the old list are meaningless afterwards, so any selection or
    /// hover is dropped; the orientation is kept.
    pub fn set_items(&mut self, items: Vec<T>) -> Option<SelectionChange> {
        self.positions = fibonacci_sphere(items.len(), self.config.radius);
        self.items = items;
        self.hovered = None;
        log::info!("[globe] re-laid out {} items", self.items.len());
        let change = self.dismiss();
        self.reproject();
        change
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, slot: usize) -> Option<&T> {
        self.items.get(slot)
    }

    pub fn base_positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.rotation.orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.rotation.set_orientation(orientation);
        self.reproject();
    }

    pub fn mode(&self) -> RotationMode {
        self.rotation.mode()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|slot| self.items.get(slot))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Projection from the last tick or input event, farthest first.
    pub fn projected(&self) -> &[ProjectedItem] {
        &self.projected
    }

    /// One animation frame: advance rotation if idle, then project.
    pub fn tick(&mut self) -> &[ProjectedItem] {
        self.rotation.tick();
        self.reproject();
        &self.projected
    }

    pub fn begin_drag(&mut self) {
        self.rotation.begin_drag();
    }

    /// Apply a pointer delta right away instead of waiting for the next frame.
    pub fn drag_by(&mut self, delta: Vec2) {
        if self.rotation.drag_by(delta) {
            self.reproject();
        }
    }

    pub fn end_drag(&mut self) {
        self.rotation.end_drag();
    }

    /// Select `slot` if it faced the viewer in the latest projection.
    pub fn click(&mut self, slot: usize) -> Option<SelectionChange> {
        let hit = self.projected.iter().find(|p| p.slot == slot)?;
        if !hit.is_front {
            log::debug!("[globe] ignored click on back item {}", slot);
            return None;
        }
        self.rotation.suspend();
        if self.selected == Some(slot) {
            return None;
        }
        self.selected = Some(slot);
        log::debug!("[globe] selected item {}", slot);
        Some(SelectionChange::Selected(slot))
    }

    /// Resolve a click at `point` (relative to the globe centre).
    pub fn click_at(&mut self, point: Vec2, item_radius: f32) -> Option<SelectionChange> {
        let slot = hit_test(&self.projected, point, item_radius)?;
        self.click(slot)
    }

    /// Track which front item lies under the pointer. Returns `true` on change.
    pub fn hover_at(&mut self, point: Vec2, item_radius: f32) -> bool {
        let hovered = hit_test(&self.projected, point, item_radius).filter(|slot| {
            self.projected
                .iter()
                .any(|p| p.slot == *slot && p.is_front)
        });
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn dismiss(&mut self) -> Option<SelectionChange> {
        let slot = self.selected.take()?;
        self.rotation.resume();
        log::debug!("[globe] dismissed item {}", slot);
        Some(SelectionChange::Cleared)
    }

    /// The host is going away: drop any drag in flight and forget the hover.
    pub fn deactivate(&mut self) {
        self.rotation.end_drag();
        self.hovered = None;
    }

    fn reproject(&mut self) {
        project_into(
            &mut self.projected,
            &self.positions,
            self.rotation.orientation(),
            &self.config,
        );
    }
}
