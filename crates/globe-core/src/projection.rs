//! Perspective projection of the rotated sphere into screen space.
//!
//! The output is ordered farthest-first so a renderer that simply paints the
//! list in order composes correctly without a depth buffer.

use crate::config::GlobeConfig;
use crate::constants::Z_INDEX_BASE;
use crate::rotation::Orientation;
use glam::{Vec2, Vec3};

/// One item as seen for a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedItem {
    /// Index of the item in the input sequence.
    pub slot: usize,
    /// Base position after rotation. Larger `z` is farther from the viewer.
    pub rotated: Vec3,
    /// Screen offset from the globe centre.
    pub offset: Vec2,
    pub scale: f32,
    pub alpha: f32,
    pub z_index: i32,
    /// Only front items may be picked.
    pub is_front: bool,
}

impl ProjectedItem {
    #[inline]
    pub fn depth(&self) -> f32 {
        self.rotated.z
    }

    #[inline]
    pub fn screen_position(&self, center: Vec2) -> Vec2 {
        center + self.offset
    }
}

/// Project every base position under `orientation`.
pub fn project(
    positions: &[Vec3],
    orientation: Orientation,
    config: &GlobeConfig,
) -> Vec<ProjectedItem> {
    let mut out = Vec::with_capacity(positions.len());
    project_into(&mut out, positions, orientation, config);
    out
}

/// Same as [`project`] but reuses `out`, which is cleared first.
pub fn project_into(
    out: &mut Vec<ProjectedItem>,
    positions: &[Vec3],
    orientation: Orientation,
    config: &GlobeConfig,
) {
    out.clear();
    out.extend(
        positions
            .iter()
            .enumerate()
            .map(|(slot, base)| project_point(slot, orientation.rotate(*base), config)),
    );
    // Stable, so coincident depths keep input order.
    out.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
}

#[inline]
fn project_point(slot: usize, rotated: Vec3, config: &GlobeConfig) -> ProjectedItem {
    let scale = perspective_scale(rotated.z, config.focal_length, config.max_scale);
    ProjectedItem {
        slot,
        rotated,
        offset: Vec2::new(rotated.x * scale, rotated.y * scale),
        scale,
        alpha: depth_alpha(rotated.z, config.radius, config.min_alpha),
        z_index: (Z_INDEX_BASE - rotated.z).floor() as i32,
        is_front: rotated.z < config.front_threshold,
    }
}

/// `F / (F + z)`, capped at `max_scale` as the point approaches the camera.
#[inline]
pub fn perspective_scale(z: f32, focal_length: f32, max_scale: f32) -> f32 {
    let denom = focal_length + z;
    if denom * max_scale <= focal_length {
        return max_scale;
    }
    (focal_length / denom).min(max_scale)
}

/// Maps `z` linearly from `[-radius, +radius]` onto `[min_alpha, 1]`, clamped.
#[inline]
pub fn depth_alpha(z: f32, radius: f32, min_alpha: f32) -> f32 {
    let t = (z + radius) / (2.0 * radius);
    (min_alpha + (1.0 - min_alpha) * t).clamp(min_alpha, 1.0)
}

/// Nearest projected item whose scaled disc contains `point`.
///
/// `point` is relative to the globe centre. Items are tested nearest-first so
/// an overlapping front item wins over anything behind it.
pub fn hit_test(projected: &[ProjectedItem], point: Vec2, item_radius: f32) -> Option<usize> {
    projected
        .iter()
        .rev()
        .find(|p| p.offset.distance(point) <= item_radius * p.scale)
        .map(|p| p.slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_capped_near_camera() {
        assert_eq!(perspective_scale(-1000.0, 1000.0, 8.0), 8.0);
        assert_eq!(perspective_scale(-2000.0, 1000.0, 8.0), 8.0);
        assert_eq!(perspective_scale(-999.9, 1000.0, 8.0), 8.0);
        assert!((perspective_scale(0.0, 1000.0, 8.0) - 1.0).abs() < 1e-6);
        assert!((perspective_scale(1000.0, 1000.0, 8.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn alpha_spans_floor_to_opaque() {
        assert!((depth_alpha(-450.0, 450.0, 0.1) - 0.1).abs() < 1e-6);
        assert!((depth_alpha(450.0, 450.0, 0.1) - 1.0).abs() < 1e-6);
        assert!((depth_alpha(0.0, 450.0, 0.1) - 0.55).abs() < 1e-6);
        assert_eq!(depth_alpha(-900.0, 450.0, 0.1), 0.1);
        assert_eq!(depth_alpha(900.0, 450.0, 0.1), 1.0);
    }

    #[test]
    fn hit_test_prefers_nearest() {
        let cfg = GlobeConfig::default();
        let positions = [Vec3::new(0.0, 0.0, 300.0), Vec3::new(0.0, 0.0, -300.0)];
        let projected = project(&positions, Orientation::default(), &cfg);
        assert_eq!(hit_test(&projected, Vec2::ZERO, 40.0), Some(1));
        assert_eq!(hit_test(&projected, Vec2::new(500.0, 0.0), 40.0), None);
        assert_eq!(hit_test(&[], Vec2::ZERO, 40.0), None);
    }
}
