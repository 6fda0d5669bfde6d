//! Deterministic placement of items on the layout sphere.

use crate::constants::GOLDEN_ANGLE;
use glam::Vec3;

/// Spread `count` points over a sphere of `radius` using a Fibonacci spiral.
///
/// Point `i` depends only on `i` and `count`, so recomputing the layout for the
/// same list always yields the same positions. The first point sits at the top
/// pole (`+y`), the last at the bottom one.
pub fn fibonacci_sphere(count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| unit_point(i, count) * radius)
        .collect()
}

#[inline]
fn unit_point(index: usize, count: usize) -> Vec3 {
    // A single item has no spiral to walk; park it on the equator.
    let y = if count > 1 {
        1.0 - (index as f32 / (count - 1) as f32) * 2.0
    } else {
        0.0
    };
    let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
    let theta = GOLDEN_ANGLE * index as f32;
    let (sin_t, cos_t) = theta.sin_cos();
    Vec3::new(cos_t * radius_at_y, y, sin_t * radius_at_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_angle_matches_formula() {
        let expected = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
        assert!((GOLDEN_ANGLE - expected).abs() < 1e-6);
    }

    #[test]
    fn poles_come_first_and_last() {
        let pts = fibonacci_sphere(5, 2.0);
        assert!((pts[0] - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
        assert!((pts[4].y + 2.0).abs() < 1e-5);
    }
}
