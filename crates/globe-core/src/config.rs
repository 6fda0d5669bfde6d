use crate::constants::*;
use crate::error::ConfigError;

/// Tunable parameters of the globe.
///
/// The motion constants have no derivation beyond "feels right"; they live
/// here rather than in the algorithms so hosts can adjust them.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub radius: f32,
    pub focal_length: f32,
    pub front_threshold: f32,
    pub idle_yaw_step: f32,
    pub drag_sensitivity: f32,
    pub min_alpha: f32,
    pub max_scale: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            focal_length: DEFAULT_FOCAL_LENGTH,
            front_threshold: DEFAULT_FRONT_THRESHOLD,
            idle_yaw_step: DEFAULT_IDLE_YAW_STEP,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            min_alpha: DEFAULT_MIN_ALPHA,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

impl GlobeConfig {
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn with_front_threshold(mut self, threshold: f32) -> Self {
        self.front_threshold = threshold;
        self
    }

    pub fn with_idle_yaw_step(mut self, step: f32) -> Self {
        self.idle_yaw_step = step;
        self
    }

    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn with_min_alpha(mut self, min_alpha: f32) -> Self {
        self.min_alpha = min_alpha;
        self
    }

    pub fn with_max_scale(mut self, max_scale: f32) -> Self {
        self.max_scale = max_scale;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::Radius(self.radius));
        }
        if !self.focal_length.is_finite() || self.focal_length <= 0.0 {
            return Err(ConfigError::FocalLength(self.focal_length));
        }
        if !self.front_threshold.is_finite() {
            return Err(ConfigError::FrontThreshold(self.front_threshold));
        }
        if !self.idle_yaw_step.is_finite() {
            return Err(ConfigError::IdleYawStep(self.idle_yaw_step));
        }
        if !self.drag_sensitivity.is_finite() {
            return Err(ConfigError::DragSensitivity(self.drag_sensitivity));
        }
        if !(self.min_alpha > 0.0 && self.min_alpha <= 1.0) {
            return Err(ConfigError::MinAlpha(self.min_alpha));
        }
        if !self.max_scale.is_finite() || self.max_scale < 1.0 {
            return Err(ConfigError::MaxScale(self.max_scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GlobeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_values() {
        let base = GlobeConfig::default();
        assert_eq!(
            base.clone().with_radius(0.0).validate(),
            Err(ConfigError::Radius(0.0))
        );
        assert!(matches!(
            base.clone().with_focal_length(f32::NAN).validate(),
            Err(ConfigError::FocalLength(_))
        ));
        assert_eq!(
            base.clone().with_min_alpha(1.5).validate(),
            Err(ConfigError::MinAlpha(1.5))
        );
        assert_eq!(
            base.clone().with_max_scale(0.5).validate(),
            Err(ConfigError::MaxScale(0.5))
        );
        assert!(matches!(
            base.with_idle_yaw_step(f32::INFINITY).validate(),
            Err(ConfigError::IdleYawStep(_))
        ));
    }
}
