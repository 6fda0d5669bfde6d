use thiserror::Error;

/// Rejected [`GlobeConfig`](crate::GlobeConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("radius must be finite and positive, got {0}")]
    Radius(f32),
    #[error("focal length must be finite and positive, got {0}")]
    FocalLength(f32),
    #[error("front threshold must be finite, got {0}")]
    FrontThreshold(f32),
    #[error("idle yaw step must be finite, got {0}")]
    IdleYawStep(f32),
    #[error("drag sensitivity must be finite, got {0}")]
    DragSensitivity(f32),
    #[error("min alpha must be in (0, 1], got {0}")]
    MinAlpha(f32),
    #[error("max scale must be finite and at least 1, got {0}")]
    MaxScale(f32),
}

#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("invalid globe configuration: {0}")]
    Config(#[from] ConfigError),
}
