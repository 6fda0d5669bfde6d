// Default tuning for the globe. `GlobeConfig::default()` is built from these.

// Layout
pub const DEFAULT_RADIUS: f32 = 450.0; // sphere radius in screen units

// Projection
pub const DEFAULT_FOCAL_LENGTH: f32 = 1000.0; // perspective distance
pub const DEFAULT_FRONT_THRESHOLD: f32 = 100.0; // rotated z below this is clickable
pub const DEFAULT_MIN_ALPHA: f32 = 0.1; // far side never fully disappears
pub const DEFAULT_MAX_SCALE: f32 = 8.0; // cap when an item reaches the camera
pub const Z_INDEX_BASE: f32 = 1000.0; // stacking order = floor(base - z)

// Motion
pub const DEFAULT_IDLE_YAW_STEP: f32 = 0.002; // radians per frame while idle
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.005; // radians per pixel of drag

/// `π(3 - √5)`, the angular increment between consecutive layout points.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;
