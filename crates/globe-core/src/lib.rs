pub mod config;
pub mod constants;
pub mod error;
pub mod globe;
pub mod layout;
pub mod projection;
pub mod rotation;

pub use config::GlobeConfig;
pub use error::{ConfigError, GlobeError};
pub use globe::{Globe, SelectionChange};
pub use layout::fibonacci_sphere;
pub use projection::{hit_test, project, project_into, ProjectedItem};
pub use rotation::{wrap_angle, Orientation, RotationMode, RotationState};
