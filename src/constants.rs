// Drawing and pointer tuning for the canvas host.

// Item bubbles
pub const ITEM_RADIUS_PX: f32 = 40.0; // bubble radius at scale 1, also the pick radius
pub const ITEM_RING_PX: f32 = 4.0; // gold ring around each bubble
pub const HOVER_SCALE: f32 = 1.2; // hovered bubble grows by this factor
pub const BACK_DIM: f32 = 0.7; // extra fade for items facing away

// Labels
pub const STEM_LENGTH_PX: f32 = 32.0; // line between bubble and label
pub const LABEL_WIDTH_PX: f32 = 140.0;
pub const LABEL_HEIGHT_PX: f32 = 34.0;

// Decorative wireframe rings behind the items
pub const RING_RADII_PX: [f32; 2] = [250.0, 180.0];
pub const RING_ALPHA: f32 = 0.2;

// Pointer
pub const TAP_SLOP_PX: f32 = 4.0; // total travel below this counts as a tap

// Palette
pub const BACKGROUND_INNER: &str = "#4A2E20";
pub const BACKGROUND_OUTER: &str = "#1F0F0A";
pub const GOLD: &str = "#C5A059";
pub const CREAM: &str = "#E3D4C4";
pub const LABEL_FILL: &str = "rgba(44, 24, 16, 0.8)";

// DOM
pub const DEFAULT_CANVAS_ID: &str = "globe-canvas";
pub const CATALOG_SCRIPT_ID: &str = "globe-items";
