//! Global constants for the configurator.

/// Opacity of a paint overlay. The base artwork linework must stay visible.
pub const OVERLAY_OPACITY: f32 = 0.5;

/// Opacity of the hover highlight.
pub const HOVER_OPACITY: f32 = 0.3;

/// Render value of the hover highlight fill.
pub const HOVER_COLOR: &str = "#BEE3F8";

/// Render value of the hover highlight's dashed border.
pub const HOVER_BORDER_COLOR: &str = "#4299E1";

/// Reference size of the four-view scooter artwork.
pub const VIEW_REFERENCE_SIZE: (f32, f32) = (800.0, 600.0);

/// Reference size of the single-image studio artwork.
pub const STUDIO_REFERENCE_SIZE: (f32, f32) = (400.0, 300.0);

/// Hint shown when hovering a part that has no color yet.
pub const UNPAINTED_HINT: &str = "Click to paint";
