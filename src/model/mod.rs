//! Reference data models: geometry, parts, views and colors.

mod color;
mod geometry;
mod part;
mod view;

pub use color::{ColorCategory, ColorChoice, ColorId};
pub use geometry::{Point, Rect, Size, bounds_of, polygon_contains};
pub use part::{MIN_POLYGON_VERTICES, PartDefinition, PartId, PartShape};
pub use view::{ViewDefinition, ViewId};
