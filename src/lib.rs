//! Livery - vehicle paint configurator engine
//!
//! Maps pointer positions on vehicle artwork to named parts, records the color
//! chosen for each part across every camera view, and produces the colored
//! overlays and paint job for the rendering layer. Headless: hosts supply the
//! viewport size and draw the returned shapes themselves.

pub mod catalog;
pub mod color_utils;
pub mod config;
pub mod configurator;
pub mod constants;
pub mod error;
pub mod hit;
pub mod mapper;
pub mod model;
pub mod overlay;
pub mod preview;
pub mod registry;
pub mod selection;
pub mod summary;
pub mod view_controller;

pub use catalog::{Catalog, CatalogError};
pub use configurator::{Configurator, HoverInfo};
pub use error::{LiveryError, Result};
pub use mapper::{CoordinateMapper, Scale, ViewportGeometry};
pub use model::{ColorChoice, PartDefinition, PartShape, Point, Rect, Size, ViewDefinition};
pub use overlay::{Overlay, OverlayCompositor, OverlayItem, OverlayStyle};
pub use registry::RegionRegistry;
pub use selection::SelectionState;
pub use summary::PaintJob;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(test)]
mod tests;
