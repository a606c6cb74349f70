//! Reference-space ↔ display-space mathematics.
//!
//! Part bounds are authored against a fixed reference size. The artwork is
//! rendered at whatever size the host surface gives it, so every pointer
//! position and every overlay passes through a per-axis linear scale:
//!
//! `display = reference * (viewport / reference_size)`
//!
//! Horizontal and vertical scales are independent; an aspect-locked host
//! simply ends up with equal factors.

use serde::{Deserialize, Serialize};

use crate::error::{LiveryError, Result};
use crate::model::{PartShape, Point, Rect, Size};
use crate::registry::RegionRegistry;

/// Rendered size of the active view's artwork, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportGeometry {
    pub width: f32,
    pub height: f32,
}

impl ViewportGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has been laid out (non-zero, finite dimensions).
    pub fn is_ready(&self) -> bool {
        !Size::new(self.width, self.height).is_degenerate()
    }
}

/// Per-axis scale factors between a view's reference space and a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    /// Compute the scale for a reference size and viewport.
    ///
    /// Fails with `GeometryNotReady` instead of dividing by zero when the
    /// viewport has not been laid out.
    pub fn between(view_id: &str, reference: Size, geometry: ViewportGeometry) -> Result<Self> {
        if !geometry.is_ready() || reference.is_degenerate() {
            return Err(LiveryError::geometry_not_ready(view_id));
        }
        Ok(Self {
            x: geometry.width / reference.width,
            y: geometry.height / reference.height,
        })
    }

    pub fn to_display(self, p: Point) -> Point {
        Point::new(p.x * self.x, p.y * self.y)
    }

    pub fn to_reference(self, p: Point) -> Point {
        Point::new(p.x / self.x, p.y / self.y)
    }

    /// Map a rectangle corner-wise into display space.
    pub fn rect_to_display(&self, rect: &Rect) -> Rect {
        Rect::from_corners(
            self.to_display(rect.top_left()),
            self.to_display(rect.bottom_right()),
        )
    }

    /// Map a part shape into display space.
    pub fn shape_to_display(&self, shape: &PartShape) -> PartShape {
        match shape {
            PartShape::Rect(rect) => PartShape::Rect(self.rect_to_display(rect)),
            PartShape::Polygon(vertices) => {
                PartShape::Polygon(vertices.iter().map(|v| self.to_display(*v)).collect())
            }
        }
    }
}

/// Coordinate mapper bound to a registry, so callers address views by id.
#[derive(Debug, Clone)]
pub struct CoordinateMapper<'a> {
    registry: &'a RegionRegistry,
}

impl<'a> CoordinateMapper<'a> {
    pub fn new(registry: &'a RegionRegistry) -> Self {
        Self { registry }
    }

    /// Scale factors for a view at the given viewport size.
    pub fn scale(&self, view_id: &str, geometry: ViewportGeometry) -> Result<Scale> {
        let view = self.registry.view(view_id)?;
        Scale::between(view_id, view.reference_size, geometry)
    }

    /// Map a reference-space point to display space.
    pub fn to_display(
        &self,
        view_id: &str,
        reference_point: Point,
        geometry: ViewportGeometry,
    ) -> Result<Point> {
        Ok(self.scale(view_id, geometry)?.to_display(reference_point))
    }

    /// Map a display-space point back to reference space.
    pub fn to_reference(
        &self,
        view_id: &str,
        display_point: Point,
        geometry: ViewportGeometry,
    ) -> Result<Point> {
        Ok(self.scale(view_id, geometry)?.to_reference(display_point))
    }
}
