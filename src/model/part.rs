//! Paintable part definitions.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect, bounds_of, polygon_contains};

/// Identifier of a part. Shared across views: "seat" in the front view and
/// "seat" in the rear view are the same paintable part.
pub type PartId = String;

/// Minimum number of vertices required for a valid polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Region geometry of a part, in reference coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartShape {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Closed polygon.
    Polygon(Vec<Point>),
}

impl PartShape {
    /// Axis-aligned bounds of the shape.
    pub fn bounds(&self) -> Rect {
        match self {
            PartShape::Rect(rect) => *rect,
            PartShape::Polygon(vertices) => {
                bounds_of(vertices).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
            }
        }
    }

    /// Check if a point is inside the shape.
    ///
    /// Rectangle edges count as inside. Polygons use ray casting, so points
    /// exactly on a polygon edge may fall either way.
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            PartShape::Rect(rect) => rect.contains(point),
            PartShape::Polygon(vertices) => {
                self.bounds().contains(point) && polygon_contains(vertices, point)
            }
        }
    }

    /// Whether the shape can be registered.
    pub fn is_valid(&self) -> bool {
        match self {
            PartShape::Rect(rect) => rect.is_well_formed(),
            PartShape::Polygon(vertices) => {
                vertices.len() >= MIN_POLYGON_VERTICES && self.bounds().is_well_formed()
            }
        }
    }

    /// Short name used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PartShape::Rect(_) => "rect",
            PartShape::Polygon(_) => "polygon",
        }
    }
}

/// A paintable zone of the vehicle as drawn in one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDefinition {
    /// Stable identifier, unique within a view.
    pub id: PartId,
    /// Human readable label.
    pub display_name: String,
    /// Geometry in the view's reference space.
    pub shape: PartShape,
}

impl PartDefinition {
    /// Create a rectangular part from its two corners.
    pub fn rect(
        id: impl Into<PartId>,
        display_name: impl Into<String>,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            shape: PartShape::Rect(Rect::new(x1, y1, x2, y2)),
        }
    }

    /// Create a polygonal part.
    pub fn polygon(
        id: impl Into<PartId>,
        display_name: impl Into<String>,
        vertices: Vec<Point>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            shape: PartShape::Polygon(vertices),
        }
    }

    /// Reference-space bounds of the part.
    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }
}
