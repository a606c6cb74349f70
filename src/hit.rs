//! Hit resolution: pointer position → part.
//!
//! Parts of a view are allowed to overlap. Authored order is a z-stack:
//! later parts are drawn on top, so when several parts contain the point the
//! **last-declared** one wins. The overlay compositor emits overlays in the
//! same order, which keeps what the user sees on top and what the click
//! selects in agreement.

use crate::error::Result;
use crate::mapper::{CoordinateMapper, ViewportGeometry};
use crate::model::{PartDefinition, Point};
use crate::registry::RegionRegistry;

/// Resolves display-space points against a view's part table.
#[derive(Debug, Clone)]
pub struct HitResolver<'a> {
    registry: &'a RegionRegistry,
}

impl<'a> HitResolver<'a> {
    pub fn new(registry: &'a RegionRegistry) -> Self {
        Self { registry }
    }

    /// Find the topmost part under a display-space point.
    ///
    /// `Ok(None)` means the point hit background. Errors only surface for an
    /// unknown view or a viewport that has not been laid out.
    pub fn resolve(
        &self,
        view_id: &str,
        display_point: Point,
        geometry: ViewportGeometry,
    ) -> Result<Option<&'a PartDefinition>> {
        let reference =
            CoordinateMapper::new(self.registry).to_reference(view_id, display_point, geometry)?;
        self.resolve_reference(view_id, reference)
    }

    /// Find the topmost part under a point already in reference space.
    pub fn resolve_reference(
        &self,
        view_id: &str,
        reference_point: Point,
    ) -> Result<Option<&'a PartDefinition>> {
        let parts = self.registry.parts_for(view_id)?;
        Ok(topmost_at(parts, &reference_point))
    }

    /// Every part under a reference-space point, topmost first.
    pub fn stack_at(
        &self,
        view_id: &str,
        reference_point: Point,
    ) -> Result<Vec<&'a PartDefinition>> {
        let parts = self.registry.parts_for(view_id)?;
        Ok(parts
            .iter()
            .rev()
            .filter(|p| p.shape.contains(&reference_point))
            .collect())
    }
}

/// Last part in `parts` containing `point`.
pub fn topmost_at<'p>(parts: &'p [PartDefinition], point: &Point) -> Option<&'p PartDefinition> {
    parts.iter().rev().find(|p| p.shape.contains(point))
}
