//! Overlay compositor: turns selection state into display-space shapes.
//!
//! Output follows the region registry's authored order, the same order the
//! hit resolver treats as its z-stack, so the topmost overlay at a point is
//! always the part a click there would select.

use serde::Serialize;

use crate::constants::{HOVER_BORDER_COLOR, HOVER_COLOR, HOVER_OPACITY, OVERLAY_OPACITY};
use crate::error::Result;
use crate::mapper::{CoordinateMapper, ViewportGeometry};
use crate::model::{ColorId, PartId, PartShape, Point, Rect};
use crate::registry::RegionRegistry;
use crate::selection::SelectionState;

/// Presentation settings for overlays. Never consulted by hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Opacity of paint overlays (0.0-1.0)
    pub fill_opacity: f32,
    /// Opacity of the hover highlight (0.0-1.0)
    pub hover_opacity: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            fill_opacity: OVERLAY_OPACITY,
            hover_opacity: HOVER_OPACITY,
        }
    }
}

/// One painted part, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayItem {
    /// Part the overlay belongs to
    pub part_id: PartId,
    /// Display-space bounds
    pub bounds: Rect,
    /// Display-space shape (same as `bounds` for rectangular parts)
    pub shape: PartShape,
    /// Color id from the palette
    pub color_id: ColorId,
    /// Render value of the color
    pub color: String,
    /// Fill opacity
    pub opacity: f32,
}

/// Dashed highlight drawn over the hovered part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverHighlight {
    pub part_id: PartId,
    pub bounds: Rect,
    pub shape: PartShape,
    pub fill: &'static str,
    pub border: &'static str,
    pub opacity: f32,
}

/// Name tag anchored at the center of a part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartLabel {
    pub part_id: PartId,
    pub text: String,
    /// Display-space center of the part's bounds
    pub anchor: Point,
    /// Only the hovered part's label is shown
    pub visible: bool,
}

/// Everything the rendering layer draws over the base artwork for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overlay {
    /// Paint overlays, bottom to top
    pub items: Vec<OverlayItem>,
    /// Hover highlight, drawn above all paint overlays
    pub hover: Option<HoverHighlight>,
    /// Part labels in authored order
    pub labels: Vec<PartLabel>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.hover.is_none() && !self.labels.iter().any(|l| l.visible)
    }

    /// Topmost paint overlay at a display-space point.
    pub fn topmost_at(&self, point: &Point) -> Option<&OverlayItem> {
        self.items
            .iter()
            .rev()
            .find(|item| item.shape.contains(point))
    }
}

/// Builds overlays for a view from the registry and selection state.
#[derive(Debug, Clone)]
pub struct OverlayCompositor<'a> {
    registry: &'a RegionRegistry,
    style: OverlayStyle,
}

impl<'a> OverlayCompositor<'a> {
    pub fn new(registry: &'a RegionRegistry) -> Self {
        Self {
            registry,
            style: OverlayStyle::default(),
        }
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    /// Paint overlays for every painted part of the view, in authored order.
    pub fn overlays_for(
        &self,
        view_id: &str,
        geometry: ViewportGeometry,
        selection: &SelectionState,
    ) -> Result<Vec<OverlayItem>> {
        let parts = self.registry.parts_for(view_id)?;
        let scale = CoordinateMapper::new(self.registry).scale(view_id, geometry)?;

        Ok(parts
            .iter()
            .filter_map(|part| {
                let color = selection.get(&part.id)?;
                let shape = scale.shape_to_display(&part.shape);
                Some(OverlayItem {
                    part_id: part.id.clone(),
                    bounds: shape.bounds(),
                    shape,
                    color_id: color.id.clone(),
                    color: color.render_value.clone(),
                    opacity: self.style.fill_opacity,
                })
            })
            .collect())
    }

    /// Highlight for the hovered part, if it belongs to this view.
    pub fn hover_overlay(
        &self,
        view_id: &str,
        hovered: Option<&str>,
        geometry: ViewportGeometry,
    ) -> Result<Option<HoverHighlight>> {
        let Some(part_id) = hovered else {
            return Ok(None);
        };
        let Some(part) = self.registry.view(view_id)?.part(part_id) else {
            return Ok(None);
        };
        let scale = CoordinateMapper::new(self.registry).scale(view_id, geometry)?;
        let shape = scale.shape_to_display(&part.shape);

        Ok(Some(HoverHighlight {
            part_id: part.id.clone(),
            bounds: shape.bounds(),
            shape,
            fill: HOVER_COLOR,
            border: HOVER_BORDER_COLOR,
            opacity: self.style.hover_opacity,
        }))
    }

    /// One label per part, centered on its display bounds.
    pub fn labels_for(
        &self,
        view_id: &str,
        hovered: Option<&str>,
        geometry: ViewportGeometry,
    ) -> Result<Vec<PartLabel>> {
        let parts = self.registry.parts_for(view_id)?;
        let scale = CoordinateMapper::new(self.registry).scale(view_id, geometry)?;

        Ok(parts
            .iter()
            .map(|part| PartLabel {
                part_id: part.id.clone(),
                text: part.display_name.clone(),
                anchor: scale.to_display(part.bounds().center()),
                visible: hovered == Some(part.id.as_str()),
            })
            .collect())
    }

    /// Full frame overlay: paint, hover highlight and labels.
    pub fn compose(
        &self,
        view_id: &str,
        geometry: ViewportGeometry,
        selection: &SelectionState,
        hovered: Option<&str>,
    ) -> Result<Overlay> {
        Ok(Overlay {
            items: self.overlays_for(view_id, geometry, selection)?,
            hover: self.hover_overlay(view_id, hovered, geometry)?,
            labels: self.labels_for(view_id, hovered, geometry)?,
        })
    }
}
