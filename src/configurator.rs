//! Configurator facade: the single entry point hosts talk to.
//!
//! Owns the registry, palette, view controller, selection and the live
//! viewport size of each view. Pointer events arrive in display space for
//! the active view; everything else is addressed by id.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::constants::UNPAINTED_HINT;
use crate::error::{LiveryError, Result};
use crate::hit::HitResolver;
use crate::mapper::ViewportGeometry;
use crate::model::{ColorChoice, ColorId, PartId, Point, ViewDefinition, ViewId};
use crate::overlay::{Overlay, OverlayCompositor, OverlayItem, OverlayStyle};
use crate::registry::RegionRegistry;
use crate::selection::SelectionState;
use crate::summary::PaintJob;
use crate::view_controller::ViewController;

/// Tooltip content for the hovered part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverInfo {
    pub part_id: PartId,
    pub part_name: String,
    /// Display name of the current color, None while unpainted
    pub color_name: Option<String>,
}

impl HoverInfo {
    /// Second tooltip line: the color name or a hint to paint.
    pub fn caption(&self) -> &str {
        self.color_name.as_deref().unwrap_or(UNPAINTED_HINT)
    }
}

impl fmt::Display for HoverInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.part_name, self.caption())
    }
}

/// Paint configurator for one vehicle model.
#[derive(Debug, Clone, Default)]
pub struct Configurator {
    model_name: String,
    registry: RegionRegistry,
    colors: Vec<ColorChoice>,
    views: ViewController,
    selection: SelectionState,
    viewports: HashMap<ViewId, ViewportGeometry>,
    last_clicked: Option<PartId>,
    style: OverlayStyle,
}

impl Configurator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configurator holding every view and color of the catalog.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let mut configurator = Self {
            model_name: catalog.model_name,
            ..Self::default()
        };
        for view in catalog.views {
            configurator.register_view(view)?;
        }
        for color in catalog.colors {
            configurator.register_color(color)?;
        }
        log::info!(
            "Configurator for '{}' ready: {} views, {} colors",
            configurator.model_name,
            configurator.registry.len(),
            configurator.colors.len()
        );
        Ok(configurator)
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
    }

    pub fn style(&self) -> OverlayStyle {
        self.style
    }

    /// Vehicle model from the catalog. Empty for hand-built configurators.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    // =========================================================================
    // Reference data
    // =========================================================================

    /// Register a view and append it to the view cycle.
    pub fn register_view(&mut self, view: ViewDefinition) -> Result<()> {
        let view_id = view.id.clone();
        self.registry.register(view)?;
        self.views.push_view(view_id);
        Ok(())
    }

    /// Add a color to the palette.
    pub fn register_color(&mut self, color: ColorChoice) -> Result<()> {
        if self.color(&color.id).is_some() {
            return Err(LiveryError::DuplicateColor { color: color.id });
        }
        log::debug!("Registered color '{}' ({})", color.id, color.render_value);
        self.colors.push(color);
        Ok(())
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    /// Palette in registration order.
    pub fn colors(&self) -> &[ColorChoice] {
        &self.colors
    }

    pub fn color(&self, color_id: &str) -> Option<&ColorChoice> {
        self.colors.iter().find(|c| c.id == color_id)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The active view.
    pub fn current_view(&self) -> Result<&str> {
        self.views.current().ok_or(LiveryError::NoViews)
    }

    /// Views in cycle order.
    pub fn views(&self) -> &[ViewId] {
        self.views.views()
    }

    /// Switch the active view. Clears hover.
    pub fn set_view(&mut self, view_id: &str) -> Result<()> {
        self.views.set_view(view_id).inspect_err(|err| {
            log::error!("Cannot switch view: {}", err);
        })
    }

    pub fn next_view(&mut self) -> Option<&str> {
        self.views.next_view()
    }

    pub fn previous_view(&mut self) -> Option<&str> {
        self.views.previous_view()
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Record the display size of a view's artwork.
    pub fn set_viewport(&mut self, view_id: &str, geometry: ViewportGeometry) -> Result<()> {
        if !self.registry.contains(view_id) {
            return Err(LiveryError::unknown_view(view_id));
        }
        log::debug!(
            "📐 Viewport for '{}': {}x{}",
            view_id,
            geometry.width,
            geometry.height
        );
        self.viewports.insert(view_id.to_string(), geometry);
        Ok(())
    }

    /// Record the display size of the active view's artwork.
    pub fn resize(&mut self, geometry: ViewportGeometry) -> Result<()> {
        let view_id = self.current_view()?.to_string();
        self.set_viewport(&view_id, geometry)
    }

    /// Last recorded display size of a view. Zero-sized until laid out.
    pub fn viewport(&self, view_id: &str) -> ViewportGeometry {
        self.viewports.get(view_id).copied().unwrap_or_default()
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Update hover from a pointer position in the active view.
    ///
    /// Returns the hovered part. Before the viewport is laid out this fails
    /// with `GeometryNotReady` and leaves hover untouched.
    pub fn on_pointer_move(&mut self, display_point: Point) -> Result<Option<PartId>> {
        let hit = self.hit_in_current_view(display_point)?;
        if self.views.hover_mut().set(hit.clone()) {
            log::debug!("👆 Hover: {:?}", hit);
        }
        Ok(hit)
    }

    /// Resolve a click in the active view.
    ///
    /// The clicked part becomes the target of [`Self::paint_last_clicked`].
    /// Clicking never changes the selection by itself; background clicks
    /// return `Ok(None)` and keep the previous target.
    pub fn on_pointer_click(&mut self, display_point: Point) -> Result<Option<PartId>> {
        let hit = self.hit_in_current_view(display_point)?;
        if let Some(part_id) = &hit {
            log::debug!("🖱️ Clicked '{}'", part_id);
            self.last_clicked = Some(part_id.clone());
        }
        Ok(hit)
    }

    /// Pointer left the artwork.
    pub fn on_pointer_leave(&mut self) {
        self.views.hover_mut().clear();
    }

    pub fn hovered(&self) -> Option<&str> {
        self.views.hover().part()
    }

    pub fn last_clicked(&self) -> Option<&str> {
        self.last_clicked.as_deref()
    }

    fn hit_in_current_view(&self, display_point: Point) -> Result<Option<PartId>> {
        let view_id = self.current_view()?;
        let geometry = self.viewport(view_id);
        let part = HitResolver::new(&self.registry).resolve(view_id, display_point, geometry)?;
        Ok(part.map(|p| p.id.clone()))
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint a part. Returns the color it replaced.
    ///
    /// Always recorded; a part no view declares is kept but logged.
    pub fn apply_color(&mut self, part_id: &str, color: ColorChoice) -> Option<ColorChoice> {
        if !self.registry.knows_part(part_id) {
            log::warn!("Painting '{}', which no registered view declares", part_id);
        }
        self.selection.set(part_id, color)
    }

    /// Paint a part with a color from the palette.
    pub fn apply_color_by_id(
        &mut self,
        part_id: &str,
        color_id: &str,
    ) -> Result<Option<ColorChoice>> {
        let color = self
            .color(color_id)
            .cloned()
            .ok_or_else(|| LiveryError::unknown_color(color_id))?;
        Ok(self.apply_color(part_id, color))
    }

    /// Paint the part last resolved by a click. Returns false if nothing
    /// has been clicked yet.
    pub fn paint_last_clicked(&mut self, color_id: &str) -> Result<bool> {
        let Some(part_id) = self.last_clicked.clone() else {
            return Ok(false);
        };
        self.apply_color_by_id(&part_id, color_id)?;
        Ok(true)
    }

    /// Revert one part to unpainted.
    pub fn clear_part(&mut self, part_id: &str) -> Option<ColorChoice> {
        self.selection.clear(part_id)
    }

    /// Revert every part to unpainted.
    pub fn clear_all(&mut self) {
        self.selection.clear_all();
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// part id → color id for every painted part.
    pub fn export_selections(&self) -> BTreeMap<PartId, ColorId> {
        self.selection.export()
    }

    /// Re-apply an exported mapping. Colors missing from the palette are
    /// skipped. Returns how many parts were painted.
    pub fn restore_selections<K, V>(
        &mut self,
        selections: impl IntoIterator<Item = (K, V)>,
    ) -> usize
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut restored = 0;
        for (part_id, color_id) in selections {
            match self.apply_color_by_id(part_id.as_ref(), color_id.as_ref()) {
                Ok(_) => restored += 1,
                Err(err) => log::warn!("Skipping '{}': {}", part_id.as_ref(), err),
            }
        }
        log::info!("Restored {} painted parts", restored);
        restored
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Paint overlays for any view at the given display size.
    pub fn overlays_for(
        &self,
        view_id: &str,
        geometry: ViewportGeometry,
    ) -> Result<Vec<OverlayItem>> {
        self.compositor()
            .overlays_for(view_id, geometry, &self.selection)
            .inspect_err(|err| {
                if matches!(err, LiveryError::UnknownView { .. }) {
                    log::error!("Cannot build overlays: {}", err);
                }
            })
    }

    /// Everything to draw over the active view at its recorded size.
    pub fn frame(&self) -> Result<Overlay> {
        let view_id = self.current_view()?;
        self.compositor().compose(
            view_id,
            self.viewport(view_id),
            &self.selection,
            self.hovered(),
        )
    }

    /// Tooltip for the hovered part.
    pub fn hover_info(&self) -> Option<HoverInfo> {
        let part_id = self.hovered()?;
        let part_name = self.registry.part_name(part_id).unwrap_or(part_id);
        Some(HoverInfo {
            part_id: part_id.to_string(),
            part_name: part_name.to_string(),
            color_name: self.selection.get(part_id).map(|c| c.display_name.clone()),
        })
    }

    /// Summary of every painted part.
    pub fn paint_job(&self) -> PaintJob {
        PaintJob::from_selection(&self.registry, &self.selection).with_model_name(&self.model_name)
    }

    fn compositor(&self) -> OverlayCompositor<'_> {
        OverlayCompositor::new(&self.registry).with_style(self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PartDefinition, Rect, Size};

    fn configurator() -> Configurator {
        let mut c = Configurator::new();
        c.register_view(
            ViewDefinition::new("front", "Front", "front.png", Size::new(800.0, 600.0))
                .with_part(PartDefinition::rect(
                    "front-shield",
                    "Front Shield",
                    200.0,
                    200.0,
                    600.0,
                    450.0,
                ))
                .with_part(PartDefinition::rect("seat", "Seat", 300.0, 150.0, 500.0, 250.0)),
        )
        .unwrap();
        c.register_view(
            ViewDefinition::new("rear", "Rear", "rear.png", Size::new(800.0, 600.0))
                .with_part(PartDefinition::rect("seat", "Seat", 300.0, 100.0, 500.0, 200.0)),
        )
        .unwrap();
        c.register_color(ColorChoice::new("red", "Red", "#E31A1A"))
            .unwrap();
        c.register_color(ColorChoice::new("black", "Black", "#000000"))
            .unwrap();
        c
    }

    #[test]
    fn test_no_views() {
        let mut c = Configurator::new();
        assert_eq!(c.current_view(), Err(LiveryError::NoViews));
        assert_eq!(
            c.on_pointer_click(Point::new(1.0, 1.0)),
            Err(LiveryError::NoViews)
        );
        assert_eq!(c.next_view(), None);
    }

    #[test]
    fn test_click_resolves_without_painting() {
        let mut c = configurator();
        c.resize(ViewportGeometry::new(400.0, 300.0)).unwrap();

        let hit = c.on_pointer_click(Point::new(150.0, 150.0)).unwrap();
        assert_eq!(hit.as_deref(), Some("front-shield"));
        assert_eq!(c.last_clicked(), Some("front-shield"));
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_background_click_keeps_target() {
        let mut c = configurator();
        c.resize(ViewportGeometry::new(800.0, 600.0)).unwrap();
        c.on_pointer_click(Point::new(400.0, 200.0)).unwrap();

        assert_eq!(c.on_pointer_click(Point::new(5.0, 5.0)).unwrap(), None);
        assert_eq!(c.last_clicked(), Some("seat"));
    }

    #[test]
    fn test_paint_last_clicked() {
        let mut c = configurator();
        assert!(!c.paint_last_clicked("red").unwrap());

        c.resize(ViewportGeometry::new(800.0, 600.0)).unwrap();
        c.on_pointer_click(Point::new(400.0, 200.0)).unwrap();
        assert!(c.paint_last_clicked("red").unwrap());
        assert_eq!(
            c.export_selections().get("seat").map(String::as_str),
            Some("red")
        );
    }

    #[test]
    fn test_unknown_color() {
        let mut c = configurator();
        assert_eq!(
            c.apply_color_by_id("seat", "teal"),
            Err(LiveryError::unknown_color("teal"))
        );
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let mut c = configurator();
        assert_eq!(
            c.register_color(ColorChoice::new("red", "Other Red", "#FF0000")),
            Err(LiveryError::DuplicateColor {
                color: "red".to_string()
            })
        );
        assert_eq!(c.colors().len(), 2);
    }

    #[test]
    fn test_set_viewport_unknown_view() {
        let mut c = configurator();
        assert_eq!(
            c.set_viewport("top", ViewportGeometry::new(10.0, 10.0)),
            Err(LiveryError::unknown_view("top"))
        );
        assert_eq!(c.set_view("top"), Err(LiveryError::unknown_view("top")));
        assert_eq!(c.current_view(), Ok("front"));
    }

    #[test]
    fn test_hover_info() {
        let mut c = configurator();
        c.resize(ViewportGeometry::new(800.0, 600.0)).unwrap();
        assert_eq!(c.hover_info(), None);

        c.on_pointer_move(Point::new(400.0, 200.0)).unwrap();
        let info = c.hover_info().unwrap();
        assert_eq!(info.to_string(), "Seat: Click to paint");

        c.apply_color_by_id("seat", "black").unwrap();
        assert_eq!(c.hover_info().unwrap().to_string(), "Seat: Black");

        c.on_pointer_leave();
        assert_eq!(c.hover_info(), None);
    }

    #[test]
    fn test_frame_uses_active_view() {
        let mut c = configurator();
        c.apply_color_by_id("seat", "red").unwrap();
        c.set_view("rear").unwrap();
        c.resize(ViewportGeometry::new(400.0, 300.0)).unwrap();
        c.on_pointer_move(Point::new(200.0, 75.0)).unwrap();

        let frame = c.frame().unwrap();
        assert_eq!(frame.items.len(), 1);
        assert_eq!(frame.items[0].bounds, Rect::new(150.0, 50.0, 250.0, 100.0));
        assert_eq!(frame.hover.map(|h| h.part_id).as_deref(), Some("seat"));
    }

    #[test]
    fn test_restore_skips_unknown_colors() {
        let mut c = configurator();
        let saved = [("seat", "red"), ("front-shield", "teal")];
        assert_eq!(c.restore_selections(saved), 1);
        assert!(c.selection().is_painted("seat"));
        assert!(!c.selection().is_painted("front-shield"));
    }

    #[test]
    fn test_clear_part_and_all() {
        let mut c = configurator();
        c.apply_color_by_id("seat", "red").unwrap();
        c.apply_color_by_id("front-shield", "black").unwrap();

        assert_eq!(
            c.clear_part("seat").map(|col| col.id),
            Some("red".to_string())
        );
        assert_eq!(c.clear_part("seat"), None);
        c.clear_all();
        assert!(c.export_selections().is_empty());
    }

    #[test]
    fn test_paint_job_from_configurator() {
        let mut c = configurator();
        c.apply_color_by_id("seat", "red").unwrap();
        let job = c.paint_job();
        assert_eq!(job.total_parts(), 1);
        assert_eq!(job.lines[0].color_name, "Red");
        assert_eq!(job.model_name, "");
    }
}
