//! Region registry: the immutable per-view table of paintable parts.
//!
//! Views are registered once at startup. Lookups never mutate and never
//! paper over a bad view id with an empty list.

use std::collections::{HashMap, HashSet};

use crate::error::{LiveryError, Result};
use crate::model::{PartDefinition, ViewDefinition, ViewId};

/// Per-view part tables, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    views: Vec<ViewDefinition>,
    index: HashMap<ViewId, usize>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view after validating its reference size and parts.
    pub fn register(&mut self, view: ViewDefinition) -> Result<()> {
        if self.index.contains_key(&view.id) {
            return Err(LiveryError::DuplicateView { view: view.id });
        }
        if view.reference_size.is_degenerate() {
            return Err(LiveryError::InvalidReferenceSize {
                view: view.id.clone(),
                width: view.reference_size.width,
                height: view.reference_size.height,
            });
        }

        let mut seen = HashSet::new();
        for part in &view.parts {
            if !seen.insert(part.id.as_str()) {
                return Err(LiveryError::DuplicatePart {
                    view: view.id.clone(),
                    part: part.id.clone(),
                });
            }
            if !part.shape.is_valid() {
                log::warn!(
                    "Rejecting {} part '{}' in view '{}': degenerate geometry",
                    part.shape.kind(),
                    part.id,
                    view.id
                );
                return Err(LiveryError::InvalidBounds {
                    view: view.id.clone(),
                    part: part.id.clone(),
                });
            }
        }

        log::debug!(
            "Registered view '{}' ({}x{}, {} parts)",
            view.id,
            view.reference_size.width,
            view.reference_size.height,
            view.parts.len()
        );
        self.index.insert(view.id.clone(), self.views.len());
        self.views.push(view);
        Ok(())
    }

    /// Get a registered view.
    pub fn view(&self, view_id: &str) -> Result<&ViewDefinition> {
        self.index
            .get(view_id)
            .map(|&i| &self.views[i])
            .ok_or_else(|| LiveryError::unknown_view(view_id))
    }

    /// Parts of a view in authored (painter's) order.
    pub fn parts_for(&self, view_id: &str) -> Result<&[PartDefinition]> {
        self.view(view_id).map(|v| v.parts.as_slice())
    }

    /// Find a part within a view.
    pub fn resolve(&self, view_id: &str, part_id: &str) -> Result<&PartDefinition> {
        self.view(view_id)?
            .part(part_id)
            .ok_or_else(|| LiveryError::unknown_part(view_id, part_id))
    }

    /// Whether a view id is registered.
    pub fn contains(&self, view_id: &str) -> bool {
        self.index.contains_key(view_id)
    }

    /// View ids in registration order.
    pub fn view_ids(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|v| v.id.as_str())
    }

    /// All views in registration order.
    pub fn views(&self) -> &[ViewDefinition] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Display name of a part, taken from the first view that declares it.
    pub fn part_name(&self, part_id: &str) -> Option<&str> {
        self.views
            .iter()
            .find_map(|v| v.part(part_id))
            .map(|p| p.display_name.as_str())
    }

    /// Whether any view declares the part.
    pub fn knows_part(&self, part_id: &str) -> bool {
        self.views.iter().any(|v| v.part(part_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PartDefinition, Size};

    fn front() -> ViewDefinition {
        ViewDefinition::new("front", "Front", "front.png", Size::new(800.0, 600.0))
            .with_part(PartDefinition::rect(
                "front-shield",
                "Front Shield",
                200.0,
                200.0,
                600.0,
                450.0,
            ))
            .with_part(PartDefinition::rect("seat", "Seat", 300.0, 150.0, 500.0, 250.0))
    }

    #[test]
    fn test_parts_in_authored_order() {
        let mut registry = RegionRegistry::new();
        registry.register(front()).unwrap();

        let ids: Vec<_> = registry
            .parts_for("front")
            .unwrap()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["front-shield", "seat"]);
    }

    #[test]
    fn test_unknown_view_is_an_error() {
        let mut registry = RegionRegistry::new();
        registry.register(front()).unwrap();

        assert_eq!(
            registry.parts_for("fornt").unwrap_err(),
            LiveryError::unknown_view("fornt")
        );
    }

    #[test]
    fn test_resolve_unknown_part() {
        let mut registry = RegionRegistry::new();
        registry.register(front()).unwrap();

        assert_eq!(
            registry.resolve("front", "seat").unwrap().display_name,
            "Seat"
        );
        assert_eq!(
            registry.resolve("front", "rear-fender").unwrap_err(),
            LiveryError::unknown_part("front", "rear-fender")
        );
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut registry = RegionRegistry::new();
        let view = front().with_part(PartDefinition::rect("seat", "Seat", 0.0, 0.0, 1.0, 1.0));
        assert!(matches!(
            registry.register(view),
            Err(LiveryError::DuplicatePart { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_view_rejected() {
        let mut registry = RegionRegistry::new();
        registry.register(front()).unwrap();
        assert!(matches!(
            registry.register(front()),
            Err(LiveryError::DuplicateView { .. })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let mut registry = RegionRegistry::new();
        let view = ViewDefinition::new("left", "Left", "left.png", Size::new(800.0, 600.0))
            .with_part(PartDefinition::rect("seat", "Seat", 500.0, 150.0, 300.0, 250.0));
        assert!(matches!(
            registry.register(view),
            Err(LiveryError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_zero_reference_size_rejected() {
        let mut registry = RegionRegistry::new();
        let view = ViewDefinition::new("rear", "Rear", "rear.png", Size::new(0.0, 600.0));
        assert!(matches!(
            registry.register(view),
            Err(LiveryError::InvalidReferenceSize { .. })
        ));
    }

    #[test]
    fn test_part_name_lookup() {
        let mut registry = RegionRegistry::new();
        registry.register(front()).unwrap();
        assert_eq!(registry.part_name("seat"), Some("Seat"));
        assert_eq!(registry.part_name("handlebar"), None);
        assert!(registry.knows_part("front-shield"));
    }
}
