//! Selection state: which color each part is painted with.
//!
//! Keyed by part id only, never by view. Painting "seat" while the front view
//! is active paints it in every view that declares a "seat". A part missing
//! from the map is unpainted.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::{ColorChoice, ColorId, PartId};

/// One painted part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub part_id: PartId,
    pub color: ColorChoice,
}

/// Mapping part id → chosen color.
///
/// Iteration order is unspecified. Nothing downstream depends on it: the
/// compositor walks the region registry and only looks entries up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    entries: HashMap<PartId, SelectionEntry>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint a part, replacing any previous color.
    ///
    /// Returns the color that was replaced, if any.
    pub fn set(&mut self, part_id: impl Into<PartId>, color: ColorChoice) -> Option<ColorChoice> {
        let part_id = part_id.into();
        log::debug!("🎨 Paint '{}' with '{}'", part_id, color.id);
        self.entries
            .insert(part_id.clone(), SelectionEntry { part_id, color })
            .map(|old| old.color)
    }

    /// Revert a part to unpainted. Returns the removed color.
    pub fn clear(&mut self, part_id: &str) -> Option<ColorChoice> {
        let removed = self.entries.remove(part_id).map(|e| e.color);
        if removed.is_some() {
            log::debug!("🧽 Cleared '{}'", part_id);
        }
        removed
    }

    /// Remove every entry.
    pub fn clear_all(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("🗑️ Cleared {} painted parts", self.entries.len());
        }
        self.entries.clear();
    }

    pub fn get(&self, part_id: &str) -> Option<&ColorChoice> {
        self.entries.get(part_id).map(|e| &e.color)
    }

    pub fn is_painted(&self, part_id: &str) -> bool {
        self.entries.contains_key(part_id)
    }

    /// Owned copy of the current mapping.
    pub fn snapshot(&self) -> HashMap<PartId, ColorChoice> {
        self.entries
            .iter()
            .map(|(id, e)| (id.clone(), e.color.clone()))
            .collect()
    }

    /// Part id → color id, sorted so the output is stable for persistence.
    pub fn export(&self) -> BTreeMap<PartId, ColorId> {
        self.entries
            .iter()
            .map(|(id, e)| (id.clone(), e.color.id.clone()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ColorChoice {
        ColorChoice::new("red", "Red", "#E31A1A")
    }

    fn blue() -> ColorChoice {
        ColorChoice::new("blue", "Blue", "#0000FF")
    }

    #[test]
    fn test_starts_empty() {
        let state = SelectionState::new();
        assert!(state.is_empty());
        assert_eq!(state.get("seat"), None);
        assert!(state.export().is_empty());
    }

    #[test]
    fn test_repaint_overwrites() {
        let mut state = SelectionState::new();
        assert_eq!(state.set("seat", red()), None);
        assert_eq!(state.set("seat", blue()), Some(red()));
        assert_eq!(state.get("seat"), Some(&blue()));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_same_color_twice_is_idempotent() {
        let mut once = SelectionState::new();
        once.set("seat", red());

        let mut twice = SelectionState::new();
        twice.set("seat", red());
        twice.set("seat", red());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_reverts_to_unpainted() {
        let mut state = SelectionState::new();
        state.set("seat", red());
        state.set("main-body", blue());

        assert_eq!(state.clear("seat"), Some(red()));
        assert!(!state.is_painted("seat"));
        assert_eq!(state.clear("seat"), None);
        assert_eq!(state.len(), 1);

        state.clear_all();
        assert!(state.is_empty());
    }

    #[test]
    fn test_export_maps_to_color_ids() {
        let mut state = SelectionState::new();
        state.set("seat", red());
        state.set("main-body", blue());

        let exported = state.export();
        let pairs: Vec<_> = exported
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("main-body", "blue"), ("seat", "red")]);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.get("seat"), Some(&red()));
    }
}
