//! View (camera angle) definitions.

use serde::{Deserialize, Serialize};

use super::geometry::Size;
use super::part::PartDefinition;

/// Identifier of a view, e.g. `"front"` or `"rear"`.
pub type ViewId = String;

/// One fixed perspective of the vehicle with its own region table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDefinition {
    /// Unique identifier for the view
    pub id: ViewId,
    /// Label for view selectors
    #[serde(default)]
    pub display_name: String,
    /// Opaque handle to the background artwork (a path or URL for the host)
    pub base_image_ref: String,
    /// Size the part bounds were authored against. Never changes at runtime.
    pub reference_size: Size,
    /// Parts in authored order. Later entries sit on top of earlier ones.
    pub parts: Vec<PartDefinition>,
}

impl ViewDefinition {
    /// Create a view with no parts.
    pub fn new(
        id: impl Into<ViewId>,
        display_name: impl Into<String>,
        base_image_ref: impl Into<String>,
        reference_size: Size,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            base_image_ref: base_image_ref.into(),
            reference_size,
            parts: Vec::new(),
        }
    }

    /// Append a part on top of the existing ones.
    pub fn with_part(mut self, part: PartDefinition) -> Self {
        self.parts.push(part);
        self
    }

    /// Append several parts in order.
    pub fn with_parts(mut self, parts: impl IntoIterator<Item = PartDefinition>) -> Self {
        self.parts.extend(parts);
        self
    }

    /// Find a part by id.
    pub fn part(&self, part_id: &str) -> Option<&PartDefinition> {
        self.parts.iter().find(|p| p.id == part_id)
    }
}
