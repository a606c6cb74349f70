//! Color catalog entries.

use serde::{Deserialize, Serialize};

use crate::color_utils::parse_hex_rgb;

/// Identifier of a color choice.
pub type ColorId = String;

/// Palette grouping used by color pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    /// Plain primary and secondary colors
    Basic,
    /// Factory scooter colors
    Brand,
    /// Metallic finishes
    Metallic,
    /// Pastel tones
    Pastel,
}

impl ColorCategory {
    /// Get the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            ColorCategory::Basic => "Basic",
            ColorCategory::Brand => "Brand",
            ColorCategory::Metallic => "Metallic",
            ColorCategory::Pastel => "Pastel",
        }
    }

    /// Get all categories in palette order.
    pub fn all() -> &'static [ColorCategory] {
        &[
            ColorCategory::Basic,
            ColorCategory::Brand,
            ColorCategory::Metallic,
            ColorCategory::Pastel,
        ]
    }
}

/// A selectable paint color. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChoice {
    /// Unique identifier
    pub id: ColorId,
    /// Name shown to the user
    pub display_name: String,
    /// Value handed to the renderer, usually a `#RRGGBB` token
    pub render_value: String,
    /// Optional palette grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ColorCategory>,
}

impl ColorChoice {
    pub fn new(
        id: impl Into<ColorId>,
        display_name: impl Into<String>,
        render_value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            render_value: render_value.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: ColorCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// RGB components of the render value, if it is a hex token.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        parse_hex_rgb(&self.render_value)
    }
}
