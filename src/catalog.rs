//! Reference data catalog: views with their part tables and the color palette.
//!
//! A catalog is loaded once at startup, either from a JSON document or from
//! the built-in scooter artwork tables below, and is immutable afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{STUDIO_REFERENCE_SIZE, VIEW_REFERENCE_SIZE};
use crate::model::{ColorCategory, ColorChoice, PartDefinition, Rect, Size, ViewDefinition};

/// Current catalog file format version.
/// Increment this when making breaking changes to the catalog format.
pub const CATALOG_VERSION: u32 = 1;

/// Errors that can occur when loading or saving a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// JSON parsing error
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Catalog version is newer than supported
    #[error("Catalog version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A region in image-map notation could not be parsed
    #[error("Invalid coords '{coords}' for part '{part}'")]
    InvalidCoords { part: String, coords: String },
}

/// Views and colors for one vehicle model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Version of the catalog file format
    pub version: u32,
    /// Model name shown on the paint job
    #[serde(default)]
    pub model_name: String,
    /// Views in cycle order
    pub views: Vec<ViewDefinition>,
    /// Palette in display order
    pub colors: Vec<ColorChoice>,
}

impl Catalog {
    /// Serialize the catalog to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;

        if catalog.version > CATALOG_VERSION {
            return Err(CatalogError::VersionTooNew {
                file_version: catalog.version,
                supported_version: CATALOG_VERSION,
            });
        }

        Ok(catalog)
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::info!(
            "Loaded catalog '{}' from {:?} ({} views, {} colors)",
            catalog.model_name,
            path,
            catalog.views.len(),
            catalog.colors.len()
        );
        Ok(catalog)
    }

    /// Save the catalog to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        log::info!("Saved catalog to {:?}", path);
        Ok(())
    }

    /// The built-in scooter catalog: four photo views, the single-image
    /// studio layout and the default palette.
    pub fn builtin() -> Self {
        let mut views = photo_views();
        views.push(studio_view());
        Self {
            version: CATALOG_VERSION,
            model_name: "Primavera 150".to_string(),
            views,
            colors: default_colors(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Build a rectangular part from image-map `"x1,y1,x2,y2"` coords.
pub fn part_from_coords(
    id: &str,
    display_name: &str,
    coords: &str,
) -> Result<PartDefinition, CatalogError> {
    let rect = Rect::parse_coords(coords).ok_or_else(|| CatalogError::InvalidCoords {
        part: id.to_string(),
        coords: coords.to_string(),
    })?;
    Ok(PartDefinition::rect(id, display_name, rect.x1, rect.y1, rect.x2, rect.y2))
}

/// Parts from `(id, name, "x1,y1,x2,y2")` rows in authored order. Rows with
/// malformed coords are logged and left out.
fn parts_from_table(table: &[(&str, &str, &str)]) -> Vec<PartDefinition> {
    table
        .iter()
        .filter_map(|&(id, name, coords)| {
            part_from_coords(id, name, coords)
                .inspect_err(|e| log::error!("Built-in catalog: {}", e))
                .ok()
        })
        .collect()
}

/// Front, left, right and rear photo views on an 800×600 reference box.
///
/// Some regions extend below the reference box; they are kept as authored.
pub fn photo_views() -> Vec<ViewDefinition> {
    let front = [
        ("front-shield", "Front Shield", "200,200,600,450"),
        ("main-body", "Main Body", "250,450,550,700"),
        ("seat", "Seat", "300,150,500,250"),
        ("front-fender", "Front Fender", "350,700,450,800"),
        ("side-panel-left", "Left Side Panel", "150,350,300,600"),
        ("side-panel-right", "Right Side Panel", "500,350,650,600"),
    ];
    let left = [
        ("main-body", "Main Body", "200,250,700,500"),
        ("front-shield", "Front Shield", "100,200,250,400"),
        ("seat", "Seat", "300,150,600,250"),
        ("side-panel-left", "Left Side Panel", "150,300,350,550"),
        ("front-fender", "Front Fender", "100,550,250,650"),
        ("rear-fender", "Rear Fender", "650,550,800,650"),
        ("engine-cover", "Engine Cover", "400,450,600,600"),
    ];
    let right = [
        ("main-body", "Main Body", "100,250,600,500"),
        ("front-shield", "Front Shield", "550,200,700,400"),
        ("seat", "Seat", "200,150,500,250"),
        ("side-panel-right", "Right Side Panel", "450,300,650,550"),
        ("front-fender", "Front Fender", "550,550,700,650"),
        ("rear-fender", "Rear Fender", "0,550,150,650"),
        ("engine-cover", "Engine Cover", "200,450,400,600"),
    ];
    let rear = [
        ("main-body", "Main Body", "250,300,550,600"),
        ("seat", "Seat", "300,100,500,200"),
        ("side-panel-left", "Left Side Panel", "100,300,300,650"),
        ("side-panel-right", "Right Side Panel", "500,300,700,650"),
        ("rear-fender", "Rear Fender", "300,650,500,750"),
        ("engine-cover", "Engine Cover", "350,600,450,700"),
    ];

    let size = Size::new(VIEW_REFERENCE_SIZE.0, VIEW_REFERENCE_SIZE.1);
    [
        ("front", "Front view", &front[..]),
        ("left", "Left view", &left[..]),
        ("right", "Right view", &right[..]),
        ("rear", "Rear view", &rear[..]),
    ]
    .into_iter()
    .map(|(id, name, parts)| {
        let image = format!("assets/photos/scooter-{}.png", id);
        ViewDefinition::new(id, name, image, size).with_parts(parts_from_table(parts))
    })
    .collect()
}

/// The single-photo studio layout: absolute pixel boxes on a 400×300 image.
pub fn studio_view() -> ViewDefinition {
    let parts = [
        ("front-shield", "Front Shield", "120,80,180,120"),
        ("side-panel-left", "Left Side Panel", "80,120,130,210"),
        ("side-panel-right", "Right Side Panel", "220,120,270,210"),
        ("rear-shield", "Rear Shield", "150,180,190,210"),
        ("engine-cover", "Engine Cover", "125,150,175,200"),
        ("seat", "Seat", "120,110,180,140"),
        ("front-fender", "Front Fender", "130,45,170,65"),
        ("rear-fender", "Rear Fender", "130,230,170,245"),
        ("luggage-box", "Luggage Box", "170,195,195,215"),
        ("handlebar", "Handlebar", "100,50,200,58"),
        ("headlight", "Headlight", "138,58,162,82"),
        ("mirror-left", "Left Mirror", "100,40,110,50"),
        ("mirror-right", "Right Mirror", "190,40,200,50"),
    ];
    let size = Size::new(STUDIO_REFERENCE_SIZE.0, STUDIO_REFERENCE_SIZE.1);
    let image = "assets/images/scooter-studio.jpg";
    ViewDefinition::new("studio", "Studio", image, size).with_parts(parts_from_table(&parts))
}

/// Default palette, grouped by category.
pub fn default_colors() -> Vec<ColorChoice> {
    use ColorCategory::{Basic, Brand, Metallic, Pastel};

    let table: [(&str, &str, &str, ColorCategory); 32] = [
        ("red", "Red", "#FF0000", Basic),
        ("green", "Green", "#00FF00", Basic),
        ("blue", "Blue", "#0000FF", Basic),
        ("yellow", "Yellow", "#FFFF00", Basic),
        ("orange", "Orange", "#FF6600", Basic),
        ("purple", "Purple", "#800080", Basic),
        ("pink", "Pink", "#FFC0CB", Basic),
        ("black", "Black", "#000000", Basic),
        ("classic-red", "Classic Red", "#B22222", Brand),
        ("classic-green", "Classic Green", "#228B22", Brand),
        ("classic-blue", "Classic Blue", "#4169E1", Brand),
        ("classic-yellow", "Classic Yellow", "#FFD700", Brand),
        ("racing-red", "Racing Red", "#DC143C", Brand),
        ("dark-gray", "Dark Gray", "#2F4F4F", Brand),
        ("light-gray", "Light Gray", "#708090", Brand),
        ("pearl-white", "Pearl White", "#FFFFFF", Brand),
        ("silver", "Silver", "#C0C0C0", Metallic),
        ("bronze", "Bronze", "#CD7F32", Metallic),
        ("copper", "Copper", "#B87333", Metallic),
        ("metallic-gray", "Metallic Gray", "#36454F", Metallic),
        ("metallic-purple", "Metallic Purple", "#4B0082", Metallic),
        ("metallic-brown", "Metallic Brown", "#8B4513", Metallic),
        ("metallic-black", "Metallic Black", "#2F4F4F", Metallic),
        ("metallic-gold", "Metallic Gold", "#DAA520", Metallic),
        ("light-pink", "Light Pink", "#FFB6C1", Pastel),
        ("light-green", "Light Green", "#98FB98", Pastel),
        ("light-blue", "Light Blue", "#87CEEB", Pastel),
        ("light-yellow", "Light Yellow", "#F0E68C", Pastel),
        ("light-purple", "Light Purple", "#DDA0DD", Pastel),
        ("cream", "Cream", "#F5DEB3", Pastel),
        ("lavender", "Lavender", "#E6E6FA", Pastel),
        ("beige", "Beige", "#FFF8DC", Pastel),
    ];

    table
        .into_iter()
        .map(|(id, name, hex, category)| ColorChoice::new(id, name, hex).with_category(category))
        .collect()
}
