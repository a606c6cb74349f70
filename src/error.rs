//! Error types for the configurator engine.

use thiserror::Error;

/// Errors raised by the registry, mapper, view controller and configurator.
///
/// `GeometryNotReady` is transient: callers retry on the next frame once the
/// artwork has been laid out. `UnknownView` points at an authoring or wiring
/// bug. A pointer that misses every part is not an error at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiveryError {
    /// View identifier is not among the registered views
    #[error("Unknown view: {view}")]
    UnknownView {
        /// The requested view id
        view: String,
    },

    /// Pointer or view command arrived before any view was registered
    #[error("No views registered")]
    NoViews,

    /// Viewport has zero width or height (not laid out yet)
    #[error("Viewport geometry for view '{view}' is not ready")]
    GeometryNotReady {
        /// The view whose geometry is missing
        view: String,
    },

    /// Part identifier is not declared in the view
    #[error("Unknown part '{part}' in view '{view}'")]
    UnknownPart {
        /// The view that was searched
        view: String,
        /// The requested part id
        part: String,
    },

    /// Color identifier is not in the registered palette
    #[error("Unknown color: {color}")]
    UnknownColor {
        /// The requested color id
        color: String,
    },

    /// A view with the same id is already registered
    #[error("View '{view}' is already registered")]
    DuplicateView {
        /// The duplicated view id
        view: String,
    },

    /// A part id appears twice within one view
    #[error("Part '{part}' is declared twice in view '{view}'")]
    DuplicatePart {
        /// The view being registered
        view: String,
        /// The duplicated part id
        part: String,
    },

    /// A color with the same id is already registered
    #[error("Color '{color}' is already registered")]
    DuplicateColor {
        /// The duplicated color id
        color: String,
    },

    /// Part geometry is empty, inverted or not finite
    #[error("Invalid bounds for part '{part}' in view '{view}'")]
    InvalidBounds {
        /// The view being registered
        view: String,
        /// The offending part id
        part: String,
    },

    /// Reference size has a zero or negative dimension
    #[error("Invalid reference size {width}x{height} for view '{view}'")]
    InvalidReferenceSize {
        /// The view being registered
        view: String,
        /// Authored width
        width: f32,
        /// Authored height
        height: f32,
    },
}

impl LiveryError {
    /// Create an unknown view error.
    pub fn unknown_view(view: impl Into<String>) -> Self {
        Self::UnknownView { view: view.into() }
    }

    /// Create a geometry-not-ready error.
    pub fn geometry_not_ready(view: impl Into<String>) -> Self {
        Self::GeometryNotReady { view: view.into() }
    }

    /// Create an unknown part error.
    pub fn unknown_part(view: impl Into<String>, part: impl Into<String>) -> Self {
        Self::UnknownPart {
            view: view.into(),
            part: part.into(),
        }
    }

    /// Create an unknown color error.
    pub fn unknown_color(color: impl Into<String>) -> Self {
        Self::UnknownColor {
            color: color.into(),
        }
    }

    /// Whether the caller should simply retry on the next frame.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::GeometryNotReady { .. })
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, LiveryError>;
