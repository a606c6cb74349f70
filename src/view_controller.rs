//! Active view tracking and cyclic view traversal.
//!
//! The controller also owns the hover state, since a hovered part only means
//! something in the view it was hovered in. Every view change clears it.

use crate::error::{LiveryError, Result};
use crate::model::{PartId, ViewId};

/// At most one hovered part in the active view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    part: Option<PartId>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hovered part. Returns true if it changed.
    pub fn set(&mut self, part: Option<PartId>) -> bool {
        if self.part != part {
            self.part = part;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    pub fn part(&self) -> Option<&str> {
        self.part.as_deref()
    }
}

/// Which view is displayed, over a fixed cyclic order of views.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    order: Vec<ViewId>,
    current: usize,
    hover: HoverState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a controller over the given order. The first view is active.
    pub fn with_views(views: impl IntoIterator<Item = impl Into<ViewId>>) -> Self {
        Self {
            order: views.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Append a view at the end of the cycle.
    pub fn push_view(&mut self, view_id: impl Into<ViewId>) {
        self.order.push(view_id.into());
    }

    /// The active view, or None before any view is registered.
    pub fn current(&self) -> Option<&str> {
        self.order.get(self.current).map(String::as_str)
    }

    /// Views in cycle order.
    pub fn views(&self) -> &[ViewId] {
        &self.order
    }

    /// Switch to a registered view.
    pub fn set_view(&mut self, view_id: &str) -> Result<()> {
        let index = self
            .order
            .iter()
            .position(|v| v == view_id)
            .ok_or_else(|| LiveryError::unknown_view(view_id))?;
        self.switch_to(index);
        Ok(())
    }

    /// Advance to the next view, wrapping from last to first.
    pub fn next_view(&mut self) -> Option<&str> {
        if self.order.is_empty() {
            return None;
        }
        self.switch_to((self.current + 1) % self.order.len());
        self.current()
    }

    /// Go back to the previous view, wrapping from first to last.
    pub fn previous_view(&mut self) -> Option<&str> {
        if self.order.is_empty() {
            return None;
        }
        let len = self.order.len();
        self.switch_to((self.current + len - 1) % len);
        self.current()
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn hover_mut(&mut self) -> &mut HoverState {
        &mut self.hover
    }

    fn switch_to(&mut self, index: usize) {
        self.current = index;
        self.hover.clear();
        log::debug!("🔄 Switched to view: {}", self.order[index]);
    }
}
