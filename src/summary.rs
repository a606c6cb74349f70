//! Paint job summary: the printable list of painted parts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{ColorId, PartId};
use crate::registry::RegionRegistry;
use crate::selection::SelectionState;

/// One row of the paint job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintJobLine {
    pub part_id: PartId,
    pub part_name: String,
    pub color_id: ColorId,
    pub color_name: String,
    pub render_value: String,
}

/// Painted parts with their colors, in the order parts first appear in
/// the registered views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintJob {
    /// Vehicle model the job is for, empty when the catalog names none
    #[serde(default)]
    pub model_name: String,
    pub lines: Vec<PaintJobLine>,
}

impl PaintJob {
    /// Build the job from the current selection.
    ///
    /// Parts no registered view declares are listed last, sorted by id,
    /// under their raw id.
    pub fn from_selection(registry: &RegionRegistry, selection: &SelectionState) -> Self {
        let mut ordered: Vec<&str> = Vec::new();
        for view in registry.views() {
            for part in &view.parts {
                if selection.is_painted(&part.id) && !ordered.contains(&part.id.as_str()) {
                    ordered.push(&part.id);
                }
            }
        }

        let mut orphans: Vec<&str> = selection
            .iter()
            .map(|e| e.part_id.as_str())
            .filter(|id| !registry.knows_part(id))
            .collect();
        orphans.sort_unstable();
        ordered.extend(orphans);

        let lines = ordered
            .into_iter()
            .filter_map(|part_id| {
                let color = selection.get(part_id)?;
                Some(PaintJobLine {
                    part_id: part_id.to_string(),
                    part_name: registry.part_name(part_id).unwrap_or(part_id).to_string(),
                    color_id: color.id.clone(),
                    color_name: color.display_name.clone(),
                    render_value: color.render_value.clone(),
                })
            })
            .collect();

        Self {
            model_name: String::new(),
            lines,
        }
    }

    /// Head the job with the vehicle model it is for.
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Number of painted parts.
    pub fn total_parts(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Serialize the job to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PaintJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .lines
            .iter()
            .map(|l| l.part_name.chars().count())
            .chain(std::iter::once("Part".len()))
            .max()
            .unwrap_or(4);
        let color_width = self
            .lines
            .iter()
            .map(|l| l.color_name.chars().count())
            .chain(std::iter::once("Color".len()))
            .max()
            .unwrap_or(5);

        writeln!(f, "PAINT JOB")?;
        if !self.model_name.is_empty() {
            writeln!(f, "Model: {}", self.model_name)?;
        }
        writeln!(
            f,
            "{:<name_width$}  {:<color_width$}  Code",
            "Part", "Color"
        )?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<name_width$}  {:<color_width$}  {}",
                line.part_name, line.color_name, line.render_value
            )?;
        }
        write!(f, "Total parts: {}", self.total_parts())
    }
}
