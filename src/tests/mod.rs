//! End-to-end tests for the configurator.
//!
//! These drive the engine the way a host does: register reference data,
//! feed pointer events in display space and inspect the overlays.

mod consistency_tests;
mod scenario_tests;

use crate::configurator::Configurator;
use crate::model::{ColorChoice, PartDefinition, Size, ViewDefinition};

/// Relative float comparison for mapped coordinates.
pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.001;
    (a - b).abs() < EPSILON * a.abs().max(1.0)
}

/// Front and rear views sharing a seat, plus a two-color palette.
pub(crate) fn two_view_configurator() -> Configurator {
    let mut configurator = Configurator::new();
    configurator
        .register_view(
            ViewDefinition::new("front", "Front view", "front.png", Size::new(800.0, 600.0))
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
    configurator
        .register_view(
            ViewDefinition::new("rear", "Rear view", "rear.png", Size::new(800.0, 600.0))
                .with_part(PartDefinition::rect(
                    "main-body",
                    "Main Body",
                    250.0,
                    300.0,
                    550.0,
                    600.0,
                ))
                .with_part(PartDefinition::rect("seat", "Seat", 300.0, 100.0, 500.0, 200.0)),
        )
        .unwrap();
    configurator
        .register_color(ColorChoice::new("red", "Red", "#E31A1A"))
        .unwrap();
    configurator
        .register_color(ColorChoice::new("blue", "Blue", "#1A4FE3"))
        .unwrap();
    configurator
}
