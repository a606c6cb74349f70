//! Click-to-overlay scenarios on the front view.

use super::two_view_configurator;
use crate::error::LiveryError;
use crate::mapper::ViewportGeometry;
use crate::model::{Point, Rect};

#[test]
fn test_click_paint_and_overlay() {
    let mut configurator = two_view_configurator();
    let g = ViewportGeometry::new(400.0, 300.0);
    configurator.set_viewport("front", g).unwrap();

    // (150, 150) on screen is (300, 300) in reference space
    let hit = configurator
        .on_pointer_click(Point::new(150.0, 150.0))
        .unwrap();
    assert_eq!(hit.as_deref(), Some("front-shield"));

    assert!(configurator.paint_last_clicked("red").unwrap());

    let overlays = configurator.overlays_for("front", g).unwrap();
    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0].part_id, "front-shield");
    assert_eq!(overlays[0].color, "#E31A1A");
    assert_eq!(overlays[0].bounds, Rect::new(100.0, 100.0, 300.0, 225.0));
}

#[test]
fn test_click_before_layout_changes_nothing() {
    let mut configurator = two_view_configurator();

    let result = configurator.on_pointer_click(Point::new(150.0, 150.0));
    assert_eq!(result, Err(LiveryError::geometry_not_ready("front")));
    assert!(result.unwrap_err().is_transient());
    assert_eq!(configurator.last_clicked(), None);

    let result = configurator.on_pointer_move(Point::new(150.0, 150.0));
    assert_eq!(result, Err(LiveryError::geometry_not_ready("front")));
    assert_eq!(configurator.hovered(), None);
    assert!(configurator.selection().is_empty());

    // Once laid out, the same click resolves
    configurator
        .resize(ViewportGeometry::new(400.0, 300.0))
        .unwrap();
    let hit = configurator.on_pointer_click(Point::new(150.0, 150.0));
    assert!(matches!(hit, Ok(Some(_))));
}

#[test]
fn test_unpainted_by_default() {
    let configurator = two_view_configurator();
    let g = ViewportGeometry::new(800.0, 600.0);
    for view_id in configurator.views() {
        assert!(configurator.overlays_for(view_id, g).unwrap().is_empty());
    }
    assert!(configurator.export_selections().is_empty());
    assert!(configurator.paint_job().is_empty());
}

#[test]
fn test_overlays_for_unknown_view() {
    let configurator = two_view_configurator();
    assert_eq!(
        configurator.overlays_for("top", ViewportGeometry::new(800.0, 600.0)),
        Err(LiveryError::unknown_view("top"))
    );
}

#[test]
fn test_resize_rescales_without_touching_selection() {
    let mut configurator = two_view_configurator();
    configurator.apply_color_by_id("seat", "red").unwrap();
    let before = configurator.export_selections();

    configurator
        .resize(ViewportGeometry::new(1600.0, 1200.0))
        .unwrap();
    let overlay = configurator.frame().unwrap();
    assert_eq!(
        overlay.items[0].bounds,
        Rect::new(600.0, 300.0, 1000.0, 500.0)
    );

    configurator
        .resize(ViewportGeometry::new(400.0, 300.0))
        .unwrap();
    let overlay = configurator.frame().unwrap();
    assert_eq!(
        overlay.items[0].bounds,
        Rect::new(150.0, 75.0, 250.0, 125.0)
    );

    assert_eq!(configurator.export_selections(), before);
}
