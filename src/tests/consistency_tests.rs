//! Properties that must hold for every view of the built-in catalog.

use super::approx_eq;
use crate::catalog::Catalog;
use crate::configurator::Configurator;
use crate::hit::HitResolver;
use crate::mapper::{CoordinateMapper, ViewportGeometry};
use crate::model::{ColorChoice, Point};
use crate::overlay::Overlay;

const GEOMETRIES: [(f32, f32); 5] = [
    (800.0, 600.0),
    (400.0, 300.0),
    (1024.0, 768.0),
    (333.0, 250.0),
    (1280.0, 400.0),
];

fn painted_builtin() -> Configurator {
    let mut configurator = Configurator::from_catalog(Catalog::builtin()).unwrap();
    let part_ids: Vec<String> = configurator
        .registry()
        .views()
        .iter()
        .flat_map(|v| v.parts.iter().map(|p| p.id.clone()))
        .collect();
    for part_id in part_ids {
        configurator.apply_color(&part_id, ColorChoice::new("red", "Red", "#E31A1A"));
    }
    configurator
}

#[test]
fn test_round_trip_mapping() {
    let configurator = painted_builtin();
    let mapper = CoordinateMapper::new(configurator.registry());

    for view_id in configurator.views() {
        for (width, height) in GEOMETRIES {
            let g = ViewportGeometry::new(width, height);
            for p in [
                Point::new(0.0, 0.0),
                Point::new(123.4, 56.7),
                Point::new(799.0, 599.0),
            ] {
                let display = mapper.to_display(view_id, p, g).unwrap();
                let back = mapper.to_reference(view_id, display, g).unwrap();
                assert!(
                    approx_eq(back.x, p.x) && approx_eq(back.y, p.y),
                    "{view_id} at {width}x{height}: {p:?} -> {back:?}"
                );
            }
        }
    }
}

#[test]
fn test_hit_matches_topmost_overlay() {
    let configurator = painted_builtin();
    let resolver = HitResolver::new(configurator.registry());

    for view_id in configurator.views() {
        for (width, height) in [(800.0, 600.0), (400.0, 300.0)] {
            let g = ViewportGeometry::new(width, height);
            let overlay = Overlay {
                items: configurator.overlays_for(view_id, g).unwrap(),
                ..Overlay::default()
            };

            let mut y = 3.3;
            while y < height {
                let mut x = 3.3;
                while x < width {
                    let point = Point::new(x, y);
                    let hit = resolver.resolve(view_id, point, g).unwrap();
                    let top = overlay.topmost_at(&point);
                    assert_eq!(
                        hit.map(|p| p.id.as_str()),
                        top.map(|o| o.part_id.as_str()),
                        "{view_id} at {point:?}"
                    );
                    x += 10.0;
                }
                y += 10.0;
            }
        }
    }
}

#[test]
fn test_overlays_follow_authored_order() {
    let configurator = painted_builtin();
    let g = ViewportGeometry::new(800.0, 600.0);

    for view in configurator.registry().views() {
        let overlays = configurator.overlays_for(&view.id, g).unwrap();
        let overlay_ids: Vec<_> = overlays.iter().map(|o| o.part_id.as_str()).collect();
        let authored: Vec<_> = view.parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(overlay_ids, authored);
    }
}
