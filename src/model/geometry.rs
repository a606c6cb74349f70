//! Core geometry types shared by the registry, mapper and compositor.
//!
//! All coordinates are `f32`, matching what the render surface reports.
//! Which coordinate space a value lives in (reference or display) is decided
//! by the caller; these types carry no space tag.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A width × height pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// An axis-aligned rectangle stored as its two corners.
///
/// A well-formed rectangle has `x1 < x2` and `y1 < y2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a normalized rectangle from two arbitrary corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            x1: p1.x.min(p2.x),
            y1: p1.y.min(p2.y),
            x2: p1.x.max(p2.x),
            y2: p1.y.max(p2.y),
        }
    }

    /// Parse the `"x1,y1,x2,y2"` notation used by HTML image maps.
    pub fn parse_coords(coords: &str) -> Option<Self> {
        let values: Vec<f32> = coords
            .split(',')
            .map(|v| v.trim().parse::<f32>())
            .collect::<Result<_, _>>()
            .ok()?;
        match values.as_slice() {
            [x1, y1, x2, y2] => Some(Self::new(*x1, *y1, *x2, *y2)),
            _ => None,
        }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Get the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Check if a point is inside the rectangle. Edges count as inside.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x1 && point.x <= self.x2 && point.y >= self.y1 && point.y <= self.y2
    }

    /// Whether the corners are ordered and finite.
    pub fn is_well_formed(&self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite())
            && self.x1 < self.x2
            && self.y1 < self.y2
    }
}

/// Bounding rectangle of a vertex list, or None when empty.
pub fn bounds_of(vertices: &[Point]) -> Option<Rect> {
    let first = vertices.first()?;
    let mut rect = Rect::new(first.x, first.y, first.x, first.y);
    for p in &vertices[1..] {
        rect.x1 = rect.x1.min(p.x);
        rect.y1 = rect.y1.min(p.y);
        rect.x2 = rect.x2.max(p.x);
        rect.y2 = rect.y2.max(p.y);
    }
    Some(rect)
}

/// Point-in-polygon test using the ray casting algorithm.
pub fn polygon_contains(vertices: &[Point], point: &Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = &vertices[i];
        let vj = &vertices[j];
        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_corners_normalizes() {
        let a = Rect::from_corners(Point::new(10.0, 20.0), Point::new(50.0, 80.0));
        let b = Rect::from_corners(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        assert_eq!(a, b);
        assert_eq!(a.width(), 40.0);
        assert_eq!(a.height(), 60.0);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 110.0, 110.0);
        assert!(rect.contains(&Point::new(50.0, 50.0)));
        assert!(rect.contains(&Point::new(10.0, 10.0)));
        assert!(rect.contains(&Point::new(110.0, 110.0)));
        assert!(!rect.contains(&Point::new(5.0, 50.0)));
        assert!(!rect.contains(&Point::new(50.0, 110.5)));
    }

    #[test]
    fn test_rect_well_formed() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_well_formed());
        assert!(!Rect::new(5.0, 0.0, 5.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 3.0, 1.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, f32::NAN, 1.0).is_well_formed());
    }

    #[test]
    fn test_parse_coords() {
        assert_eq!(
            Rect::parse_coords("200,200,600,450"),
            Some(Rect::new(200.0, 200.0, 600.0, 450.0))
        );
        assert_eq!(
            Rect::parse_coords(" 1, 2 ,3,4"),
            Some(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(Rect::parse_coords("1,2,3"), None);
        assert_eq!(Rect::parse_coords("a,b,c,d"), None);
    }

    #[test]
    fn test_size_degenerate() {
        assert!(Size::new(0.0, 300.0).is_degenerate());
        assert!(Size::new(400.0, 0.0).is_degenerate());
        assert!(Size::new(f32::INFINITY, 1.0).is_degenerate());
        assert!(!Size::new(400.0, 300.0).is_degenerate());
    }

    #[test]
    fn test_polygon_contains() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        assert!(polygon_contains(&square, &Point::new(50.0, 50.0)));
        assert!(!polygon_contains(&square, &Point::new(150.0, 50.0)));
        assert!(!polygon_contains(&square[..2], &Point::new(50.0, 0.0)));
    }

    #[test]
    fn test_bounds_of() {
        let tri = vec![
            Point::new(400.0, 100.0),
            Point::new(500.0, 200.0),
            Point::new(350.0, 200.0),
        ];
        assert_eq!(bounds_of(&tri), Some(Rect::new(350.0, 100.0, 500.0, 200.0)));
        assert_eq!(bounds_of(&[]), None);
    }
}
