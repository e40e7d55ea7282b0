//! Geometric primitives carried by signage records.
//!
//! These types are opaque to the decoding pipelines: the pipelines only
//! store them, they never inspect or validate them. Geometric validation
//! belongs to later map-compilation stages.

use serde::Serialize;

/// A point in 3D map coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the z-coordinate of the point
    pub fn z(self) -> f64 {
        self.z
    }
}

/// A boundary polygon as an ordered sequence of corner points.
///
/// Corners are kept in document order. An empty polygon is representable;
/// whether that is geometrically meaningful is not this crate's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Point3>,
}

impl Polygon {
    /// Creates a polygon from an ordered sequence of corner points
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Returns the corner points in order
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of corner points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether the polygon has no corner points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point3::new(1.0, -2.5, 10.25);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), -2.5);
        assert_eq!(p.z(), 10.25);
    }

    #[test]
    fn test_polygon_preserves_order() {
        let polygon = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ]);
        assert_eq!(polygon.len(), 3);
        assert_eq!(polygon.points()[1], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_polygon() {
        let polygon = Polygon::default();
        assert!(polygon.is_empty());
        assert_eq!(polygon.len(), 0);
    }
}
