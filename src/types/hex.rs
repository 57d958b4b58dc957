//! Regular-hexagon geometry.
//!
//! Two independent pieces: corner generation for a hexagon given its center
//! and radius, and conversion from doubled grid coordinates (column/row
//! indices) to a cartesian center. Both are pure; callers translate the
//! results into document space themselves.
//!
//! Two corner conventions coexist on purpose. `corners` puts the first
//! vertex at angle 0 on the x axis (cos for x, sin for y); `corners_rotated`
//! swaps the axes (sin for x, cos for y), producing a 90-degree rotated
//! hexagon. Different call sites in the shipped art rely on different
//! conventions, so neither is "the" orientation.

use std::f64::consts::PI;

use crate::types::Point;

/// A parametrized regular hexagon: center offset plus radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hex {
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

impl Hex {
    pub fn new(radius: f64, x: f64, y: f64) -> Self {
        Self { radius, x, y }
    }

    /// Place a hex on a doubled-coordinate grid.
    ///
    /// Adjacent columns sit 1.5 radii apart horizontally; adjacent rows sit
    /// sqrt(3)/2 radii apart vertically.
    pub fn from_doubled_coordinates(col: i32, row: i32, radius: f64) -> Self {
        let x = radius * 1.5 * f64::from(col);
        let y = radius * 3.0_f64.sqrt() / 2.0 * f64::from(row);
        Self::new(radius, x, y)
    }

    /// The hexagon's six vertices around a translated center.
    ///
    /// The caller's (x, y) is added to this hex's own offset, so grid-placed
    /// hexes can be shifted into the document as a group.
    pub fn corner_points(&self, x: f64, y: f64) -> [Point; 6] {
        corners(x + self.x, y + self.y, self.radius)
    }
}

/// Six vertices at 60-degree increments, first vertex at (cx + r, cy).
pub fn corners(cx: f64, cy: f64, radius: f64) -> [Point; 6] {
    std::array::from_fn(|k| {
        let theta = k as f64 * 2.0 * PI / 6.0;
        Point::new(cx + radius * theta.cos(), cy + radius * theta.sin())
    })
}

/// Six vertices with the axes swapped: x from sine, y from cosine.
///
/// First vertex lands at (cx, cy + r). Used by the card hex badge art.
pub fn corners_rotated(cx: f64, cy: f64, radius: f64) -> [Point; 6] {
    std::array::from_fn(|k| {
        let theta = k as f64 * 2.0 * PI / 6.0;
        Point::new(cx + radius * theta.sin(), cy + radius * theta.cos())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_corners_distance_and_angles() {
        let center = Point::new(0.0, 0.0);
        let points = corners(0.0, 0.0, 5.0);

        for point in &points {
            assert!((center.distance(point) - 5.0).abs() < TOLERANCE);
        }

        // Consecutive vertices differ in angle by exactly 60 degrees.
        for k in 0..6 {
            let expected = k as f64 * PI / 3.0;
            let actual = points[k].y.atan2(points[k].x);
            let normalized = if actual < -TOLERANCE {
                actual + 2.0 * PI
            } else {
                actual
            };
            assert!((normalized - expected).abs() < TOLERANCE, "vertex {}", k);
        }
    }

    #[test]
    fn test_corners_first_vertex_on_x_axis() {
        let points = corners(10.0, 20.0, 4.0);
        assert!((points[0].x - 14.0).abs() < TOLERANCE);
        assert!((points[0].y - 20.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_corners_rotated_first_vertex_on_y_axis() {
        let points = corners_rotated(10.0, 20.0, 4.0);
        assert!((points[0].x - 10.0).abs() < TOLERANCE);
        assert!((points[0].y - 24.0).abs() < TOLERANCE);

        // Still a regular hexagon.
        let center = Point::new(10.0, 20.0);
        for point in &points {
            assert!((center.distance(point) - 4.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_from_doubled_coordinates() {
        let hex = Hex::from_doubled_coordinates(1, 1, 96.0);
        assert!((hex.x - 144.0).abs() < TOLERANCE);
        assert!((hex.y - 96.0 * 3.0_f64.sqrt() / 2.0).abs() < TOLERANCE);
        assert!((hex.y - 83.138_438_763_306_08).abs() < 1e-6);
    }

    #[test]
    fn test_corner_points_adds_translation() {
        let hex = Hex::from_doubled_coordinates(2, 0, 96.0);
        let translated = hex.corner_points(190.0, 120.0);
        let raw = corners(190.0 + hex.x, 120.0 + hex.y, 96.0);
        assert_eq!(translated, raw);
    }
}
