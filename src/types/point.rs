//! Point identifiers and coordinates.
//!
//! Board definitions name their anchor points either by number (the bulk of
//! a board) or by a string label (landmark anchors like `L07`). Both forms
//! resolve through the same registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a registered point: an integer or a string label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Num(i64),
    Name(String),
}

impl PointId {
    /// Convenience constructor for string-labelled points.
    pub fn name(s: impl Into<String>) -> Self {
        Self::Name(s.into())
    }
}

impl From<i64> for PointId {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for PointId {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Name(s) => write!(f, "{}", s),
        }
    }
}

/// A 2-D coordinate in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_id_display() {
        assert_eq!(PointId::Num(42).to_string(), "42");
        assert_eq!(PointId::name("L07").to_string(), "L07");
    }

    #[test]
    fn test_point_id_untagged_deserialize() {
        let num: PointId = serde_yaml::from_str("17").unwrap();
        assert_eq!(num, PointId::Num(17));

        let name: PointId = serde_yaml::from_str("L03").unwrap();
        assert_eq!(name, PointId::name("L03"));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }
}
