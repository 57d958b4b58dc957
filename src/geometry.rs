//! Polygon assembly: resolving ordered point-id lists into vertex sequences.
//!
//! The assembler never reorders, sorts or deduplicates vertices - adjacency
//! order encodes the polygon's actual shape, including intentionally
//! non-convex outlines. Closing the last vertex back to the first is left to
//! the SVG polygon element itself.

use crate::error::{BoardError, Result};
use crate::types::{Point, PointId, PointRegistry};

/// A resolved polygon: concrete vertices in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPolygon {
    vertices: Vec<Point>,
}

impl ResolvedPolygon {
    /// The vertex sequence, in the exact order the ids were declared.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Label anchor: the arithmetic mean of all vertices, each coordinate
    /// truncated toward zero. Truncation (not rounding) matches the placement
    /// in the shipped assets.
    pub fn centroid(&self) -> (i64, i64) {
        let n = self.vertices.len() as f64;
        let sum_x: f64 = self.vertices.iter().map(|p| p.x).sum();
        let sum_y: f64 = self.vertices.iter().map(|p| p.y).sum();
        ((sum_x / n) as i64, (sum_y / n) as i64)
    }
}

/// Resolve an ordered id list against a registry.
///
/// `tile` is the declaration index, threaded into every error. Fewer than
/// three points is an `InvalidTile`; an unknown id is a `MissingPoint`.
pub fn resolve_polygon(
    ids: &[PointId],
    registry: &PointRegistry,
    tile: usize,
) -> Result<ResolvedPolygon> {
    if ids.len() < 3 {
        return Err(BoardError::InvalidTile {
            index: tile,
            message: format!("polygon needs at least 3 points, got {}", ids.len()),
            help: None,
        });
    }

    let mut vertices = Vec::with_capacity(ids.len());
    for id in ids {
        vertices.push(registry.lookup(id, tile)?);
    }

    Ok(ResolvedPolygon { vertices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegistryBuilder;

    fn square_registry() -> PointRegistry {
        let mut builder = RegistryBuilder::new();
        builder.add("A", (0.0, 0.0));
        builder.add("B", (10.0, 0.0));
        builder.add("C", (10.0, 10.0));
        builder.add("D", (0.0, 10.0));
        builder.build().unwrap()
    }

    fn ids(names: &[&str]) -> Vec<PointId> {
        names.iter().map(|&n| PointId::from(n)).collect()
    }

    #[test]
    fn test_order_preserved_exactly() {
        let registry = square_registry();
        let polygon = resolve_polygon(&ids(&["A", "B", "C", "D"]), &registry, 0).unwrap();

        assert_eq!(
            polygon.vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]
        );

        // A different order is a different polygon.
        let crossed = resolve_polygon(&ids(&["A", "C", "B", "D"]), &registry, 0).unwrap();
        assert_ne!(polygon.vertices(), crossed.vertices());
    }

    #[test]
    fn test_repeated_ids_not_deduplicated() {
        let registry = square_registry();
        let polygon = resolve_polygon(&ids(&["A", "B", "B", "C"]), &registry, 0).unwrap();
        assert_eq!(polygon.vertices().len(), 4);
        assert_eq!(polygon.vertices()[1], polygon.vertices()[2]);
    }

    #[test]
    fn test_centroid_truncates_toward_zero() {
        let registry = square_registry();
        let polygon = resolve_polygon(&ids(&["A", "B", "C", "D"]), &registry, 0).unwrap();
        assert_eq!(polygon.centroid(), (5, 5));

        // A mean of 4.75 must truncate to 4, not round to 5.
        let mut builder = RegistryBuilder::new();
        builder.add("A", (0.0, 0.0));
        builder.add("B", (9.0, 0.0));
        builder.add("C", (10.0, 9.0));
        builder.add("D", (0.0, 10.0));
        let registry = builder.build().unwrap();
        let polygon = resolve_polygon(&ids(&["A", "B", "C", "D"]), &registry, 0).unwrap();
        assert_eq!(polygon.centroid(), (4, 4));
    }

    #[test]
    fn test_too_few_points() {
        let registry = square_registry();
        let err = resolve_polygon(&ids(&["A", "B"]), &registry, 3).unwrap_err();
        match err {
            BoardError::InvalidTile { index, .. } => assert_eq!(index, 3),
            other => panic!("expected InvalidTile, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_point_propagates() {
        let registry = square_registry();
        let err = resolve_polygon(&ids(&["A", "B", "Z"]), &registry, 12).unwrap_err();
        match err {
            BoardError::MissingPoint { id, tile, .. } => {
                assert_eq!(id, "Z");
                assert_eq!(tile, 12);
            }
            other => panic!("expected MissingPoint, got {:?}", other),
        }
    }
}
