//! Point registry for board anchor coordinates.
//!
//! The registry is immutable after construction - use `RegistryBuilder` to
//! create one from a static table. Every tile on a board resolves its
//! vertices through the same registry for the lifetime of a generation run.

use std::collections::HashMap;

use crate::error::{BoardError, Result};
use crate::types::{Point, PointId};

/// Immutable id -> coordinate table scoped to one board.
#[derive(Debug, Clone, Default)]
pub struct PointRegistry {
    points: HashMap<PointId, Point>,
}

impl PointRegistry {
    /// Look up a point by id.
    ///
    /// `tile` is the index of the declaration asking for the point; it is
    /// carried into the error so a failed run names the offending entry.
    pub fn lookup(&self, id: &PointId, tile: usize) -> Result<Point> {
        self.points
            .get(id)
            .copied()
            .ok_or_else(|| BoardError::MissingPoint {
                id: id.to_string(),
                tile,
                help: Some("check the board's point table for this identifier".to_string()),
            })
    }

    /// Check whether an id is registered without resolving it.
    pub fn contains(&self, id: &PointId) -> bool {
        self.points.contains_key(id)
    }

    /// Number of registered points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over all registered ids.
    pub fn ids(&self) -> impl Iterator<Item = &PointId> {
        self.points.keys()
    }
}

/// Builder for constructing a `PointRegistry`.
///
/// Duplicate ids are a construction-time error when the coordinates differ:
/// a silently re-bound id would corrupt every tile that references it.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    points: HashMap<PointId, Point>,
    duplicates: Vec<PointId>,
}

impl RegistryBuilder {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point to the registry.
    pub fn add(&mut self, id: impl Into<PointId>, point: impl Into<Point>) -> &mut Self {
        let id = id.into();
        let point = point.into();
        match self.points.get(&id) {
            Some(existing) if *existing != point => self.duplicates.push(id),
            _ => {
                self.points.insert(id, point);
            }
        }
        self
    }

    /// Add multiple points.
    pub fn add_all<I, K, P>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<PointId>,
        P: Into<Point>,
    {
        for (id, point) in points {
            self.add(id, point);
        }
        self
    }

    /// Build the registry, rejecting conflicting duplicate ids.
    pub fn build(self) -> Result<PointRegistry> {
        if let Some(id) = self.duplicates.first() {
            return Err(BoardError::Parse {
                message: format!("point '{}' is defined twice with different coordinates", id),
                help: Some("each point id must resolve to exactly one coordinate".to_string()),
            });
        }
        Ok(PointRegistry {
            points: self.points,
        })
    }
}
