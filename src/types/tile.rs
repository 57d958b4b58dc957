//! Tile declarations and the board model.
//!
//! A board is a point registry plus an ordered tile list plus canvas
//! dimensions. The tile order is a rendering contract: later entries draw on
//! top of earlier ones, so the sequence is never reordered.

use serde::{Deserialize, Serialize};

use crate::types::{PointId, PointRegistry};

/// One declared shape on a board.
///
/// The `points` lists are edge-adjacency ordered, not sets; reordering them
/// changes the polygon's actual outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum TileSpec {
    /// A filled land polygon, no label.
    Land { points: Vec<PointId> },

    /// A filled river polygon, optionally numbered at its centroid.
    River {
        points: Vec<PointId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },

    /// A circular marker at a single registered point.
    Landmark { point: PointId },

    /// A free-standing text label at an explicit coordinate.
    Label { label: String, at: (f64, f64) },
}

impl TileSpec {
    /// Short kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Land { .. } => "land",
            Self::River { .. } => "river",
            Self::Landmark { .. } => "landmark",
            Self::Label { .. } => "label",
        }
    }

    /// The point ids this declaration references, in declaration order.
    pub fn point_refs(&self) -> &[PointId] {
        match self {
            Self::Land { points } | Self::River { points, .. } => points,
            Self::Landmark { point } => std::slice::from_ref(point),
            Self::Label { .. } => &[],
        }
    }
}

/// Output canvas dimensions in document units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A complete board definition, fully constructed before rendering begins.
#[derive(Debug, Clone)]
pub struct Board {
    pub name: String,
    pub canvas: Canvas,
    pub registry: PointRegistry,
    pub tiles: Vec<TileSpec>,
}

impl Board {
    pub fn new(
        name: impl Into<String>,
        canvas: Canvas,
        registry: PointRegistry,
        tiles: Vec<TileSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            canvas,
            registry,
            tiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_spec_yaml_round_shapes() {
        let land: TileSpec = serde_yaml::from_str("kind: land\npoints: [1, 2, 6, 5]").unwrap();
        assert_eq!(
            land,
            TileSpec::Land {
                points: vec![1.into(), 2.into(), 6.into(), 5.into()],
            }
        );

        let river: TileSpec =
            serde_yaml::from_str("kind: river\nlabel: '1'\npoints: [2, 3, 7, 6]").unwrap();
        assert_eq!(river.kind(), "river");

        let landmark: TileSpec = serde_yaml::from_str("kind: landmark\npoint: L01").unwrap();
        assert_eq!(landmark.point_refs(), &[PointId::name("L01")]);

        let label: TileSpec =
            serde_yaml::from_str("kind: label\nlabel: '30'\nat: [492, 286]").unwrap();
        assert_eq!(
            label,
            TileSpec::Label {
                label: "30".to_string(),
                at: (492.0, 286.0),
            }
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: std::result::Result<TileSpec, _> =
            serde_yaml::from_str("kind: swamp\npoints: [1, 2, 3]");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<TileSpec, _> =
            serde_yaml::from_str("kind: land\npoints: [1, 2, 3]\nfill: red");
        assert!(result.is_err());
    }

    #[test]
    fn test_label_tile_has_no_point_refs() {
        let tile = TileSpec::Label {
            label: "30".to_string(),
            at: (492.0, 286.0),
        };
        assert!(tile.point_refs().is_empty());
    }
}
