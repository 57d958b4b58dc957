//! Board definition files.
//!
//! A definition is a YAML document with a point table and an ordered tile
//! list. Built-in boards are embedded from the same format, so external
//! files and compiled-in definitions go through identical loading and
//! validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::types::{Board, Canvas, PointId, RegistryBuilder, TileSpec};

/// On-disk shape of a board definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardFile {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub points: Vec<PointRecord>,
    pub tiles: Vec<TileSpec>,
}

/// One row of the point table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointRecord {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl BoardFile {
    /// Build the runtime board: registry construction plus structural
    /// validation of every tile.
    pub fn into_board(self) -> Result<Board> {
        let mut builder = RegistryBuilder::new();
        for record in &self.points {
            builder.add(record.id.clone(), (record.x, record.y));
        }
        let registry = builder.build()?;

        let board = Board::new(
            self.name,
            Canvas::new(self.width, self.height),
            registry,
            self.tiles,
        );
        check(&board)?;
        Ok(board)
    }
}

/// Parse a board definition from YAML source.
pub fn from_str(source: &str) -> Result<Board> {
    let file: BoardFile = serde_yaml::from_str(source).map_err(|err| BoardError::Parse {
        message: err.to_string(),
        help: Some("board definitions need name, width, height, points and tiles".to_string()),
    })?;
    file.into_board()
}

/// Load a board definition from a file.
pub fn load(path: &Path) -> Result<Board> {
    let source = fs::read_to_string(path).map_err(|err| BoardError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    from_str(&source)
}

/// Structural validation: every referenced point resolves and every polygon
/// has enough vertices. Rendering repeats these checks tile by tile; doing
/// them up front means a bad definition fails before any drawing starts.
pub fn check(board: &Board) -> Result<()> {
    for (index, tile) in board.tiles.iter().enumerate() {
        match tile {
            TileSpec::Land { points } | TileSpec::River { points, .. } => {
                if points.len() < 3 {
                    return Err(BoardError::InvalidTile {
                        index,
                        message: format!(
                            "polygon needs at least 3 points, got {}",
                            points.len()
                        ),
                        help: None,
                    });
                }
            }
            TileSpec::Landmark { .. } | TileSpec::Label { .. } => {}
        }
        for id in tile.point_refs() {
            board.registry.lookup(id, index)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
name: test
width: 100
height: 100
points:
  - { id: 1, x: 0, y: 0 }
  - { id: 2, x: 10, y: 0 }
  - { id: 3, x: 10, y: 10 }
  - { id: L01, x: 5, y: 5 }
tiles:
  - { kind: land, points: [1, 2, 3] }
  - { kind: river, points: [1, 2, 3], label: \"1\" }
  - { kind: landmark, point: L01 }
  - { kind: label, label: \"30\", at: [50, 50] }
";

    #[test]
    fn test_minimal_board_loads() {
        let board = from_str(MINIMAL).unwrap();
        assert_eq!(board.name, "test");
        assert_eq!(board.canvas, Canvas::new(100, 100));
        assert_eq!(board.registry.len(), 4);
        assert_eq!(board.tiles.len(), 4);
    }

    #[test]
    fn test_dangling_reference_rejected_at_load() {
        let source = MINIMAL.replace("points: [1, 2, 3] }", "points: [1, 2, 99] }");
        match from_str(&source).unwrap_err() {
            BoardError::MissingPoint { id, tile, .. } => {
                assert_eq!(id, "99");
                assert_eq!(tile, 0);
            }
            other => panic!("expected MissingPoint, got {:?}", other),
        }
    }

    #[test]
    fn test_two_point_polygon_rejected() {
        let source = MINIMAL.replace(
            "- { kind: land, points: [1, 2, 3] }",
            "- { kind: land, points: [1, 2] }",
        );
        match from_str(&source).unwrap_err() {
            BoardError::InvalidTile { index, .. } => assert_eq!(index, 0),
            other => panic!("expected InvalidTile, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        match from_str("name: [unclosed").unwrap_err() {
            BoardError::Parse { .. } => {}
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let source = format!("{}author: nobody\n", MINIMAL);
        assert!(from_str(&source).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        match load(Path::new("/nonexistent/board.yaml")).unwrap_err() {
            BoardError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/board.yaml"));
            }
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
