//! Built-in boards.
//!
//! The riverland board is data-driven (an embedded YAML definition, the same
//! format `--data` accepts); hexland and gridland are generated procedurally
//! because their geometry is a formula, not a point table.

use crate::error::{BoardError, Result};
use crate::parser;
use crate::render::{render_board, render_grid_board, render_hex_board};
use crate::svg::Document;

/// The riverland board definition, embedded at build time.
pub const RIVERLAND: &str = include_str!("riverland.yaml");

/// Names accepted by `board <name>`, in listing order.
pub const BOARD_NAMES: [&str; 3] = ["riverland", "hexland", "gridland"];

/// Render a built-in board by name.
pub fn render_builtin(name: &str) -> Result<Document> {
    match name {
        "riverland" => {
            let board = parser::from_str(RIVERLAND)?;
            render_board(&board)
        }
        "hexland" => Ok(render_hex_board()),
        "gridland" => Ok(render_grid_board()),
        other => Err(BoardError::Parse {
            message: format!("unknown board '{}'", other),
            help: Some(format!("built-in boards: {}", BOARD_NAMES.join(", "))),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_riverland_definition_loads() {
        let board = parser::from_str(RIVERLAND).unwrap();
        assert_eq!(board.name, "riverland");
        assert_eq!(board.canvas.width, 1000);
        assert_eq!(board.canvas.height, 840);
        // 215 numbered points plus 26 landmark anchors
        assert_eq!(board.registry.len(), 241);
        assert_eq!(board.tiles.len(), 192);
    }

    #[test]
    fn test_riverland_renders() {
        let doc = render_builtin("riverland").unwrap();
        // every tile emits at least one element; labelled rivers emit two
        assert!(doc.root().child_elements().count() > 192);
    }

    #[test]
    fn test_every_builtin_renders() {
        for name in BOARD_NAMES {
            assert!(render_builtin(name).is_ok(), "board {}", name);
        }
    }

    #[test]
    fn test_unknown_board_rejected() {
        assert!(render_builtin("atlantis").is_err());
    }
}
