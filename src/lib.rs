//! boardsmith - board-game SVG asset generator
//!
//! Compiles declarative board definitions (a named-point registry plus an
//! ordered tile list) and built-in card decks into deterministic SVG
//! documents.

pub mod boards;
pub mod cli;
pub mod error;
pub mod geometry;
pub mod output;
pub mod parser;
pub mod render;
pub mod svg;
pub mod types;

pub use error::{BoardError, Result};
pub use geometry::{resolve_polygon, ResolvedPolygon};
pub use parser::BoardFile;
pub use render::{render_board, render_grid_board, render_hex_board, CardFace};
pub use svg::{Document, Element, Node};
pub use types::{
    Board, Canvas, Colour, Hex, Point, PointId, PointRegistry, RegistryBuilder, TileSpec,
};
