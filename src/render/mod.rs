//! Renderers: each takes pure data and produces an SVG document.

pub mod board;
pub mod cards;
pub mod decks;
pub mod grid;
pub mod hexgrid;
pub mod icons;

pub use board::render_board;
pub use cards::CardFace;
pub use grid::render_grid_board;
pub use hexgrid::render_hex_board;
