//! The gridland board: a 16x11 field of squares with a river running
//! through it.
//!
//! Squares are emitted column-major (all of column 0 top to bottom, then
//! column 1, and so on), matching the shipped asset's element order.

use crate::svg::{Document, Element};
use crate::types::Colour;

pub const COLUMNS: u32 = 16;
pub const ROWS: u32 = 11;
pub const SQUARE_SIZE: u32 = 90;

/// Grid cells drawn as water, tracing the river course.
const WATER_CELLS: [(u32, u32); 41] = [
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
    (3, 2),
    (4, 2),
    (4, 1),
    (4, 0),
    (5, 0),
    (6, 0),
    (7, 0),
    (8, 0),
    (12, 0),
    (12, 1),
    (12, 2),
    (13, 2),
    (13, 3),
    (14, 3),
    (15, 3),
    (15, 4),
    (14, 4),
    (14, 5),
    (14, 6),
    (13, 6),
    (12, 6),
    (12, 7),
    (12, 8),
    (11, 8),
    (10, 8),
    (9, 8),
    (8, 8),
    (7, 8),
    (6, 8),
    (6, 7),
    (5, 7),
    (4, 7),
    (3, 7),
    (3, 6),
    (2, 6),
    (1, 6),
    (0, 6),
];

pub fn render_grid_board() -> Document {
    let mut doc = Document::new(COLUMNS * SQUARE_SIZE, ROWS * SQUARE_SIZE);

    for col in 0..COLUMNS {
        for row in 0..ROWS {
            doc.root_mut().push(square(col, row));
        }
    }

    doc
}

fn square(col: u32, row: u32) -> Element {
    let fill = if WATER_CELLS.contains(&(col, row)) {
        Colour::WATER
    } else {
        Colour::PARCHMENT
    };
    Element::new("rect")
        .attr("x", (col * SQUARE_SIZE).to_string())
        .attr("y", (row * SQUARE_SIZE).to_string())
        .attr("width", SQUARE_SIZE.to_string())
        .attr("height", SQUARE_SIZE.to_string())
        .attr("style", fill.fill_style(Colour::BLACK, "1"))
}
