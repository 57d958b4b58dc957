//! The hexland board: eight large hexes on a pale-aqua sea.
//!
//! Hexes are placed on a doubled-coordinate grid (column steps of 1.5 radii,
//! row steps of sqrt(3)/2 radii) and the whole cluster is translated into
//! the canvas. Corner coordinates always serialize at two decimals; the trig
//! results are irrational and anything else would drift between runs.

use crate::svg::{points_attr_fixed, Document, Element};
use crate::types::{Colour, Hex};

pub const WIDTH: u32 = 960;
pub const HEIGHT: u32 = 680;

const HEX_RADIUS: f64 = 96.0;

/// Cluster translation into the canvas.
const OFFSET: (f64, f64) = (190.0, 120.0);

/// Doubled grid coordinates of the eight territory hexes.
const CELLS: [(i32, i32); 8] = [
    (1, 1),
    (1, 3),
    (1, 5),
    (2, 0),
    (2, 2),
    (2, 4),
    (3, 1),
    (3, 3),
];

pub fn render_hex_board() -> Document {
    let mut doc = Document::new(WIDTH, HEIGHT);

    doc.root_mut().push(
        Element::new("rect")
            .attr("x", "0")
            .attr("y", "0")
            .attr("width", WIDTH.to_string())
            .attr("height", HEIGHT.to_string())
            .attr("style", Colour::PALE_AQUA.fill_style(Colour::BLACK, "2")),
    );

    for (col, row) in CELLS {
        let hex = Hex::from_doubled_coordinates(col, row, HEX_RADIUS);
        doc.root_mut().push(
            Element::new("polygon")
                .attr("style", Colour::TEA_GREEN.fill_style(Colour::BLACK, "2"))
                .attr("points", points_attr_fixed(&hex.corner_points(OFFSET.0, OFFSET.1))),
        );
    }

    doc
}
