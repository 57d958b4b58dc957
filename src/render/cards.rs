//! Card face layout.
//!
//! Every card is a 100x148 canvas divided into a 4x4 grid of cells. Icons
//! are centred inside their cell with integer division, so a 20-wide icon in
//! a 25-wide cell always lands 2 units in, never 2.5. Rows of icons are
//! centred horizontally as a group by shifting the whole row in cell-width
//! steps.

use crate::render::icons::{digit, Icon, Part};
use crate::svg::{Document, Element};
use crate::types::Colour;

pub const CARD_WIDTH: i64 = 100;
pub const CARD_HEIGHT: i64 = 148;

/// Grid cell width and height: a quarter of the canvas each way.
const CELL_W: i64 = CARD_WIDTH / 4;
const CELL_H: i64 = CARD_HEIGHT / 4;

/// A fully laid-out card face, ready to serialize.
#[derive(Debug, Clone)]
pub struct CardFace {
    pub filename: String,
    colour: Colour,
    body: Vec<Element>,
}

impl CardFace {
    /// The complete document: background rect first, then the body in
    /// layout order.
    pub fn document(&self) -> Document {
        let mut doc = Document::new(CARD_WIDTH as u32, CARD_HEIGHT as u32);
        doc.root_mut().push(
            Element::new("rect")
                .attr("x", "0")
                .attr("y", "0")
                .attr("height", CARD_HEIGHT.to_string())
                .attr("width", CARD_WIDTH.to_string())
                .attr("style", self.colour.fill_style(Colour::BLACK, "0.5")),
        );
        for element in &self.body {
            doc.root_mut().push(element.clone());
        }
        doc
    }
}

/// Top-left corner for an icon centred in grid cell (col, row).
///
/// `x_offset` shifts the icon horizontally on top of the cell placement;
/// rows use it to centre themselves and two-digit numbers use it to close
/// the gap between the digits.
fn position(icon: &Icon, col: i64, row: i64, x_offset: i64) -> (i64, i64) {
    let x_diff = (CELL_W - icon.width) / 2;
    let y_diff = (CELL_H - icon.height) / 2;
    (CELL_W * col + x_diff + x_offset, CELL_H * row + y_diff)
}

fn place(icon: &Icon, col: i64, row: i64, x_offset: i64) -> Element {
    let (x, y) = position(icon, col, row, x_offset);
    icon.to_element(x, y)
}

fn divider(y: i64) -> Element {
    Part::line(0.0, y as f64, CARD_WIDTH as f64, y as f64, Colour::BLACK, "1").to_element()
}

/// Icon rows centred as a group, starting at grid row 1.
fn icon_rows(body: &mut Vec<Element>, rows: &[Vec<Icon>]) {
    for (row, icons) in rows.iter().enumerate() {
        let x_offset = CELL_W * (4 - icons.len() as i64) / 2;
        for (col, icon) in icons.iter().enumerate() {
            body.push(place(icon, col as i64, row as i64 + 1, x_offset));
        }
    }
}

/// An action card: number in the top-left cell, dividers under grid rows 2
/// (and 3 when a third row exists), then the icon rows.
pub fn action_card(number: u32, colour: Colour, rows: Vec<Vec<Icon>>) -> CardFace {
    let mut body = Vec::new();

    body.push(divider(CELL_H * 2));
    if rows.len() > 2 {
        body.push(divider(CELL_H * 3));
    }

    if number < 10 {
        body.push(place(&digit(number), 0, 0, 0));
    } else {
        body.push(place(&digit(number / 10), 0, 0, 0));
        // pull the second digit in so the pair reads as one number
        body.push(place(&digit(number % 10), 1, 0, -8));
    }

    icon_rows(&mut body, &rows);

    CardFace {
        filename: format!("card-action-{:02}.svg", number),
        colour,
        body,
    }
}

/// An alliance card: no number, no dividers, just centred icon rows on a
/// daffodil background.
pub fn alliance_card(name: &str, rows: Vec<Vec<Icon>>) -> CardFace {
    let mut body = Vec::new();
    icon_rows(&mut body, &rows);

    CardFace {
        filename: format!("card-alliance-{}.svg", name.to_lowercase()),
        colour: Colour::DAFFODIL,
        body,
    }
}

/// A raider card: its strength as one or two digits over the axe icon.
pub fn raider_card(number: u32) -> CardFace {
    let mut body = Vec::new();

    let x_offset = CELL_W / 2;
    if number < 10 {
        body.push(place(&digit(number), 1, 1, x_offset));
    } else {
        body.push(place(&digit(number / 10), 1, 1, 4));
        body.push(place(&digit(number % 10), 2, 1, -4));
    }
    body.push(place(&super::icons::raider(), 1, 2, x_offset));

    CardFace {
        filename: format!("card-raider-{:02}.svg", number),
        colour: Colour::SCARLET,
        body,
    }
}

/// A deck's uniform card back: just the coloured canvas.
pub fn card_back(deck: &str, colour: Colour) -> CardFace {
    CardFace {
        filename: format!("card-{}-back.svg", deck),
        colour,
        body: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::icons;

    fn translate_of(el: &Element) -> &str {
        &el.attrs()[0].1
    }

    #[test]
    fn test_single_digit_number_position() {
        let card = action_card(7, Colour::DAFFODIL, vec![vec![icons::settlement()]]);
        let doc = card.document();
        // rect, divider, digit, icon
        let children: Vec<_> = doc.root().child_elements().collect();
        assert_eq!(children.len(), 4);
        // 20x32 digit centred in a 25x37 cell
        assert_eq!(translate_of(children[2]), "translate(2,2)");
    }

    #[test]
    fn test_two_digit_number_kerning() {
        let card = action_card(10, Colour::DAFFODIL, vec![vec![icons::coin()]]);
        let doc = card.document();
        let children: Vec<_> = doc.root().child_elements().collect();
        assert_eq!(translate_of(children[2]), "translate(2,2)");
        assert_eq!(translate_of(children[3]), "translate(19,2)");
    }

    #[test]
    fn test_second_divider_only_with_third_row() {
        let two_rows = action_card(
            20,
            Colour::IVORY,
            vec![
                vec![icons::settlement()],
                vec![icons::coin(), icons::coin(), icons::expand()],
            ],
        );
        let doc = two_rows.document();
        let lines = doc
            .root()
            .child_elements()
            .filter(|el| el.name() == "line")
            .count();
        assert_eq!(lines, 1);

        let three_rows = action_card(
            14,
            Colour::DAFFODIL,
            vec![
                vec![icons::settlement()],
                vec![icons::coin(), icons::expand()],
                vec![icons::alliance(), icons::alliance(), icons::alliance()],
            ],
        );
        let doc = three_rows.document();
        let lines: Vec<_> = doc
            .root()
            .child_elements()
            .filter(|el| el.name() == "line")
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].attrs()[1], ("y1".to_string(), "74".to_string()));
        assert_eq!(lines[1].attrs()[1], ("y1".to_string(), "111".to_string()));
    }

    #[test]
    fn test_row_group_centring() {
        let card = alliance_card("Aoife", vec![vec![icons::vp_badge(2)], vec![icons::renown()]]);
        let doc = card.document();
        let children: Vec<_> = doc.root().child_elements().collect();
        // single icon row: offset = 25 * 3 / 2 = 37
        assert_eq!(translate_of(children[1]), "translate(39,43)");
        assert_eq!(translate_of(children[2]), "translate(39,80)");
    }

    #[test]
    fn test_raider_card_layout() {
        let doc = raider_card(9).document();
        let children: Vec<_> = doc.root().child_elements().collect();
        assert_eq!(children.len(), 3);
        assert_eq!(translate_of(children[1]), "translate(39,39)");
        assert_eq!(translate_of(children[2]), "translate(39,80)");

        let doc = raider_card(12).document();
        let children: Vec<_> = doc.root().child_elements().collect();
        assert_eq!(translate_of(children[1]), "translate(31,39)");
        assert_eq!(translate_of(children[2]), "translate(48,39)");
    }

    #[test]
    fn test_card_back_is_bare_canvas() {
        let doc = card_back("action", Colour::CORNFLOWER_BLUE).document();
        let children: Vec<_> = doc.root().child_elements().collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name(), "rect");
        assert!(children[0].attrs()[4].1.contains("6495ed"));
    }
}
