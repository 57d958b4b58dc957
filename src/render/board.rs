//! Tile declaration interpreter.
//!
//! A single forward pass over a board's tile list: each declaration is
//! dispatched on its kind and its shapes are appended to the document in
//! declaration order. That order is the painter's contract - a label
//! declared after its polygon draws on top of it - so the interpreter never
//! buffers or groups by kind. The first failure aborts the run; partial
//! boards are worse than no board.

use crate::error::Result;
use crate::geometry::resolve_polygon;
use crate::svg::{points_attr, Document, Element};
use crate::types::{Board, Colour, TileSpec};

/// Radius of a landmark marker circle, in document units.
const LANDMARK_RADIUS: &str = "20";

/// Style shared by all tile number labels.
const LABEL_STYLE: &str = "font:12px sans-serif;fill:#000000;align:center;text-anchor:middle";

/// Render a registry board into a complete SVG document.
pub fn render_board(board: &Board) -> Result<Document> {
    let mut doc = Document::new(board.canvas.width, board.canvas.height);

    for (index, tile) in board.tiles.iter().enumerate() {
        emit_tile(doc.root_mut(), board, tile, index)?;
    }

    Ok(doc)
}

fn emit_tile(out: &mut Element, board: &Board, tile: &TileSpec, index: usize) -> Result<()> {
    match tile {
        TileSpec::Land { points } => {
            let polygon = resolve_polygon(points, &board.registry, index)?;
            out.push(filled_polygon(polygon.vertices(), Colour::LAND));
        }

        TileSpec::River { points, label } => {
            let polygon = resolve_polygon(points, &board.registry, index)?;
            out.push(filled_polygon(polygon.vertices(), Colour::RIVER));
            if let Some(number) = label {
                let (x, y) = polygon.centroid();
                out.push(number_label(number, x.to_string(), y.to_string()));
            }
        }

        TileSpec::Landmark { point } => {
            let center = board.registry.lookup(point, index)?;
            out.push(
                Element::new("circle")
                    .attr("cx", crate::svg::fmt_num(center.x))
                    .attr("cy", crate::svg::fmt_num(center.y))
                    .attr("r", LANDMARK_RADIUS)
                    .attr("style", Colour::LANDMARK.fill_style(Colour::BLACK, "1")),
            );
        }

        TileSpec::Label { label, at } => {
            out.push(number_label(
                label,
                crate::svg::fmt_num(at.0),
                crate::svg::fmt_num(at.1),
            ));
        }
    }

    Ok(())
}

fn filled_polygon(vertices: &[crate::types::Point], fill: Colour) -> Element {
    Element::new("polygon")
        .attr("style", fill.fill_style(Colour::BLACK, "1"))
        .attr("points", points_attr(vertices))
}

fn number_label(number: &str, x: String, y: String) -> Element {
    Element::new("text")
        .attr("style", LABEL_STYLE)
        .attr("x", x)
        .attr("y", y)
        .text(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::types::{Canvas, PointId, RegistryBuilder};

    fn test_board(tiles: Vec<TileSpec>) -> Board {
        let mut builder = RegistryBuilder::new();
        builder.add("A", (0.0, 0.0));
        builder.add("B", (10.0, 0.0));
        builder.add("C", (10.0, 10.0));
        builder.add("D", (0.0, 10.0));
        builder.add("L01", (30.0, 40.0));
        Board::new("test", Canvas::new(100, 100), builder.build().unwrap(), tiles)
    }

    fn ids(names: &[&str]) -> Vec<PointId> {
        names.iter().map(|&n| PointId::from(n)).collect()
    }

    #[test]
    fn test_land_emits_unlabelled_polygon() {
        let board = test_board(vec![TileSpec::Land {
            points: ids(&["A", "B", "C", "D"]),
        }]);
        let doc = render_board(&board).unwrap();

        let children: Vec<_> = doc.root().child_elements().collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name(), "polygon");
        assert_eq!(
            children[0].attrs()[1],
            ("points".to_string(), "0,0 10,0 10,10 0,10".to_string())
        );
    }

    #[test]
    fn test_river_label_at_truncated_centroid() {
        let board = test_board(vec![TileSpec::River {
            points: ids(&["A", "B", "C", "D"]),
            label: Some("7".to_string()),
        }]);
        let doc = render_board(&board).unwrap();

        let children: Vec<_> = doc.root().child_elements().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name(), "polygon");
        assert_eq!(children[1].name(), "text");
        assert_eq!(children[1].attrs()[1], ("x".to_string(), "5".to_string()));
        assert_eq!(children[1].attrs()[2], ("y".to_string(), "5".to_string()));
    }

    #[test]
    fn test_unlabelled_river_emits_no_text() {
        let board = test_board(vec![TileSpec::River {
            points: ids(&["A", "B", "C"]),
            label: None,
        }]);
        let doc = render_board(&board).unwrap();
        assert_eq!(doc.root().child_elements().count(), 1);
    }

    #[test]
    fn test_landmark_circle() {
        let board = test_board(vec![TileSpec::Landmark {
            point: PointId::name("L01"),
        }]);
        let doc = render_board(&board).unwrap();

        let circle = doc.root().child_elements().next().unwrap();
        assert_eq!(circle.name(), "circle");
        assert_eq!(circle.attrs()[0], ("cx".to_string(), "30".to_string()));
        assert_eq!(circle.attrs()[1], ("cy".to_string(), "40".to_string()));
        assert_eq!(circle.attrs()[2], ("r".to_string(), "20".to_string()));
    }

    #[test]
    fn test_emission_order_matches_declaration_order() {
        let board = test_board(vec![
            TileSpec::Land {
                points: ids(&["A", "B", "C", "D"]),
            },
            TileSpec::River {
                points: ids(&["A", "B", "C", "D"]),
                label: Some("1".to_string()),
            },
            TileSpec::Landmark {
                point: PointId::name("L01"),
            },
        ]);
        let doc = render_board(&board).unwrap();

        let names: Vec<_> = doc.root().child_elements().map(Element::name).collect();
        // Land polygon strictly before the river polygon and its label,
        // landmark last.
        assert_eq!(names, vec!["polygon", "polygon", "text", "circle"]);
    }

    #[test]
    fn test_bad_reference_aborts_with_index() {
        let board = test_board(vec![
            TileSpec::Land {
                points: ids(&["A", "B", "C"]),
            },
            TileSpec::Land {
                points: ids(&["A", "B", "MISSING"]),
            },
        ]);

        match render_board(&board).unwrap_err() {
            BoardError::MissingPoint { id, tile, .. } => {
                assert_eq!(id, "MISSING");
                assert_eq!(tile, 1);
            }
            other => panic!("expected MissingPoint, got {:?}", other),
        }
    }

    #[test]
    fn test_free_label_uses_explicit_coordinates() {
        let board = test_board(vec![TileSpec::Label {
            label: "30".to_string(),
            at: (492.0, 286.0),
        }]);
        let doc = render_board(&board).unwrap();

        let text = doc.root().child_elements().next().unwrap();
        assert_eq!(text.attrs()[1], ("x".to_string(), "492".to_string()));
        assert_eq!(text.attrs()[2], ("y".to_string(), "286".to_string()));
    }
}
