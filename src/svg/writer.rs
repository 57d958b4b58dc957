//! Serialization and numeric formatting for SVG output.
//!
//! Numbers are rendered with fixed rules so that re-running generation over
//! unchanged tables is byte-identical: two-decimal fixed precision where
//! fractional hex math is involved, plain integers everywhere the source
//! coordinates are integral.

use std::fmt::Write as _;

use crate::types::Point;

/// Fixed two-decimal formatting, locale independent.
pub fn fmt2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Integer formatting when the value is whole, two decimals otherwise.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        fmt2(value)
    }
}

/// A `points` attribute from resolved registry vertices.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A `points` attribute with every coordinate at two decimals (hex corners).
pub fn points_attr_fixed(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt2(p.x), fmt2(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a full document: XML declaration plus the pretty-printed tree.
pub fn write_document(root: &super::Element, indent: &str) -> String {
    let mut out = String::from("<?xml version=\"1.0\" ?>\n");
    write_element(&mut out, root, indent, 0);
    out
}

fn write_element(out: &mut String, el: &super::Element, indent: &str, depth: usize) {
    for _ in 0..depth {
        out.push_str(indent);
    }
    out.push('<');
    out.push_str(el.name());
    for (key, value) in el.attrs() {
        let _ = write!(out, " {}=\"{}\"", key, escape(value));
    }

    if el.children().is_empty() {
        out.push_str("/>\n");
        return;
    }

    out.push_str(">\n");
    for child in el.children() {
        match child {
            super::Node::Element(inner) => write_element(out, inner, indent, depth + 1),
            super::Node::Text(text) => {
                for _ in 0..=depth {
                    out.push_str(indent);
                }
                out.push_str(&escape(text));
                out.push('\n');
            }
        }
    }
    for _ in 0..depth {
        out.push_str(indent);
    }
    let _ = write!(out, "</{}>\n", el.name());
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
