//! Board command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::boards;
use crate::cli::{write_svg, BOARD_INDENT};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::parser;
use crate::render::render_board;
use crate::svg::Document;

/// Render a board to SVG
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Built-in board to render (riverland, hexland, gridland)
    #[arg(required_unless_present = "data", conflicts_with = "data")]
    pub name: Option<String>,

    /// Render an external board definition file instead
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "assets")]
    pub output: PathBuf,
}

pub fn run(args: BoardArgs, printer: &Printer) -> Result<()> {
    let (name, doc) = render(&args)?;

    let path = args.output.join(format!("{}.svg", name));
    write_svg(&path, &doc, BOARD_INDENT)?;
    printer.status("Wrote", &display_path(&path));

    Ok(())
}

fn render(args: &BoardArgs) -> Result<(String, Document)> {
    if let Some(path) = &args.data {
        let board = parser::load(path)?;
        let doc = render_board(&board)?;
        return Ok((board.name, doc));
    }

    // clap guarantees name is present when --data is absent
    let name = args.name.clone().unwrap_or_default();
    let doc = boards::render_builtin(&name)?;
    Ok((name, doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_board_written_to_output_dir() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("assets");

        let args = BoardArgs {
            name: Some("hexland".to_string()),
            data: None,
            output: output.clone(),
        };
        run(args, &Printer::new()).unwrap();

        let svg = fs::read_to_string(output.join("hexland.svg")).unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\" ?>\n<svg"));
        assert_eq!(svg.matches("<polygon").count(), 8);
    }

    #[test]
    fn test_external_definition_named_by_its_contents() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("tiny.board.yaml");
        fs::write(
            &data,
            "name: tiny\nwidth: 20\nheight: 20\n\
             points:\n  - { id: 1, x: 0, y: 0 }\n  - { id: 2, x: 10, y: 0 }\n  - { id: 3, x: 5, y: 10 }\n\
             tiles:\n  - { kind: land, points: [1, 2, 3] }\n",
        )
        .unwrap();

        let args = BoardArgs {
            name: None,
            data: Some(data),
            output: dir.path().to_path_buf(),
        };
        run(args, &Printer::new()).unwrap();

        assert!(dir.path().join("tiny.svg").exists());
    }

    #[test]
    fn test_failed_render_leaves_existing_asset_untouched() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("broken.board.yaml");
        fs::write(
            &data,
            "name: broken\nwidth: 20\nheight: 20\n\
             points:\n  - { id: 1, x: 0, y: 0 }\n  - { id: 2, x: 10, y: 0 }\n\
             tiles:\n  - { kind: land, points: [1, 2, 99] }\n",
        )
        .unwrap();

        let existing = dir.path().join("broken.svg");
        fs::write(&existing, "previous contents").unwrap();

        let args = BoardArgs {
            name: None,
            data: Some(data),
            output: dir.path().to_path_buf(),
        };
        assert!(run(args, &Printer::new()).is_err());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "previous contents");
    }
}
