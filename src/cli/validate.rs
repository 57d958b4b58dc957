//! Validate command implementation.
//!
//! Loads board definition files through the same parser the board command
//! uses, but writes nothing. Directories are scanned recursively for
//! `*.board.yaml` files.

use std::path::PathBuf;

use clap::Args;
use walkdir::WalkDir;

use crate::error::{BoardError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser;

/// Validate board definition files without writing output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to check (default: current directory)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths
    };

    let files = discover(&paths)?;
    if files.is_empty() {
        printer.info("Checked", "no board definitions found");
        return Ok(());
    }

    let mut failures = 0;
    for file in &files {
        match parser::load(file) {
            Ok(board) => printer.status(
                "Checked",
                &format!(
                    "{} ({}, {})",
                    display_path(file),
                    plural(board.registry.len(), "point", "points"),
                    plural(board.tiles.len(), "tile", "tiles")
                ),
            ),
            Err(err) => {
                printer.error("Invalid", &format!("{}: {}", display_path(file), err));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(BoardError::Parse {
            message: format!(
                "{} of {} failed validation",
                plural(failures, "definition", "definitions"),
                files.len()
            ),
            help: None,
        });
    }

    Ok(())
}

/// Expand directories into the `*.board.yaml` files they contain; explicit
/// file paths pass through as-is.
fn discover(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|err| BoardError::Io {
                    path: path.clone(),
                    message: err.to_string(),
                })?;
                let name = entry.file_name().to_string_lossy();
                if entry.file_type().is_file() && name.ends_with(".board.yaml") {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const GOOD: &str = "name: good\nwidth: 20\nheight: 20\n\
         points:\n  - { id: 1, x: 0, y: 0 }\n  - { id: 2, x: 10, y: 0 }\n  - { id: 3, x: 5, y: 10 }\n\
         tiles:\n  - { kind: land, points: [1, 2, 3] }\n";

    #[test]
    fn test_directory_discovery_finds_board_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.board.yaml"), GOOD).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/b.board.yaml"), GOOD).unwrap();
        fs::write(dir.path().join("README.md"), "not a board").unwrap();

        let files = discover(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_valid_definitions_pass() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.board.yaml"), GOOD).unwrap();

        let args = ValidateArgs {
            paths: vec![dir.path().to_path_buf()],
        };
        assert!(run(args, &Printer::new()).is_ok());
    }

    #[test]
    fn test_dangling_reference_fails_validation() {
        let dir = tempdir().unwrap();
        let bad = GOOD.replace("[1, 2, 3]", "[1, 2, 99]");
        fs::write(dir.path().join("bad.board.yaml"), bad).unwrap();

        let args = ValidateArgs {
            paths: vec![dir.path().to_path_buf()],
        };
        assert!(run(args, &Printer::new()).is_err());
    }

    #[test]
    fn test_validation_writes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.board.yaml"), GOOD).unwrap();

        let args = ValidateArgs {
            paths: vec![dir.path().to_path_buf()],
        };
        run(args, &Printer::new()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["a.board.yaml"]);
    }
}
