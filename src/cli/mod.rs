pub mod board;
pub mod cards;
pub mod completions;
pub mod list;
pub mod validate;

use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::{BoardError, Result};
use crate::svg::Document;

/// Indent for board documents.
pub const BOARD_INDENT: &str = "    ";
/// Indent for card documents. The shipped card assets use tabs; keeping the
/// difference means regenerating either kind is diff-clean.
pub const CARD_INDENT: &str = "\t";

/// boardsmith - board-game SVG asset generator
#[derive(Parser, Debug)]
#[command(name = "boardsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a board to SVG
    Board(board::BoardArgs),

    /// Render every card in the built-in decks
    Cards(cards::CardsArgs),

    /// Validate board definition files without writing output
    Validate(validate::ValidateArgs),

    /// List built-in boards and decks
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Serialize a document and write it in one step.
///
/// The document is rendered to a string first; the target file is only
/// touched once the full text exists, so a failed render never clobbers a
/// previously generated asset.
pub(crate) fn write_svg(path: &Path, doc: &Document, indent: &str) -> Result<()> {
    let rendered = doc.to_pretty_string(indent);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|err| BoardError::Io {
                path: parent.to_path_buf(),
                message: format!("failed to create output directory: {}", err),
            })?;
        }
    }

    fs::write(path, rendered).map_err(|err| BoardError::Io {
        path: path.to_path_buf(),
        message: format!("failed to write asset: {}", err),
    })
}
