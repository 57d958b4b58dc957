use miette::Diagnostic;
use thiserror::Error;

/// Main error type for boardsmith operations.
///
/// Every variant is fatal to the current run: generation either produces a
/// complete document or nothing at all.
#[derive(Error, Diagnostic, Debug)]
pub enum BoardError {
    #[error("IO error: {0}")]
    #[diagnostic(code(boardsmith::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(boardsmith::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(boardsmith::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("tile {tile} references unknown point '{id}'")]
    #[diagnostic(code(boardsmith::missing_point))]
    MissingPoint {
        /// The unresolved point identifier, as written in the declaration.
        id: String,
        /// Index of the offending declaration in the tile list.
        tile: usize,
        #[help]
        help: Option<String>,
    },

    #[error("invalid tile declaration at index {index}: {message}")]
    #[diagnostic(code(boardsmith::invalid_tile))]
    InvalidTile {
        index: usize,
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BoardError>;
