//! Cards command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{write_svg, CARD_INDENT};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::decks;

/// Render every card in the built-in decks
#[derive(Args, Debug)]
pub struct CardsArgs {
    /// Output directory
    #[arg(long, short, default_value = "assets")]
    pub output: PathBuf,
}

pub fn run(args: CardsArgs, printer: &Printer) -> Result<()> {
    let cards = decks::all_cards();

    for card in &cards {
        write_svg(&args.output.join(&card.filename), &card.document(), CARD_INDENT)?;
    }

    printer.status(
        "Wrote",
        &format!(
            "{} to {}",
            plural(cards.len(), "card", "cards"),
            display_path(&args.output)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_all_cards_written() {
        let dir = tempdir().unwrap();
        let args = CardsArgs {
            output: dir.path().to_path_buf(),
        };
        run(args, &Printer::new()).unwrap();

        assert!(dir.path().join("card-action-back.svg").exists());
        assert!(dir.path().join("card-action-01.svg").exists());
        assert!(dir.path().join("card-alliance-brigid.svg").exists());
        assert!(dir.path().join("card-raider-14.svg").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 41);
    }

    #[test]
    fn test_cards_use_tab_indentation() {
        let dir = tempdir().unwrap();
        let args = CardsArgs {
            output: dir.path().to_path_buf(),
        };
        run(args, &Printer::new()).unwrap();

        let svg = std::fs::read_to_string(dir.path().join("card-action-01.svg")).unwrap();
        assert!(svg.contains("\n\t<rect"));
    }
}
