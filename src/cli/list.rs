//! List command implementation.

use clap::Args;

use crate::boards::BOARD_NAMES;
use crate::error::Result;
use crate::output::Printer;
use crate::render::decks;

/// List built-in boards and decks
#[derive(Args, Debug)]
pub struct ListArgs {}

pub fn run(_args: ListArgs, printer: &Printer) -> Result<()> {
    printer.info("Boards", &BOARD_NAMES.join(", "));

    let decks = [
        ("action", decks::action_deck().len()),
        ("alliance", decks::alliance_deck().len()),
        ("raider", decks::raider_deck().len()),
    ];
    let summary: Vec<String> = decks
        .iter()
        .map(|(name, count)| format!("{} ({})", name, count))
        .collect();
    printer.info("Decks", &summary.join(", "));

    Ok(())
}
