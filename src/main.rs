use boardsmith::cli::{Cli, Commands};
use boardsmith::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Board(args) => boardsmith::cli::board::run(args, &printer)?,
        Commands::Cards(args) => boardsmith::cli::cards::run(args, &printer)?,
        Commands::Validate(args) => boardsmith::cli::validate::run(args, &printer)?,
        Commands::List(args) => boardsmith::cli::list::run(args, &printer)?,
        Commands::Completions(args) => boardsmith::cli::completions::run(args)?,
    }

    Ok(())
}
