use clap::Parser;
use miette::Result;
use sheetglue::cli::{Cli, Commands};
use sheetglue::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => sheetglue::cli::generate::run(args, &printer)?,
        Commands::List(args) => sheetglue::cli::list::run(args, &printer)?,
        Commands::Completions(args) => sheetglue::cli::completions::run(args)?,
    }

    Ok(())
}
