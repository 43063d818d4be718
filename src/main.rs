use clap::Parser;
use miette::Result;
use pagefill::cli::{Cli, Commands};
use pagefill::output::Printer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Hydrate(args) => pagefill::cli::hydrate::run(args, &printer).await?,
        Commands::Check(args) => pagefill::cli::check::run(args, &printer).await?,
        Commands::Init(args) => pagefill::cli::init::run(args, &printer)?,
        Commands::Completions(args) => pagefill::cli::completions::run(args)?,
    }

    Ok(())
}
