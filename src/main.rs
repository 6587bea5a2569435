use clap::Parser;
use miette::Result;
use swatch::cli::Cli;
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        swatch::cli::completions::run(shell)?;
        return Ok(());
    }

    let printer = Printer::new().with_verbosity(cli.extract.verbosity());
    swatch::cli::extract::run(cli.extract, &printer)?;

    Ok(())
}
