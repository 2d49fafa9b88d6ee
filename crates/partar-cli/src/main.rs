//! partar - concurrent tar.gz extraction at the command line.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let output = output::Output::new(cli.json, cli.quiet);

    match &cli.command {
        cli::Commands::Extract(args) => commands::extract::execute(args, &output),
        cli::Commands::List(args) => commands::list::execute(args, &output),
    }
}
