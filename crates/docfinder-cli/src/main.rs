mod cli;
mod commands;
mod tracing_setup;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::tracing_setup::{Verbosity, init_subscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));
    commands::run(cli)
}
