//! `flights` - interactive flight registry
//!
//! This binary runs the command loop over the terminal.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use flight_registry::cli::Cli;
use flight_registry::{init_logging, Command, Config, Repl};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    let stdin = std::io::stdin();
    let mut repl = Repl::new(stdin.lock(), std::io::stdout(), std::io::stderr(), &config);

    if let Some(path) = cli.load {
        repl.dispatch(Command::Load(Some(path)))?;
    }

    repl.run().context("terminal I/O failed")?;
    Ok(())
}
