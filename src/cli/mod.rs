//! Command-line front end over the payoff engine.

pub mod args;
pub mod commands;
pub mod output;
pub mod report;

use crate::errors::CliError;

pub use args::{Cli, Command};
pub use commands::CliContext;

/// Runs an already parsed command line.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Version => commands::run_version(),
        Command::Schedule(schedule) => commands::run_schedule(&CliContext::load()?, &schedule)?,
        Command::Compare(compare) => commands::run_compare(&CliContext::load()?, &compare)?,
        Command::Allocate(allocate) => commands::run_allocate(&CliContext::load()?, &allocate)?,
    }
    Ok(())
}
