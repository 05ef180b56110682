use std::process;

use clap::Parser;
use debt_payoff::{
    cli::{self, Cli},
    init,
};

fn main() {
    init();

    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        cli::output::error(&err);
        process::exit(err.exit_code());
    }
}
