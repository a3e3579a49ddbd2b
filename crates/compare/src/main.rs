//! Compares RK4 and forward Euler on `y' = y / (e^x - 1)`, `y(1) = 5`.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use stepwise_compare::{
    execute,
    logging::{LogConfig, init_logging},
};
use stepwise_core::ExpRatioProblem;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: io::stderr().is_terminal(),
    };
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let plan = cli.plan().context("invalid long-run configuration")?;

    let mut out = io::stdout().lock();
    execute(&ExpRatioProblem::default(), &plan, &mut out)?;

    Ok(())
}
