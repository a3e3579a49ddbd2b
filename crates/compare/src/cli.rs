//! CLI argument definitions.

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use stepwise_compare::{Config, Error, Plan, Runs};

#[derive(Debug, Parser)]
#[command(
    name = "stepwise",
    version,
    about = "Compare RK4 and forward Euler on y' = y / (e^x - 1), y(1) = 5",
    long_about = "Compare RK4 and forward Euler on y' = y / (e^x - 1), y(1) = 5.\n\n\
                  By default prints a 5-step RK4 table (h = 0.02) followed by a\n\
                  timing and accuracy summary of both methods over 1500 steps (h = 0.003)."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Skip the detailed short-run RK4 table.
    #[arg(long = "no-short")]
    pub no_short: bool,

    /// Skip the long-run timing and accuracy summary.
    #[arg(long = "no-long")]
    pub no_long: bool,

    /// Also report observed convergence orders from a step-halving study.
    #[arg(long = "convergence")]
    pub convergence: bool,

    /// Step size for the long run (default: 0.003).
    #[arg(long = "step-size", value_name = "H")]
    pub step_size: Option<f64>,

    /// Number of steps for the long run (default: 1500).
    #[arg(long = "steps", value_name = "N")]
    pub steps: Option<usize>,
}

impl Cli {
    /// Builds the run plan from the parsed flags.
    pub fn plan(&self) -> Result<Plan, Error> {
        let mut long = Config::long();
        if let Some(steps) = self.steps {
            long = long.with_steps(steps);
        }
        if let Some(step_size) = self.step_size {
            long = long.with_step_size(step_size)?;
        }

        Ok(Plan {
            runs: Runs {
                short: !self.no_short,
                long: !self.no_long,
                convergence: self.convergence,
            },
            short: Config::short(),
            long,
        })
    }
}
