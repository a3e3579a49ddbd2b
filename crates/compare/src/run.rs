use std::io::Write;

use stepwise_core::{ExactSolution, Problem, ScalarField};

use crate::{
    Config, Error, Method,
    compare::compare,
    convergence::convergence,
    report::{ConvergenceReport, Summary, Table},
    tabulate::tabulate,
};

/// Selects which reports a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runs {
    /// Print the detailed table for the short configuration.
    pub short: bool,
    /// Print the timing and accuracy summary for the long configuration.
    pub long: bool,
    /// Print observed convergence orders, based on the short configuration.
    pub convergence: bool,
}

impl Default for Runs {
    fn default() -> Self {
        Self {
            short: true,
            long: true,
            convergence: false,
        }
    }
}

/// Everything a single invocation needs: which reports to produce and the
/// configurations they use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    /// Which reports to produce.
    pub runs: Runs,

    /// Configuration for the table and the convergence study.
    pub short: Config,

    /// Configuration for the timed summary.
    pub long: Config,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            runs: Runs::default(),
            short: Config::short(),
            long: Config::long(),
        }
    }
}

/// Executes `plan` against `problem`, writing each selected report to `out`.
///
/// Reports are written in order: table, summary, convergence.
///
/// # Errors
///
/// Returns an error if any integration fails or `out` cannot be written.
pub fn execute<F, S, W>(problem: &Problem<F, S>, plan: &Plan, out: &mut W) -> Result<(), Error>
where
    F: ScalarField,
    S: ExactSolution,
    W: Write,
{
    let Plan { runs, short, long } = plan;

    if runs.short {
        let rows = tabulate(problem, short)?;
        write!(out, "{}", Table(&rows))?;
    }

    if runs.long {
        let comparison = compare(problem, long)?;
        write!(
            out,
            "{}",
            Summary {
                config: long,
                comparison: &comparison,
            }
        )?;
    }

    if runs.convergence {
        let studies = Method::ALL
            .into_iter()
            .map(|method| convergence(method, problem, short))
            .collect::<Result<Vec<_>, _>>()?;
        write!(
            out,
            "{}",
            ConvergenceReport {
                config: short,
                studies: &studies,
            }
        )?;
    }

    out.flush()?;
    Ok(())
}
