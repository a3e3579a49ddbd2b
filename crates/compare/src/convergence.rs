//! Observed order of accuracy.
//!
//! A method with global error `C * h^p` loses a factor of `2^p` in error when
//! the step size is halved over the same interval. Running a method at `h`
//! and `h / 2` and comparing final errors estimates `p`.

use stepwise_core::{ExactSolution, Problem, ScalarField};

use crate::{Config, Error, Method, compare::timed_run};

/// The final error of one run in a convergence study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The step size `h` of the run.
    pub step_size: f64,

    /// The number of steps taken.
    pub steps: usize,

    /// Absolute error at the final state.
    pub error: f64,
}

/// Errors at a coarse and a refined step size over the same interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// The method under study.
    pub method: Method,

    /// The run at the configured step size.
    pub coarse: Sample,

    /// The run at half the step size and twice the steps.
    pub fine: Sample,
}

impl Convergence {
    /// Returns `coarse.error / fine.error`.
    ///
    /// About 2 for a first-order method and 16 for a fourth-order one. Infinite
    /// when the refined run is exact.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.coarse.error / self.fine.error
    }

    /// Returns the observed order, `log2(ratio)`.
    #[must_use]
    pub fn order(&self) -> f64 {
        self.ratio().log2()
    }
}

/// Measures `method` on `config` and on `config.refined()`.
///
/// # Errors
///
/// Returns [`Error::Config`] if `config` cannot be refined, or an error if
/// either run fails.
pub fn convergence<F, S>(
    method: Method,
    problem: &Problem<F, S>,
    config: &Config,
) -> Result<Convergence, Error>
where
    F: ScalarField,
    S: ExactSolution,
{
    let sample = |config: &Config| -> Result<Sample, Error> {
        let result = timed_run(method, problem, config)?;
        Ok(Sample {
            step_size: config.step_size(),
            steps: config.steps(),
            error: result.error,
        })
    };

    let refined = config.refined()?;
    let coarse = sample(config)?;
    let fine = sample(&refined)?;

    tracing::debug!(%method, coarse = coarse.error, fine = fine.error, "convergence sample");

    Ok(Convergence {
        method,
        coarse,
        fine,
    })
}
