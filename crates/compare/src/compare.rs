use std::time::{Duration, Instant};

use stepwise_core::{ExactSolution, Problem, ScalarField, State};

use crate::{Config, Error, Method};

/// The outcome of one timed integration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    /// The method that produced this result.
    pub method: Method,

    /// The state after the last step.
    pub final_state: State,

    /// The exact solution at `final_state.x`.
    pub exact: f64,

    /// Absolute error of `final_state.y` against `exact`; never negative.
    pub error: f64,

    /// Wall-clock time spent stepping.
    pub elapsed: Duration,
}

/// Results of running both methods on the same configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// The classical Runge–Kutta run.
    pub rk4: RunResult,

    /// The forward Euler run.
    pub euler: RunResult,
}

impl Comparison {
    /// Returns both results in report order.
    #[must_use]
    pub fn results(&self) -> [&RunResult; 2] {
        [&self.rk4, &self.euler]
    }
}

/// Runs RK4 and forward Euler on `problem` and measures each.
///
/// Both runs start from the same initial state and take the same steps. They
/// execute back-to-back on the calling thread, and each is timed with a
/// monotonic clock around its stepping loop only.
///
/// # Errors
///
/// Returns [`Error::Integrate`] if a run produces a non-finite state and
/// [`Error::Exact`] if the exact solution is not finite at a final x.
pub fn compare<F, S>(problem: &Problem<F, S>, config: &Config) -> Result<Comparison, Error>
where
    F: ScalarField,
    S: ExactSolution,
{
    tracing::debug!(
        h = config.step_size(),
        steps = config.steps(),
        "comparing methods"
    );

    Ok(Comparison {
        rk4: timed_run(Method::Rk4, problem, config)?,
        euler: timed_run(Method::Euler, problem, config)?,
    })
}

/// Runs a single method, timing only the stepping loop.
///
/// # Errors
///
/// Returns an error if the final state or exact value is not finite.
pub fn timed_run<F, S>(
    method: Method,
    problem: &Problem<F, S>,
    config: &Config,
) -> Result<RunResult, Error>
where
    F: ScalarField,
    S: ExactSolution,
{
    let (initial, h, steps) = (config.initial(), config.step_size(), config.steps());
    let pending = method.prepare(&problem.field, initial, h, steps);

    let start = Instant::now();
    let final_state = pending.finish();
    let elapsed = start.elapsed();

    if !final_state.is_finite() {
        // Rerun with checking to find where the state first broke down.
        method
            .check(&problem.field, initial, h, steps)
            .map_err(Error::integrate(method))?;
    }

    let exact = problem.exact.evaluate(final_state.x);
    if !exact.is_finite() {
        return Err(Error::Exact { x: final_state.x });
    }
    let error = (final_state.y - exact).abs();

    tracing::info!(
        %method,
        x = final_state.x,
        y = final_state.y,
        error,
        elapsed_sec = elapsed.as_secs_f64(),
        "run complete"
    );

    Ok(RunResult {
        method,
        final_state,
        exact,
        error,
        elapsed,
    })
}
