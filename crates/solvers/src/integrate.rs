//! Fixed-step integration of scalar ODEs.
//!
//! This module drives a [`Stepper`] for a requested number of steps,
//! producing `steps + 1` [`Record`]s: the initial state followed by the state
//! after each step.
//!
//! Two entry points are provided:
//!
//! - [`trajectory`] returns a lazy [`Trajectory`] iterator that follows raw
//!   floating-point semantics and never fails.
//! - [`solve`] collects the full history, notifies an [`Observer`] of each
//!   record, and fails with [`Error::NonFinite`] as soon as a state leaves
//!   the finite range.
//!
//! # Example
//!
//! ```
//! use stepwise_core::{ExpRatioField, State};
//! use stepwise_solvers::{explicit::Rk4, integrate};
//!
//! let solution =
//!     integrate::solve_unobserved(&Rk4, &ExpRatioField, State::new(1.0, 5.0), 0.02, 5)?;
//!
//! assert_eq!(solution.history.len(), 6);
//! # Ok::<(), integrate::Error>(())
//! ```

mod error;
mod record;
mod solution;
mod trajectory;

pub use error::Error;
pub use record::Record;
pub use solution::Solution;
pub use trajectory::Trajectory;

use stepwise_core::{Observer, ScalarField, State};

use crate::explicit::Stepper;

/// Returns a lazy iterator over the states produced by `stepper`.
///
/// The iterator yields exactly `steps + 1` records and then stops. Each state
/// is computed only when requested, from the state before it.
pub fn trajectory<'a, T, F>(
    stepper: &'a T,
    field: &'a F,
    initial: State,
    h: f64,
    steps: usize,
) -> Trajectory<'a, T, F>
where
    T: Stepper,
    F: ScalarField + ?Sized,
{
    Trajectory::new(stepper, field, initial, h, steps)
}

/// Integrates `field` from `initial` using `stepper` for `steps` steps of size `h`.
///
/// # Algorithm
///
/// 1. Record the initial state as step 0.
/// 2. For each step, advance the previous state by `h` and record the result.
/// 3. Before recording, verify that the state is finite.
/// 4. Emit each record to the observer.
/// 5. Return the solution with the full history.
///
/// # Errors
///
/// Returns [`Error::Capacity`] if the `steps + 1` records cannot be allocated,
/// and [`Error::NonFinite`] for the first record whose state is not finite,
/// including the initial one.
pub fn solve<T, F, Obs>(
    stepper: &T,
    field: &F,
    initial: State,
    h: f64,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<T::Slopes>, Error>
where
    T: Stepper,
    F: ScalarField + ?Sized,
    Obs: Observer<Record<T::Slopes>>,
{
    let mut history: Vec<Record<T::Slopes>> = Vec::new();
    history
        .try_reserve_exact(steps.saturating_add(1))
        .map_err(|_| Error::Capacity { steps })?;

    for record in trajectory(stepper, field, initial, h, steps) {
        if !record.state.is_finite() {
            return Err(Error::NonFinite {
                step: record.step,
                x: record.state.x,
            });
        }

        observer.observe(&record);
        history.push(record);
    }

    Ok(Solution { history, steps })
}

/// Integrates without observation.
///
/// This is a convenience wrapper around [`solve`] that discards records.
///
/// # Errors
///
/// Returns [`Error::Capacity`] if the history cannot be allocated and
/// [`Error::NonFinite`] if any state is not finite.
pub fn solve_unobserved<T, F>(
    stepper: &T,
    field: &F,
    initial: State,
    h: f64,
    steps: usize,
) -> Result<Solution<T::Slopes>, Error>
where
    T: Stepper,
    F: ScalarField + ?Sized,
{
    solve(stepper, field, initial, h, steps, ())
}
