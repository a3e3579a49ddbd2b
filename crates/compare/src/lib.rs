//! Accuracy and timing comparison of RK4 and forward Euler.
//!
//! The harness integrates a scalar ODE with both methods over the same fixed
//! steps and measures each run against the exact solution:
//!
//! - [`tabulate`] — a detailed RK4 table with the slopes of every step
//! - [`compare`] — timed RK4 and Euler runs with their final absolute errors
//! - [`convergence`] — observed order of accuracy from a step-halving study
//! - [`execute`] — runs a [`Plan`] and writes the selected [`report`]s
//!
//! Numerical work is delegated to `stepwise-solvers`; timing wraps only the
//! stepping loops, so every result except [`RunResult::elapsed`] is
//! deterministic.

mod compare;
mod config;
mod convergence;
mod error;
mod method;
mod run;
mod tabulate;

pub mod logging;
pub mod report;

pub use compare::{Comparison, RunResult, compare, timed_run};
pub use config::{Config, ConfigError, INITIAL};
pub use convergence::{Convergence, Sample, convergence};
pub use error::Error;
pub use method::Method;
pub use run::{Plan, Runs, execute};
pub use tabulate::{Row, tabulate};
