//! Core traits and types for fixed-step scalar ODE integration.
//!
//! This crate defines the shared abstractions that steppers, integrators, and
//! comparison harnesses build on:
//!
//! - [`ScalarField`] — the right-hand side `f(x, y)` of `y' = f(x, y)`
//! - [`ExactSolution`] — a closed-form `y(x)` used to measure error
//! - [`Problem`] — a field paired with its exact solution
//! - [`State`], [`SlopeSet`] — immutable records produced by each step
//! - [`StepIntegrable`] — values that can be advanced by `derivative * delta`
//! - [`Observer`] — receives integration events

mod exact;
mod field;
mod observer;
mod problem;
mod state;
mod step;

pub use exact::{ExactSolution, ExpRatioSolution};
pub use field::{ExpRatioField, ScalarField};
pub use observer::Observer;
pub use problem::{ExpRatioProblem, Problem};
pub use state::{SlopeSet, State};
pub use step::StepIntegrable;
