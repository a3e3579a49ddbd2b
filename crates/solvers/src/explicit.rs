//! Explicit single-step methods.
//!
//! Each method advances a [`State`] by one fixed increment `h`:
//!
//! | Method    | Slope samples | Local error | Global error |
//! |-----------|---------------|-------------|--------------|
//! | [`Euler`] | 1             | O(h²)       | O(h)         |
//! | [`Rk4`]   | 4             | O(h⁵)       | O(h⁴)        |
//!
//! Steppers follow the field's floating-point semantics. A singular field
//! produces a non-finite state, which is returned as-is.

mod euler;
mod rk4;

pub use euler::Euler;
pub use rk4::Rk4;

use stepwise_core::{ScalarField, State};

/// A single-step method that advances a state by a fixed increment.
pub trait Stepper {
    /// Intermediate values produced alongside each step.
    ///
    /// Methods with nothing worth reporting use `()`.
    type Slopes: Copy;

    /// Short display name for reports and logs.
    const NAME: &'static str;

    /// Advances `state` by `h` along `field`.
    fn step<F>(&self, field: &F, state: State, h: f64) -> Advance<Self::Slopes>
    where
        F: ScalarField + ?Sized;
}

/// The outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance<S> {
    /// The state after the step.
    pub state: State,

    /// Intermediate values computed during the step.
    pub slopes: S,
}
