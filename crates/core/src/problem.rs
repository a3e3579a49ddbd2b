use crate::{ExactSolution, ExpRatioField, ExpRatioSolution, ScalarField, State};

/// A scalar ODE paired with its closed-form solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem<F, S> {
    /// The right-hand side of `y' = f(x, y)`.
    pub field: F,
    /// The exact solution used to measure error.
    pub exact: S,
}

/// The reference problem family `y' = y / (e^x - 1)`.
pub type ExpRatioProblem = Problem<ExpRatioField, ExpRatioSolution>;

impl<F: ScalarField, S: ExactSolution> Problem<F, S> {
    /// Creates a problem from a field and its exact solution.
    pub fn new(field: F, exact: S) -> Self {
        Self { field, exact }
    }
}

impl ExpRatioProblem {
    /// Returns `y' = y / (e^x - 1)` with the solution passing through `initial`.
    #[must_use]
    pub fn exp_ratio(initial: State) -> Self {
        Self {
            field: ExpRatioField,
            exact: ExpRatioSolution::through(initial),
        }
    }
}

impl Default for ExpRatioProblem {
    /// The reference problem `y' = y / (e^x - 1)` with `y(1) = 5`.
    fn default() -> Self {
        Self::exp_ratio(State::new(1.0, 5.0))
    }
}
