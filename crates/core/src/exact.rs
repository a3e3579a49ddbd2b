use crate::State;

/// A closed-form solution `y(x)` of an ODE, used as the answer key when
/// measuring integration error.
///
/// Closures of the form `Fn(f64) -> f64` implement this trait.
pub trait ExactSolution {
    /// Returns the exact value of the solution at `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Returns the absolute error of `state.y` against the exact value at `state.x`.
    fn abs_error(&self, state: &State) -> f64 {
        (state.y - self.evaluate(state.x)).abs()
    }
}

impl<F> ExactSolution for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// The solution family of `y' = y / (e^x - 1)`.
///
/// Every solution has the form `y(x) = c * (1 - e^-x)`. This type fixes `c`
/// by the point `(x0, y0)` the curve passes through and evaluates
///
/// ```text
/// y(x) = y0 * (1 - e^-x) / (1 - e^-x0)
/// ```
///
/// so that `evaluate(x0)` returns `y0` exactly. The default passes through
/// `(1, 5)`, giving `5 * (1 - e^-x) / (1 - e^-1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpRatioSolution {
    anchor: State,
    denominator: f64,
}

impl ExpRatioSolution {
    /// Creates the solution passing through `anchor`.
    ///
    /// An anchor at `x = 0` has no finite solution through it unless `y = 0`;
    /// evaluation then follows IEEE semantics.
    #[must_use]
    pub fn through(anchor: State) -> Self {
        Self {
            anchor,
            denominator: 1.0 - (-anchor.x).exp(),
        }
    }

    /// Returns the point this solution passes through.
    #[must_use]
    pub fn anchor(&self) -> State {
        self.anchor
    }
}

impl Default for ExpRatioSolution {
    fn default() -> Self {
        Self::through(State::new(1.0, 5.0))
    }
}

impl ExactSolution for ExpRatioSolution {
    fn evaluate(&self, x: f64) -> f64 {
        self.anchor.y * ((1.0 - (-x).exp()) / self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{ExpRatioField, ScalarField};

    #[test]
    fn matches_initial_condition_exactly() {
        let exact = ExpRatioSolution::default();

        assert_eq!(exact.evaluate(1.0), 5.0);
    }

    #[test]
    fn matches_closed_form() {
        let exact = ExpRatioSolution::default();
        let closed_form = |x: f64| 5.0 * (1.0 - (-x).exp()) / (1.0 - (-1.0_f64).exp());

        for x in [0.5, 1.02, 2.0, 5.5] {
            assert_relative_eq!(exact.evaluate(x), closed_form(x), max_relative = 1e-14);
        }
        assert_relative_eq!(exact.evaluate(1.1), 5.276_912_030_3, epsilon = 1e-9);
    }

    #[test]
    fn satisfies_the_ode() {
        let exact = ExpRatioSolution::through(State::new(2.0, -3.0));
        let h = 1e-6;

        for x in [0.5, 1.0, 3.0] {
            let derivative = (exact.evaluate(x + h) - exact.evaluate(x - h)) / (2.0 * h);
            let slope = ExpRatioField.evaluate(x, exact.evaluate(x));
            assert_relative_eq!(derivative, slope, max_relative = 1e-6);
        }
    }

    #[test]
    fn abs_error_is_non_negative() {
        let exact = ExpRatioSolution::default();

        assert_relative_eq!(exact.abs_error(&State::new(1.0, 4.5)), 0.5);
        assert_relative_eq!(exact.abs_error(&State::new(1.0, 5.5)), 0.5);
        assert_eq!(exact.abs_error(&State::new(1.0, 5.0)), 0.0);
    }
}
