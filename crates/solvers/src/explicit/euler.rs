use stepwise_core::{ScalarField, State, StepIntegrable};

use super::{Advance, Stepper};

/// Forward Euler.
///
/// Uses the slope at the start of the interval only:
///
/// ```text
/// y_{n+1} = y_n + h * f(x_n, y_n)
/// x_{n+1} = x_n + h
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Stepper for Euler {
    type Slopes = ();

    const NAME: &'static str = "Euler";

    fn step<F>(&self, field: &F, state: State, h: f64) -> Advance<()>
    where
        F: ScalarField + ?Sized,
    {
        let slope = field.evaluate(state.x, state.y);

        Advance {
            state: state.step(slope, h),
            slopes: (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::ExpRatioField;

    #[test]
    fn constant_slope_is_exact() {
        let field = |_x: f64, _y: f64| 2.0;

        let next = Euler.step(&field, State::new(0.0, 1.0), 0.5).state;

        assert_relative_eq!(next.x, 0.5);
        assert_relative_eq!(next.y, 2.0);
    }

    #[test]
    fn first_step_of_reference_problem() {
        let next = Euler.step(&ExpRatioField, State::new(1.0, 5.0), 0.02).state;

        assert_relative_eq!(next.x, 1.02);
        assert_relative_eq!(next.y, 5.0 + 0.02 * 5.0 / (1.0_f64.exp() - 1.0));
    }

    #[test]
    fn uses_slope_at_start_of_interval() {
        // y' = x, so the start slope at x = 0 is zero.
        let field = |x: f64, _y: f64| x;

        let next = Euler.step(&field, State::new(0.0, 3.0), 1.0).state;

        assert_eq!(next, State::new(1.0, 3.0));
    }

    #[test]
    fn singular_field_propagates() {
        let next = Euler.step(&ExpRatioField, State::new(0.0, 1.0), 0.1).state;

        assert!(next.y.is_infinite());
        assert_relative_eq!(next.x, 0.1);
    }
}
