use stepwise_core::{ScalarField, SlopeSet, State, StepIntegrable};

use super::{Advance, Stepper};

/// Classical fourth-order Runge–Kutta.
///
/// Samples four slopes per step and combines them with weights `1, 2, 2, 1`:
///
/// ```text
/// k1 = f(x,       y)
/// k2 = f(x + h/2, y + (h/2) * k1)
/// k3 = f(x + h/2, y + (h/2) * k2)
/// k4 = f(x + h,   y + h * k3)
///
/// y_{n+1} = y_n + (h/6) * (k1 + 2*k2 + 2*k3 + k4)
/// x_{n+1} = x_n + h
/// ```
///
/// The slopes of each step are returned as a [`SlopeSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Stepper for Rk4 {
    type Slopes = SlopeSet;

    const NAME: &'static str = "RK4";

    fn step<F>(&self, field: &F, state: State, h: f64) -> Advance<SlopeSet>
    where
        F: ScalarField + ?Sized,
    {
        let half = h / 2.0;
        let slope_at = |stage: State| field.evaluate(stage.x, stage.y);

        let k1 = slope_at(state);
        let k2 = slope_at(state.step(k1, half));
        let k3 = slope_at(state.step(k2, half));
        let k4 = slope_at(state.step(k3, h));

        let slopes = SlopeSet { k1, k2, k3, k4 };

        Advance {
            state: State {
                x: state.x + h,
                y: state.y + (h / 6.0) * slopes.weighted_sum(),
            },
            slopes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use stepwise_core::ExpRatioField;

    #[test]
    fn first_step_of_reference_problem() {
        let Advance { state, slopes } = Rk4.step(&ExpRatioField, State::new(1.0, 5.0), 0.02);

        assert_abs_diff_eq!(slopes.k1, 2.90988, epsilon = 5e-6);
        assert_abs_diff_eq!(slopes.k2, 2.88101, epsilon = 5e-6);
        assert_abs_diff_eq!(slopes.k3, 2.88085, epsilon = 5e-6);
        assert_abs_diff_eq!(slopes.k4, 2.85226, epsilon = 5e-6);
        assert_abs_diff_eq!(state.x, 1.02, epsilon = 1e-12);
        assert_abs_diff_eq!(state.y, 5.05762, epsilon = 5e-6);
    }

    #[test]
    fn matches_direct_substitution() {
        let f = |x: f64, y: f64| y / (x.exp() - 1.0);
        let (x, y, h) = (1.0, 5.0, 0.02);

        let k1 = f(x, y);
        let k2 = f(x + h / 2.0, y + (h / 2.0) * k1);
        let k3 = f(x + h / 2.0, y + (h / 2.0) * k2);
        let k4 = f(x + h, y + h * k3);
        let y_next = y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4);

        let advance = Rk4.step(&ExpRatioField, State::new(x, y), h);

        assert_eq!(advance.slopes, SlopeSet { k1, k2, k3, k4 });
        assert_eq!(advance.state, State::new(x + h, y_next));
    }

    #[test]
    fn exact_for_cubic_polynomials() {
        // y' = 3x², y = x³ is integrated exactly by a fourth-order method.
        let field = |x: f64, _y: f64| 3.0 * x * x;

        let next = Rk4.step(&field, State::new(1.0, 1.0), 0.5).state;

        assert_relative_eq!(next.y, 1.5_f64.powi(3), max_relative = 1e-14);
    }

    #[test]
    fn midpoint_slopes_agree_when_field_ignores_y() {
        let field = |x: f64, _y: f64| x.sin();

        let slopes = Rk4.step(&field, State::new(0.3, 0.0), 0.1).slopes;

        assert_eq!(slopes.k2, slopes.k3);
    }
}
