use stepwise_core::{ExactSolution, Problem, ScalarField, SlopeSet, State};
use stepwise_solvers::{
    explicit::Rk4,
    integrate::{self, Record},
};

use crate::{Config, Error, Method};

/// One line of the detailed Runge–Kutta table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    /// The step index, starting at 0 for the initial state.
    pub index: usize,

    /// The approximate state after `index` steps.
    pub state: State,

    /// Slopes used to reach this state, absent for the initial row.
    pub slopes: Option<SlopeSet>,

    /// The exact solution at `state.x`.
    pub exact: f64,
}

/// Integrates `problem` with RK4 and returns one row per state.
///
/// Produces `config.steps() + 1` rows. Row 0 is the initial state.
///
/// # Errors
///
/// Returns [`Error::Integrate`] if a state becomes non-finite or the rows
/// cannot be stored, and
/// [`Error::Exact`] if the exact solution is not finite at some row.
pub fn tabulate<F, S>(problem: &Problem<F, S>, config: &Config) -> Result<Vec<Row>, Error>
where
    F: ScalarField,
    S: ExactSolution,
{
    tracing::debug!(
        h = config.step_size(),
        steps = config.steps(),
        "tabulating RK4 run"
    );

    let solution = integrate::solve(
        &Rk4,
        &problem.field,
        config.initial(),
        config.step_size(),
        config.steps(),
        |record: &Record<SlopeSet>| {
            tracing::trace!(step = record.step, x = record.state.x, y = record.state.y);
        },
    )
    .map_err(Error::integrate(Method::Rk4))?;

    solution
        .history
        .into_iter()
        .map(|record| {
            let exact = problem.exact.evaluate(record.state.x);
            if !exact.is_finite() {
                return Err(Error::Exact { x: record.state.x });
            }

            Ok(Row {
                index: record.step,
                state: record.state,
                slopes: record.slopes,
                exact,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use stepwise_core::ExpRatioProblem;

    #[test]
    fn reference_table() {
        let rows =
            tabulate(&ExpRatioProblem::default(), &Config::short()).expect("should tabulate");

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].slopes, None);
        assert_eq!(rows[0].state, State::new(1.0, 5.0));
        assert_eq!(rows[0].exact, 5.0);

        let expected = [
            (1.02, 5.057_619_6, [2.909_883_5, 2.881_012_8, 2.880_847_4, 2.852_262_5], 5.057_619_6),
            (1.04, 5.114_098_2, [2.852_264_0, 2.823_962_4, 2.823_805_3, 2.795_784_0], 5.114_098_2),
            (1.06, 5.169_458_4, [2.795_785_4, 2.768_041_8, 2.767_892_5, 2.740_423_8], 5.169_458_4),
            (1.08, 5.223_722_5, [2.740_425_1, 2.713_228_7, 2.713_086_7, 2.686_159_9], 5.223_722_5),
            (1.10, 5.276_912_0, [2.686_161_1, 2.659_501_1, 2.659_366_1, 2.632_970_4], 5.276_912_0),
        ];

        for (row, (x, y, k, exact)) in rows[1..].iter().zip(expected) {
            let slopes = row.slopes.expect("stepped rows carry slopes");
            assert_abs_diff_eq!(row.state.x, x, epsilon = 1e-12);
            assert_abs_diff_eq!(row.state.y, y, epsilon = 1e-6);
            assert_abs_diff_eq!(slopes.k1, k[0], epsilon = 1e-6);
            assert_abs_diff_eq!(slopes.k2, k[1], epsilon = 1e-6);
            assert_abs_diff_eq!(slopes.k3, k[2], epsilon = 1e-6);
            assert_abs_diff_eq!(slopes.k4, k[3], epsilon = 1e-6);
            assert_abs_diff_eq!(row.exact, exact, epsilon = 1e-6);
        }
    }

    #[test]
    fn indices_are_sequential() {
        let config = Config::short().with_steps(12);

        let rows = tabulate(&ExpRatioProblem::default(), &config).expect("should tabulate");

        let indices: Vec<_> = rows.iter().map(|row| row.index).collect();
        assert_eq!(indices, (0..=12).collect::<Vec<_>>());
    }

    #[test]
    fn deterministic() {
        let problem = ExpRatioProblem::default();

        let first = tabulate(&problem, &Config::short()).expect("should tabulate");
        let second = tabulate(&problem, &Config::short()).expect("should tabulate");

        assert_eq!(first, second);
    }

    #[test]
    fn singular_field_is_reported() {
        let problem = ExpRatioProblem::exp_ratio(State::new(0.5, 1.0));
        let config = Config::new(State::new(-0.04, 1.0), 0.02, 5).expect("valid config");

        let error = tabulate(&problem, &config).expect_err("passes through x = 0");

        assert!(matches!(
            error,
            Error::Integrate {
                method: Method::Rk4,
                ..
            }
        ));
    }

    #[test]
    fn unstorable_table_is_an_error() {
        let config = Config::short().with_steps(usize::MAX);

        let error = tabulate(&ExpRatioProblem::default(), &config)
            .expect_err("usize::MAX + 1 rows cannot be stored");

        assert!(matches!(
            error,
            Error::Integrate {
                method: Method::Rk4,
                source: integrate::Error::Capacity { steps: usize::MAX },
            }
        ));
    }
}
