use std::fmt;

use stepwise_core::{ScalarField, State};
use stepwise_solvers::{
    explicit::{Euler, Rk4, Stepper},
    integrate,
};

/// The integration methods under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Classical fourth-order Runge–Kutta.
    Rk4,
    /// Forward Euler.
    Euler,
}

impl Method {
    /// Every method, in report order.
    pub const ALL: [Method; 2] = [Method::Rk4, Method::Euler];

    /// Returns the display name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Rk4 => Rk4::NAME,
            Method::Euler => Euler::NAME,
        }
    }

    /// Builds a run of this method without taking any steps.
    pub(crate) fn prepare<F>(
        self,
        field: &F,
        initial: State,
        h: f64,
        steps: usize,
    ) -> Pending<'_, F>
    where
        F: ScalarField + ?Sized,
    {
        match self {
            Method::Rk4 => Pending::Rk4(integrate::trajectory(&Rk4, field, initial, h, steps)),
            Method::Euler => {
                Pending::Euler(integrate::trajectory(&Euler, field, initial, h, steps))
            }
        }
    }

    /// Runs this method with non-finite checking, returning the first failure.
    pub(crate) fn check<F>(
        self,
        field: &F,
        initial: State,
        h: f64,
        steps: usize,
    ) -> Result<(), integrate::Error>
    where
        F: ScalarField + ?Sized,
    {
        match self {
            Method::Rk4 => {
                integrate::solve_unobserved(&Rk4, field, initial, h, steps).map(|_| ())
            }
            Method::Euler => {
                integrate::solve_unobserved(&Euler, field, initial, h, steps).map(|_| ())
            }
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A constructed but not yet executed run.
///
/// Separating construction from [`Pending::finish`] lets callers time only
/// the stepping loop.
pub(crate) enum Pending<'a, F: ?Sized> {
    Rk4(integrate::Trajectory<'a, Rk4, F>),
    Euler(integrate::Trajectory<'a, Euler, F>),
}

impl<F> Pending<'_, F>
where
    F: ScalarField + ?Sized,
{
    /// Runs every step and returns the final state.
    pub(crate) fn finish(self) -> State {
        match self {
            Pending::Rk4(trajectory) => trajectory.finish(),
            Pending::Euler(trajectory) => trajectory.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_steppers() {
        assert_eq!(Method::Rk4.name(), "RK4");
        assert_eq!(Method::Euler.name(), "Euler");
    }

    #[test]
    fn display_honors_padding() {
        assert_eq!(format!("{:<5}|", Method::Rk4), "RK4  |");
        assert_eq!(format!("{}", Method::Euler), "Euler");
    }
}
