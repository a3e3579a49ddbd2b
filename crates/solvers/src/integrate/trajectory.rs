use std::iter::FusedIterator;

use stepwise_core::{ScalarField, State};

use super::Record;
use crate::explicit::Stepper;

/// A lazy, single-pass sequence of integration records.
///
/// Created by [`trajectory`](super::trajectory). Yields the initial state and
/// then one record per step, computing each step only when it is requested.
/// Once exhausted it cannot be restarted.
#[derive(Debug)]
pub struct Trajectory<'a, T, F: ?Sized> {
    stepper: &'a T,
    field: &'a F,
    h: f64,
    steps: usize,
    state: State,
    emitted: usize,
}

impl<'a, T, F> Trajectory<'a, T, F>
where
    T: Stepper,
    F: ScalarField + ?Sized,
{
    pub(super) fn new(stepper: &'a T, field: &'a F, initial: State, h: f64, steps: usize) -> Self {
        Self {
            stepper,
            field,
            h,
            steps,
            state: initial,
            emitted: 0,
        }
    }

    /// Runs the remaining steps and returns the final state.
    ///
    /// Intermediate records are discarded without being stored.
    #[must_use]
    pub fn finish(self) -> State {
        let last = self.state;
        self.fold(last, |_, record| record.state)
    }
}

impl<T, F> Iterator for Trajectory<'_, T, F>
where
    T: Stepper,
    F: ScalarField + ?Sized,
{
    type Item = Record<T::Slopes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted == 0 {
            self.emitted = 1;
            return Some(Record::initial(self.state));
        }

        if self.emitted > self.steps {
            return None;
        }

        let advance = self.stepper.step(self.field, self.state, self.h);
        let record = Record {
            step: self.emitted,
            state: advance.state,
            slopes: Some(advance.slopes),
        };

        self.state = advance.state;
        self.emitted += 1;

        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // `steps + 1` records overflow `usize` only before the first is emitted.
        let remaining = match self.emitted {
            0 => self.steps.checked_add(1),
            emitted => Some(self.steps.saturating_sub(emitted - 1)),
        };

        match remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

/// The length saturates at `usize::MAX` for a trajectory of `usize::MAX`
/// steps that has not started yet.
impl<T, F> ExactSizeIterator for Trajectory<'_, T, F>
where
    T: Stepper,
    F: ScalarField + ?Sized,
{
    fn len(&self) -> usize {
        self.size_hint().0
    }
}

impl<T, F> FusedIterator for Trajectory<'_, T, F>
where
    T: Stepper,
    F: ScalarField + ?Sized,
{
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use stepwise_core::ExpRatioField;

    use crate::explicit::{Euler, Rk4};
    use crate::integrate::trajectory;

    use super::*;

    #[test]
    fn reports_exact_length() {
        let mut lazy = trajectory(&Euler, &ExpRatioField, State::new(1.0, 5.0), 0.1, 3);

        assert_eq!(lazy.len(), 4);
        lazy.next();
        assert_eq!(lazy.len(), 3);
        assert_eq!(lazy.by_ref().count(), 3);
        assert_eq!(lazy.len(), 0);
        assert!(lazy.next().is_none());
    }

    #[test]
    fn length_of_maximal_trajectory_saturates() {
        let initial = State::new(1.0, 5.0);
        let mut lazy = trajectory(&Euler, &ExpRatioField, initial, 0.1, usize::MAX);

        assert_eq!(lazy.size_hint(), (usize::MAX, None));
        assert_eq!(lazy.len(), usize::MAX);

        lazy.next();
        assert_eq!(lazy.size_hint(), (usize::MAX, Some(usize::MAX)));
        lazy.next();
        assert_eq!(lazy.len(), usize::MAX - 1);
    }

    #[test]
    fn computes_steps_on_demand() {
        let calls = std::cell::Cell::new(0_usize);
        let field = |_x: f64, y: f64| {
            calls.set(calls.get() + 1);
            y
        };

        let mut lazy = trajectory(&Rk4, &field, State::new(0.0, 1.0), 0.1, 10);

        lazy.next();
        assert_eq!(calls.get(), 0);
        lazy.next();
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn finish_returns_final_state() {
        let initial = State::new(1.0, 5.0);

        let finished = trajectory(&Rk4, &ExpRatioField, initial, 0.003, 1500).finish();
        let last = trajectory(&Rk4, &ExpRatioField, initial, 0.003, 1500)
            .last()
            .map(|record| record.state);

        assert_eq!(Some(finished), last);
        assert_relative_eq!(finished.x, 5.5, max_relative = 1e-9);
    }

    #[test]
    fn finish_after_exhaustion_keeps_last_state() {
        let mut lazy = trajectory(&Euler, &ExpRatioField, State::new(1.0, 5.0), 0.5, 2);
        let last = lazy.by_ref().last().map(|record| record.state);

        assert_eq!(Some(lazy.finish()), last);
    }

    #[test]
    fn zero_steps_yields_only_initial() {
        let records: Vec<_> =
            trajectory(&Euler, &ExpRatioField, State::new(2.0, 1.0), 0.1, 0).collect();

        assert_eq!(records, vec![Record::initial(State::new(2.0, 1.0))]);
    }
}
