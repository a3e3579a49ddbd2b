use stepwise_core::State;

use super::Record;

/// The result of a checked fixed-step integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// Every record from the run, including the initial state.
    pub history: Vec<Record<S>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Returns the state after the last step.
    #[must_use]
    pub fn final_state(&self) -> State {
        // History always holds the initial record plus one per step.
        self.history[self.steps].state
    }
}
