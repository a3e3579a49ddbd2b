use stepwise_core::State;

/// A state produced by the integrator.
///
/// Step 0 is the initial state, which has no slopes because no stepping has
/// occurred yet. Steps 1..N carry the slopes computed to reach them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<S> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The state at this step.
    pub state: State,

    /// Slopes from the step that produced this state.
    pub slopes: Option<S>,
}

impl<S> Record<S> {
    /// Creates the record for an initial state.
    #[must_use]
    pub fn initial(state: State) -> Self {
        Self {
            step: 0,
            state,
            slopes: None,
        }
    }
}
