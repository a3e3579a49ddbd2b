/// Errors that can occur during checked integration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("state became non-finite at step {step} (x = {x})")]
    NonFinite { step: usize, x: f64 },

    #[error("cannot store the history of {steps} steps")]
    Capacity { steps: usize },
}
