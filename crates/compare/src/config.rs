use stepwise_core::State;
use thiserror::Error;

/// The initial condition shared by the reference configurations, `y(1) = 5`.
pub const INITIAL: State = State::new(1.0, 5.0);

/// An immutable integration configuration: where to start, how far to step,
/// and how many steps to take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial: State,
    step_size: f64,
    steps: usize,
}

/// Errors that can occur when validating a configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step size must be finite and positive")]
    StepSize,

    #[error("initial state must be finite")]
    Initial,

    #[error("step count does not fit in usize")]
    Steps,
}

impl Config {
    /// Creates a new validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_size` is not finite and positive, or if the
    /// initial state is not finite.
    pub fn new(initial: State, step_size: f64, steps: usize) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }
        if !initial.is_finite() {
            return Err(ConfigError::Initial);
        }

        Ok(Self {
            initial,
            step_size,
            steps,
        })
    }

    /// The short run used for the detailed table: `h = 0.02`, 5 steps.
    #[must_use]
    pub const fn short() -> Self {
        Self {
            initial: INITIAL,
            step_size: 0.02,
            steps: 5,
        }
    }

    /// The long run used for the timing and accuracy comparison: `h = 0.003`,
    /// 1500 steps.
    #[must_use]
    pub const fn long() -> Self {
        Self {
            initial: INITIAL,
            step_size: 0.003,
            steps: 1500,
        }
    }

    /// Returns a copy with a different step size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::StepSize`] if `step_size` is not finite and positive.
    pub fn with_step_size(self, step_size: f64) -> Result<Self, ConfigError> {
        Self::new(self.initial, step_size, self.steps)
    }

    /// Returns a copy with a different step count.
    #[must_use]
    pub fn with_steps(self, steps: usize) -> Self {
        Self { steps, ..self }
    }

    /// Returns the configuration covering the same interval with half the
    /// step size and twice the steps.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Steps`] if twice the step count overflows, and
    /// [`ConfigError::StepSize`] if half the step size underflows to zero.
    pub fn refined(self) -> Result<Self, ConfigError> {
        let steps = self.steps.checked_mul(2).ok_or(ConfigError::Steps)?;
        Ok(self.with_step_size(self.step_size / 2.0)?.with_steps(steps))
    }

    /// Returns the initial state.
    #[must_use]
    pub fn initial(&self) -> State {
        self.initial
    }

    /// Returns the step size `h`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the length of the integration interval, `steps * h`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn horizon(&self) -> f64 {
        self.steps as f64 * self.step_size
    }
}
