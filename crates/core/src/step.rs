use crate::State;

/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets a stepper advance the type via
/// `derivative * delta`, where the derivative is with respect to `Delta`.
/// Explicit Runge–Kutta stages are built from repeated calls with fractional
/// deltas.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// A state advances along its slope `dy/dx`, with `x` moving by `delta`.
impl StepIntegrable<f64> for State {
    type Derivative = f64;

    fn step(&self, slope: f64, delta: f64) -> Self {
        State {
            x: self.x + delta,
            y: self.y + delta * slope,
        }
    }
}
