/// The right-hand side `f(x, y)` of a first-order ODE `y' = f(x, y)`.
///
/// Fields must be pure: the same `(x, y)` always yields the same slope.
///
/// Evaluation follows IEEE floating-point semantics. A field that is singular
/// at some point returns the resulting infinity or NaN rather than failing;
/// the checked integration drivers detect non-finite states downstream.
///
/// Closures of the form `Fn(f64, f64) -> f64` implement this trait.
pub trait ScalarField {
    /// Returns the slope `dy/dx` at `(x, y)`.
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

impl<F> ScalarField for F
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// The field `f(x, y) = y / (e^x - 1)`.
///
/// The denominator vanishes at `x = 0`, where evaluation yields `±inf` for a
/// nonzero `y` and NaN for `y = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpRatioField;

impl ScalarField for ExpRatioField {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        y / (x.exp() - 1.0)
    }
}
