/// A point on a solution curve: the independent variable and the current
/// approximate value of the dependent variable.
///
/// States are never mutated in place. Each integration step derives a fresh
/// `State` from the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// The independent variable.
    pub x: f64,
    /// The dependent variable at `x`.
    pub y: f64,
}

impl State {
    /// Creates a new state at `(x, y)`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The four slope samples used to build one classical Runge–Kutta update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeSet {
    /// Slope at the start of the interval.
    pub k1: f64,
    /// Slope at the midpoint, using `k1`.
    pub k2: f64,
    /// Slope at the midpoint, using `k2`.
    pub k3: f64,
    /// Slope at the end of the interval, using `k3`.
    pub k4: f64,
}

impl SlopeSet {
    /// Returns the `1, 2, 2, 1` weighted sum of the slopes.
    ///
    /// The Runge–Kutta update scales this sum by `h / 6`.
    #[must_use]
    pub fn weighted_sum(&self) -> f64 {
        self.k1 + 2.0 * self.k2 + 2.0 * self.k3 + self.k4
    }
}
