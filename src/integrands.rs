//! The integrands the estimators are exercised with.

/// `f(x) = e^(-x²)`.
pub fn gaussian(x: f64) -> f64 {
    (-x * x).exp()
}

/// `f(x, y) = e^(-(x² + y²))`.
pub fn gaussian_2d(x: f64, y: f64) -> f64 {
    (-(x * x + y * y)).exp()
}

/// Upper quarter of the unit circle, `f(x) = sqrt(1 - x²)`.
///
/// Its integral over `[0, 1]` is `π/4`.
pub fn quarter_circle(x: f64) -> f64 {
    (1.0 - x * x).sqrt()
}

/// `∫₀¹ e^(-x²) dx` to ten digits.
pub const GAUSSIAN_INTEGRAL_01: f64 = 0.746_824_132_8;

/// `∫₀¹ ∫₀¹ e^(-(x² + y²)) dx dy` to ten digits.
pub const GAUSSIAN_2D_INTEGRAL_UNIT_SQUARE: f64 = 0.557_746_285_9;
