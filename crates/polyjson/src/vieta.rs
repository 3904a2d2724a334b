//! Vieta's formulas for a quadratic `a x^2 + b x + c = 0`:
//! `alpha + beta = -b/a` and `alpha * beta = c/a`.

/// Derive the constant coefficient from the roots: `c = a * (alpha * beta)`.
pub fn constant_from_roots(a: f64, alpha: f64, beta: f64) -> f64 {
    a * (alpha * beta)
}

/// The value `alpha + beta` should equal for consistent coefficients.
pub fn sum_of_roots(a: f64, b: f64) -> f64 {
    -b / a
}
