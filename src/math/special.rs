//! Special functions used by the closed-form SAS functions
//!
//! The regularized lower incomplete gamma function is evaluated in log space.
//! Below `x = a + 1` this uses the power series directly, since `statrs`
//! rounds arguments under its absolute tolerance (about 1e-15) to zero and
//! underflows once `x^a` drops below `f64::MIN_POSITIVE`. Above it the `statrs`
//! continued fraction is used as is.

use crate::support::error::{Result, invalid_parameter};
use statrs::function::{erf, gamma};

// Power series truncation for P(a, x) below x = a + 1
const SERIES_MAX_TERMS: usize = 100_000;

// Newton iteration limits for the incomplete gamma inverse, in ln x
const INVERSE_MAX_ITERATIONS: usize = 100;
const INVERSE_LOG_TOLERANCE: f64 = 1e-14;

/// `ln P(a, e^t)` for a validated shape, given `ln Γ(a + 1)`
fn ln_lower_gamma_at(shape: f64, ln_gamma_shape_plus_one: f64, log_x: f64) -> f64 {
    let x = log_x.exp();
    if x.is_infinite() {
        return 0.0;
    }

    if x < shape + 1.0 {
        // P(a, x) = x^a e^-x / Γ(a + 1) * Σ x^n / ((a + 1) ... (a + n))
        let mut term = 1.0_f64;
        let mut sum = 1.0_f64;
        for n in 1..=SERIES_MAX_TERMS {
            term *= x / (shape + n as f64);
            sum += term;
            if term <= sum * f64::EPSILON {
                break;
            }
        }
        (shape.mul_add(log_x, -x - ln_gamma_shape_plus_one) + sum.ln()).min(0.0)
    } else {
        gamma::gamma_lr(shape, x).ln().min(0.0)
    }
}

/// Natural log of the regularized lower incomplete gamma function
///
/// Returns `-inf` for `x <= 0`, 0 for `x = +inf` and NaN for NaN input or a
/// shape that is not positive and finite.
pub fn ln_lower_regularized_gamma(shape: f64, x: f64) -> f64 {
    if x.is_nan() || !(shape.is_finite() && shape > 0.0) {
        return f64::NAN;
    }
    if x <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if x.is_infinite() {
        return 0.0;
    }
    ln_lower_gamma_at(shape, gamma::ln_gamma(shape + 1.0), x.ln())
}

/// Regularized lower incomplete gamma function P(a, x)
///
/// Returns 0 for `x <= 0` and 1 for `x = +inf`. NaN input or a shape that is
/// not positive and finite gives NaN.
pub fn lower_regularized_gamma(shape: f64, x: f64) -> f64 {
    ln_lower_regularized_gamma(shape, x).exp()
}

/// Complementary error function
pub fn erfc(x: f64) -> f64 {
    erf::erfc(x)
}

/// Inverse of the regularized lower incomplete gamma function for one shape
///
/// Newton iteration on `ln P(a, e^t) = ln q` in `t = ln x`. The function is
/// concave in `t` (log-gamma densities are log-concave), and the start
/// `t0 = (ln q + ln Γ(a + 1)) / a` lies at or below the root because
/// `P(a, x) <= x^a / Γ(a + 1)`. The iterates therefore increase monotonically
/// onto the root without a bracket.
#[derive(Debug, Clone, Copy)]
pub struct InverseLowerGamma {
    shape: f64,
    ln_gamma_shape_plus_one: f64,
}

impl InverseLowerGamma {
    /// Prepare the inverse for the given shape parameter
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the shape is not positive and finite
    pub fn new(shape: f64) -> Result<Self> {
        if !(shape.is_finite() && shape > 0.0) {
            return Err(invalid_parameter(
                "shape",
                &shape,
                &"must be positive and finite",
            ));
        }
        Ok(Self {
            shape,
            ln_gamma_shape_plus_one: gamma::ln_gamma(shape + 1.0),
        })
    }

    /// `d ln P / d ln x = x p(x) / P(x)` at `ln x`, given `ln P`
    fn log_slope(&self, log_x: f64, ln_p: f64) -> f64 {
        // ln Γ(a) = ln Γ(a + 1) - ln a
        let ln_x_density = self.shape.mul_add(
            log_x,
            self.shape.ln() - log_x.exp() - self.ln_gamma_shape_plus_one,
        );
        (ln_x_density - ln_p).exp()
    }

    /// Solve `P(shape, x) = q` for x
    ///
    /// Returns 0 for `q <= 0`, +inf for `q >= 1` and NaN for NaN input.
    pub fn invert(&self, q: f64) -> f64 {
        if q.is_nan() {
            return f64::NAN;
        }
        if q <= 0.0 {
            return 0.0;
        }
        self.invert_ln(q.ln())
    }

    /// Solve `ln P(shape, x) = ln_q` for x
    ///
    /// Accepts targets far below `f64::MIN_POSITIVE`, as produced by heavily
    /// truncated distributions. Returns 0 for `ln_q = -inf`, +inf for
    /// `ln_q >= 0` and NaN for NaN input. Roots below the smallest subnormal
    /// round to 0.
    pub fn invert_ln(&self, ln_q: f64) -> f64 {
        if ln_q.is_nan() {
            return f64::NAN;
        }
        if ln_q >= 0.0 {
            return f64::INFINITY;
        }
        if ln_q.is_infinite() {
            return 0.0;
        }

        let mut log_x = (ln_q + self.ln_gamma_shape_plus_one) / self.shape;
        for _ in 0..INVERSE_MAX_ITERATIONS {
            let ln_p = ln_lower_gamma_at(self.shape, self.ln_gamma_shape_plus_one, log_x);
            let slope = self.log_slope(log_x, ln_p);
            if !(slope.is_finite() && slope > 0.0) {
                break;
            }

            let step = (ln_p - ln_q) / slope;
            log_x -= step;
            if step.abs() <= INVERSE_LOG_TOLERANCE * log_x.abs().max(1.0) {
                break;
            }
        }
        log_x.exp()
    }
}
