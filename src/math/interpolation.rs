//! Piecewise-linear interpolation over strictly increasing breakpoints
//!
//! Evaluation is strict: points outside the breakpoint range are an error
//! rather than an extrapolation

use std::error::Error;
use std::fmt;

/// Error type for interpolation operations
#[derive(Debug, Clone)]
pub struct InterpolationError {
    message: String,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interpolation error: {}", self.message)
    }
}

impl Error for InterpolationError {}

impl InterpolationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Linear interpolation between consecutive data points
#[derive(Debug, Clone)]
pub struct Linear {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl Linear {
    /// Create a new linear interpolation from x and y values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `x_values` and `y_values` have different lengths
    /// - Fewer than 2 data points are provided
    /// - The x values are not finite and strictly increasing
    pub fn new(x_values: Vec<f64>, y_values: Vec<f64>) -> Result<Self, InterpolationError> {
        if x_values.len() != y_values.len() {
            return Err(InterpolationError::new(
                "x_values and y_values must have the same length",
            ));
        }

        if x_values.len() < 2 {
            return Err(InterpolationError::new(
                "Need at least 2 points for interpolation",
            ));
        }

        if x_values.iter().any(|x| !x.is_finite()) {
            return Err(InterpolationError::new("x values must be finite"));
        }

        if x_values.windows(2).any(|pair| match pair {
            [lo, hi] => hi <= lo,
            _ => false,
        }) {
            return Err(InterpolationError::new(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self { x_values, y_values })
    }

    /// Smallest x value accepted by [`Self::evaluate`]
    pub fn lower_bound(&self) -> f64 {
        self.x_values.first().copied().unwrap_or(f64::NAN)
    }

    /// Largest x value accepted by [`Self::evaluate`]
    pub fn upper_bound(&self) -> f64 {
        self.x_values.last().copied().unwrap_or(f64::NAN)
    }

    /// Evaluate the interpolation at point x
    ///
    /// Uses binary search to find the enclosing segment, then blends
    /// the segment's end values linearly.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - x lies outside the data range or is NaN
    /// - Internal index access fails
    pub fn evaluate(&self, x: f64) -> Result<f64, InterpolationError> {
        let first_x = self.lower_bound();
        let last_x = self.upper_bound();

        if !(first_x..=last_x).contains(&x) {
            return Err(InterpolationError::new(format!(
                "x = {x} is outside the interpolation range [{first_x}, {last_x}]"
            )));
        }

        let n = self.x_values.len();
        let mut klo = 0;
        let mut khi = n - 1;
        while khi - klo > 1 {
            let k = usize::midpoint(khi, klo);
            let x_k = self
                .x_values
                .get(k)
                .ok_or_else(|| InterpolationError::new("Invalid index"))?;
            if *x_k > x {
                khi = k;
            } else {
                klo = k;
            }
        }

        let x_khi = self
            .x_values
            .get(khi)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;
        let x_klo = self
            .x_values
            .get(klo)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;
        let y_khi = self
            .y_values
            .get(khi)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;
        let y_klo = self
            .y_values
            .get(klo)
            .ok_or_else(|| InterpolationError::new("Invalid index"))?;

        let b = (x - x_klo) / (x_khi - x_klo);

        Ok(b.mul_add(y_khi - y_klo, *y_klo))
    }
}
