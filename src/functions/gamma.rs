//! Gamma SAS function, optionally truncated at a finite `ST_max`
//!
//! With a finite upper bound the incomplete gamma CDF is rescaled so that it
//! reaches exactly 1 at `ST_max`. The rescale factor depends only on the
//! parameters and is computed once per timestep at construction. It is kept
//! as a logarithm, since `P(a, x)` at a narrow truncation can be far below
//! `f64::MIN_POSITIVE`.

use crate::functions::columns::{at, column, require_columns, require_len, require_positive};
use crate::functions::traits::{SasCdf, SasCdfAll, SasInverseCdf};
use crate::math::special::{InverseLowerGamma, ln_lower_regularized_gamma};
use crate::support::configuration::{GAMMA_COLUMNS, GAMMA_TAG};
use crate::support::error::Result;
use ndarray::{Array1, ArrayD, ArrayView1, ArrayView2, ArrayViewD, Zip};

/// Truncated gamma selection for each timestep
#[derive(Debug, Clone)]
pub struct Gamma {
    st_min: Array1<f64>,
    st_max: Array1<f64>,
    shape: Array1<f64>,
    /// `1 / scale`
    rate: Array1<f64>,
    /// `-ln P(shape, rate * (ST_max - ST_min))`, or 0 when `ST_max` is infinite
    ln_rescale: Array1<f64>,
}

/// CDF given the scaled distance `x = rate * (st - st_min)` above the lower bound
fn truncated_gamma(st: f64, x: f64, st_max: f64, shape: f64, ln_rescale: f64) -> f64 {
    if x > 0.0 {
        if st < st_max {
            (ln_lower_regularized_gamma(shape, x) + ln_rescale)
                .exp()
                .min(1.0)
        } else {
            1.0
        }
    } else {
        0.0
    }
}

impl Gamma {
    /// Build from a parameter matrix with columns `ST_min`, `ST_max`, scale, shape
    ///
    /// `ST_max` may be `+inf` for an untruncated distribution.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if:
    /// - The matrix does not have four columns
    /// - Any scale or shape value is not positive and finite
    pub fn new(params: ArrayView2<'_, f64>) -> Result<Self> {
        require_columns(&params, GAMMA_COLUMNS, GAMMA_TAG)?;
        let st_min = column(&params, 0, "ST_min")?;
        let st_max = column(&params, 1, "ST_max")?;
        let scale = column(&params, 2, "scale")?;
        let shape = column(&params, 3, "shape")?;
        require_positive(&scale, "scale")?;
        require_positive(&shape, "shape")?;

        let rate = scale.mapv(f64::recip);
        let ln_rescale = Zip::from(&st_min)
            .and(&st_max)
            .and(&rate)
            .and(&shape)
            .map_collect(|&lo, &hi, &lambda, &alpha| {
                if hi.is_finite() {
                    -ln_lower_regularized_gamma(alpha, lambda * (hi - lo))
                } else {
                    0.0
                }
            });

        Ok(Self {
            st_min,
            st_max,
            shape,
            rate,
            ln_rescale,
        })
    }

    /// Number of timesteps in the parameter series
    pub fn timesteps(&self) -> usize {
        self.st_min.len()
    }

    /// Truncation normalization factor for each timestep
    pub fn rescale(&self) -> Array1<f64> {
        self.ln_rescale.mapv(f64::exp)
    }
}

impl SasCdf for Gamma {
    fn name(&self) -> &str {
        GAMMA_TAG
    }

    fn cdf_i(&self, st: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        let st_min = at(&self.st_min, i)?;
        let st_max = at(&self.st_max, i)?;
        let shape = at(&self.shape, i)?;
        let rate = at(&self.rate, i)?;
        let ln_rescale = at(&self.ln_rescale, i)?;
        Ok(st.mapv(|value| {
            truncated_gamma(value, rate * (value - st_min), st_max, shape, ln_rescale)
        }))
    }
}

impl SasCdfAll for Gamma {
    fn cdf_all(&self, st: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        require_len("cdf_all", self.timesteps(), st.len())?;
        let scaled = Zip::from(&st)
            .and(&self.st_min)
            .and(&self.rate)
            .map_collect(|&value, &lo, &lambda| lambda * (value - lo));
        Ok(Zip::from(&st)
            .and(&scaled)
            .and(&self.st_max)
            .and(&self.shape)
            .and(&self.ln_rescale)
            .map_collect(|&value, &x, &hi, &shape, &ln_rescale| {
                truncated_gamma(value, x, hi, shape, ln_rescale)
            }))
    }
}

impl SasInverseCdf for Gamma {
    /// P <= 0 (and NaN) maps to NaN, P >= 1 maps to +inf
    fn invcdf_i(&self, p: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        let st_min = at(&self.st_min, i)?;
        let shape = at(&self.shape, i)?;
        let rate = at(&self.rate, i)?;
        let ln_rescale = at(&self.ln_rescale, i)?;
        let inverse = InverseLowerGamma::new(shape)?;

        Ok(p.mapv(|probability| {
            let x = if probability > 0.0 {
                if probability < 1.0 {
                    inverse.invert_ln(probability.ln() - ln_rescale)
                } else {
                    f64::INFINITY
                }
            } else {
                f64::NAN
            };
            x / rate + st_min
        }))
    }
}
