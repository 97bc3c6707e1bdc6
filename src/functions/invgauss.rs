//! Inverse-Gaussian SAS function evaluated through complementary error functions

use crate::functions::columns::{at, column, require_min_columns, require_positive};
use crate::functions::traits::SasCdf;
use crate::math::special::erfc;
use crate::support::configuration::{INVGAUSS_MIN_COLUMNS, INVGAUSS_TAG};
use crate::support::error::Result;
use ndarray::{Array1, ArrayD, ArrayView2, ArrayViewD};

/// Inverse-Gaussian selection with location, scale and mean shape `mu`
///
/// Only single-timestep evaluation is provided.
#[derive(Debug, Clone)]
pub struct InvGauss {
    loc: Array1<f64>,
    scale: Array1<f64>,
    mu: Array1<f64>,
}

/// Standard inverse-Gaussian CDF with unit shape at `x = (st - loc) / scale`
fn inverse_gaussian(x: f64, mu: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }

    let spread = (2.0 * x).sqrt() * mu;
    let lower = erfc((mu - x) / spread);
    // e^(2/mu) overflows long before the tail underflows, so combine in log space
    let tail = erfc((x + mu) / spread);
    let upper = if tail > 0.0 {
        (2.0 / mu + tail.ln()).exp()
    } else {
        0.0
    };

    (0.5 * (lower + upper)).clamp(0.0, 1.0)
}

impl InvGauss {
    /// Build from a parameter matrix with columns loc, scale, mu
    ///
    /// Columns beyond the third are accepted and ignored.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if:
    /// - The matrix has fewer than three columns
    /// - Any scale or mu value is not positive and finite
    pub fn new(params: ArrayView2<'_, f64>) -> Result<Self> {
        require_min_columns(&params, INVGAUSS_MIN_COLUMNS, INVGAUSS_TAG)?;
        let loc = column(&params, 0, "loc")?;
        let scale = column(&params, 1, "scale")?;
        let mu = column(&params, 2, "mu")?;
        require_positive(&scale, "scale")?;
        require_positive(&mu, "mu")?;

        Ok(Self { loc, scale, mu })
    }

    /// Number of timesteps in the parameter series
    pub fn timesteps(&self) -> usize {
        self.loc.len()
    }
}

impl SasCdf for InvGauss {
    fn name(&self) -> &str {
        INVGAUSS_TAG
    }

    fn cdf_i(&self, st: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        let loc = at(&self.loc, i)?;
        let scale = at(&self.scale, i)?;
        let mu = at(&self.mu, i)?;
        Ok(st.mapv(|value| inverse_gaussian((value - loc) / scale, mu)))
    }
}
