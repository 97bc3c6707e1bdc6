//! Uniform SAS function: a linear ramp between `ST_min` and `ST_max`

use crate::functions::columns::{at, column, require_columns, require_len};
use crate::functions::traits::{SasCdf, SasCdfAll, SasInverseCdf};
use crate::support::configuration::{UNIFORM_COLUMNS, UNIFORM_TAG};
use crate::support::error::Result;
use ndarray::{Array1, ArrayD, ArrayView1, ArrayView2, ArrayViewD, Zip};

/// Uniform selection over `[ST_min, ST_max]` for each timestep
#[derive(Debug, Clone)]
pub struct Uniform {
    st_min: Array1<f64>,
    st_max: Array1<f64>,
    /// `1 / (ST_max - ST_min)`
    rate: Array1<f64>,
}

/// Linear ramp with exclusive bounds: `st == min` gives 0, `st == max` gives 1
fn ramp(st: f64, st_min: f64, st_max: f64, rate: f64) -> f64 {
    if st < st_max {
        if st > st_min {
            rate * (st - st_min)
        } else {
            0.0
        }
    } else {
        1.0
    }
}

impl Uniform {
    /// Build from a parameter matrix with columns `ST_min`, `ST_max`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the matrix does not have two columns
    pub fn new(params: ArrayView2<'_, f64>) -> Result<Self> {
        require_columns(&params, UNIFORM_COLUMNS, UNIFORM_TAG)?;
        let st_min = column(&params, 0, "ST_min")?;
        let st_max = column(&params, 1, "ST_max")?;
        let rate = Zip::from(&st_min)
            .and(&st_max)
            .map_collect(|&lo, &hi| 1.0 / (hi - lo));

        Ok(Self {
            st_min,
            st_max,
            rate,
        })
    }

    /// Number of timesteps in the parameter series
    pub fn timesteps(&self) -> usize {
        self.st_min.len()
    }

    /// Precomputed ramp slope for each timestep
    pub fn rate(&self) -> ArrayView1<'_, f64> {
        self.rate.view()
    }
}

impl SasCdf for Uniform {
    fn name(&self) -> &str {
        UNIFORM_TAG
    }

    fn cdf_i(&self, st: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        let st_min = at(&self.st_min, i)?;
        let st_max = at(&self.st_max, i)?;
        let rate = at(&self.rate, i)?;
        Ok(st.mapv(|value| ramp(value, st_min, st_max, rate)))
    }
}

impl SasCdfAll for Uniform {
    fn cdf_all(&self, st: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        require_len("cdf_all", self.timesteps(), st.len())?;
        Ok(Zip::from(&st)
            .and(&self.st_min)
            .and(&self.st_max)
            .and(&self.rate)
            .map_collect(|&value, &lo, &hi, &rate| ramp(value, lo, hi, rate)))
    }
}

impl SasInverseCdf for Uniform {
    /// Probabilities are clamped to [0, 1], so P < 0 maps to `ST_min` and
    /// P > 1 to `ST_max`. A NaN probability stays NaN rather than mapping to
    /// `ST_max`.
    fn invcdf_i(&self, p: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        let st_min = at(&self.st_min, i)?;
        let rate = at(&self.rate, i)?;
        Ok(p.mapv(|probability| probability.clamp(0.0, 1.0) / rate + st_min))
    }
}
