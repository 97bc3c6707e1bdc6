//! Kumaraswamy SAS function on `[ST_min, ST_max]`

use crate::functions::columns::{at, column, require_columns, require_len};
use crate::functions::traits::{SasCdf, SasCdfAll};
use crate::support::configuration::{KUMARASWAMY_COLUMNS, KUMARASWAMY_TAG};
use crate::support::error::Result;
use ndarray::{Array1, ArrayD, ArrayView1, ArrayView2, ArrayViewD, Zip};
use tracing::debug;

/// Kumaraswamy selection `1 - (1 - u^a)^b` with `u` the position of ST
/// inside `[ST_min, ST_max]`
#[derive(Debug, Clone)]
pub struct Kumaraswamy {
    st_min: Array1<f64>,
    st_max: Array1<f64>,
    a: Array1<f64>,
    b: Array1<f64>,
}

/// CDF of one storage value for one parameter set
///
/// An inverted range (`st_max < st_min`) gives 0 for every storage value.
/// The upper clamp is dropped and the normalized position, which is negative
/// above `st_min`, is clamped to 0 where the formula is 0.
fn kumaraswamy(st: f64, st_min: f64, st_max: f64, a: f64, b: f64) -> f64 {
    if st <= st_min {
        return 0.0;
    }
    if st_max >= st_min && st >= st_max {
        return 1.0;
    }
    let u = ((st - st_min) / (st_max - st_min)).clamp(0.0, 1.0);
    1.0 - (1.0 - u.powf(a)).powf(b)
}

impl Kumaraswamy {
    /// Build from a parameter matrix with columns `ST_min`, `ST_max`, a, b
    ///
    /// Rows with `ST_max < ST_min` are accepted and select nothing: their CDF
    /// is 0 everywhere.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the matrix does not have four columns
    pub fn new(params: ArrayView2<'_, f64>) -> Result<Self> {
        require_columns(&params, KUMARASWAMY_COLUMNS, KUMARASWAMY_TAG)?;
        let st_min = column(&params, 0, "ST_min")?;
        let st_max = column(&params, 1, "ST_max")?;
        let a = column(&params, 2, "a")?;
        let b = column(&params, 3, "b")?;

        let inverted = Zip::from(&st_min)
            .and(&st_max)
            .fold(0_usize, |count, lo, hi| count + usize::from(hi < lo));
        if inverted > 0 {
            debug!(inverted, "kumaraswami rows with ST_max below ST_min");
        }

        Ok(Self {
            st_min,
            st_max,
            a,
            b,
        })
    }

    /// Number of timesteps in the parameter series
    pub fn timesteps(&self) -> usize {
        self.st_min.len()
    }
}

impl SasCdf for Kumaraswamy {
    fn name(&self) -> &str {
        KUMARASWAMY_TAG
    }

    fn cdf_i(&self, st: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        let st_min = at(&self.st_min, i)?;
        let st_max = at(&self.st_max, i)?;
        let a = at(&self.a, i)?;
        let b = at(&self.b, i)?;
        Ok(st.mapv(|value| kumaraswamy(value, st_min, st_max, a, b)))
    }
}

impl SasCdfAll for Kumaraswamy {
    fn cdf_all(&self, st: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        require_len("cdf_all", self.timesteps(), st.len())?;
        Ok(Zip::from(&st)
            .and(&self.st_min)
            .and(&self.st_max)
            .and(&self.a)
            .and(&self.b)
            .map_collect(|&value, &lo, &hi, &a, &b| kumaraswamy(value, lo, hi, a, b)))
    }
}
