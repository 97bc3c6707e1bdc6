//! Lookup table SAS function: piecewise-linear CDF through explicit breakpoints
//!
//! The table is shared by every timestep, so the timestep index is ignored.

use crate::functions::columns::{column, require_columns};
use crate::functions::traits::{SasCdf, SasCdfAll};
use crate::math::interpolation::Linear;
use crate::support::configuration::{
    LOOKUP_TABLE_COLUMNS, LOOKUP_TABLE_TAG, MIN_LOOKUP_BREAKPOINTS,
};
use crate::support::error::{Result, computation_error, invalid_lookup_table};
use ndarray::{Array1, ArrayD, ArrayView1, ArrayView2, ArrayViewD};

/// Piecewise-linear CDF defined by storage breakpoints `S_T` and
/// probabilities Omega
#[derive(Debug, Clone)]
pub struct LookupTable {
    interpolator: Linear,
}

impl LookupTable {
    /// Build from a parameter matrix with columns `S_T`, Omega
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the matrix does not have two
    /// columns, and an invalid lookup table error if:
    /// - Fewer than two breakpoints are given
    /// - The first Omega is not exactly 0 or the last is not exactly 1
    /// - Omega leaves [0, 1] or decreases
    /// - `S_T` is not finite and strictly increasing
    pub fn new(params: ArrayView2<'_, f64>) -> Result<Self> {
        require_columns(&params, LOOKUP_TABLE_COLUMNS, LOOKUP_TABLE_TAG)?;
        let s_t = column(&params, 0, "S_T")?;
        let omega = column(&params, 1, "Omega")?;

        if s_t.len() < MIN_LOOKUP_BREAKPOINTS {
            return Err(invalid_lookup_table(&format!(
                "need at least {MIN_LOOKUP_BREAKPOINTS} breakpoints, got {}",
                s_t.len()
            )));
        }

        if !has_exact_endpoints(&omega) {
            return Err(invalid_lookup_table(
                &"the first and last value of S_T must correspond with probability 0 and 1 respectively",
            ));
        }

        if omega.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(invalid_lookup_table(&"Omega must lie within [0, 1]"));
        }

        if omega.iter().zip(omega.iter().skip(1)).any(|(lo, hi)| hi < lo) {
            return Err(invalid_lookup_table(&"Omega must be non-decreasing"));
        }

        let interpolator =
            Linear::new(s_t.to_vec(), omega.to_vec()).map_err(|error| invalid_lookup_table(&error))?;

        Ok(Self { interpolator })
    }

    /// Smallest breakpoint
    pub fn st_min(&self) -> f64 {
        self.interpolator.lower_bound()
    }

    /// Largest breakpoint
    pub fn st_max(&self) -> f64 {
        self.interpolator.upper_bound()
    }

    /// CDF of one storage value
    ///
    /// Values at or below the first breakpoint give 0 and values at or above
    /// the last give 1; everything else is interpolated strictly.
    fn evaluate(&self, st: f64) -> Result<f64> {
        if st <= self.st_min() {
            return Ok(0.0);
        }
        if st >= self.st_max() {
            return Ok(1.0);
        }
        self.interpolator
            .evaluate(st)
            .map_err(|error| computation_error("lookup table interpolation", &error))
    }
}

/// Omega must start at exactly 0 and end at exactly 1
#[allow(clippy::float_cmp)]
fn has_exact_endpoints(omega: &Array1<f64>) -> bool {
    omega.first() == Some(&0.0) && omega.last() == Some(&1.0)
}

impl SasCdf for LookupTable {
    fn name(&self) -> &str {
        LOOKUP_TABLE_TAG
    }

    fn cdf_i(&self, st: ArrayViewD<'_, f64>, _i: usize) -> Result<ArrayD<f64>> {
        let values = st
            .iter()
            .map(|&value| self.evaluate(value))
            .collect::<Result<Vec<f64>>>()?;
        ArrayD::from_shape_vec(st.raw_dim(), values)
            .map_err(|error| computation_error("lookup table interpolation", &error))
    }
}

impl SasCdfAll for LookupTable {
    fn cdf_all(&self, st: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        st.iter()
            .map(|&value| self.evaluate(value))
            .collect::<Result<Array1<f64>>>()
    }
}
