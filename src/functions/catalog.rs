//! SAS function backed by a named catalog distribution
//!
//! Catalog distributions cannot be re-parameterized after construction, so
//! one distribution object is built per timestep.

use crate::dispatch::registry::{CatalogEntry, StandardCdf};
use crate::functions::columns::{at, column, require_positive};
use crate::functions::traits::SasCdf;
use crate::support::configuration::CATALOG_BASE_COLUMNS;
use crate::support::error::{
    Result, SasError, WithTimestep, computation_error, invalid_parameter,
};
use ndarray::{Array1, ArrayD, ArrayView2, ArrayViewD, Axis};
use std::fmt;
use tracing::debug;

/// Catalog distribution with per-timestep location, scale and shapes
pub struct CatalogFunction {
    name: String,
    loc: Array1<f64>,
    scale: Array1<f64>,
    distributions: Vec<Box<dyn StandardCdf>>,
}

impl CatalogFunction {
    /// Build from a parameter matrix with columns loc, scale, then the
    /// entry's shape parameters
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if:
    /// - The column count does not match the entry's shape parameters
    /// - Any scale value is not positive and finite
    /// - The distribution rejects a row's shape parameters
    pub fn new(entry: &CatalogEntry, params: ArrayView2<'_, f64>) -> Result<Self> {
        let expected = CATALOG_BASE_COLUMNS + entry.shape_parameters();
        if params.ncols() != expected {
            return Err(invalid_parameter(
                "params",
                &format!("{} columns", params.ncols()),
                &format!("'{}' expects {expected} columns", entry.name()),
            ));
        }

        let loc = column(&params, 0, "loc")?;
        let scale = column(&params, 1, "scale")?;
        require_positive(&scale, "scale")?;

        let distributions = params
            .axis_iter(Axis(0))
            .enumerate()
            .map(|(row, values)| {
                let shapes: Vec<f64> = values.iter().skip(CATALOG_BASE_COLUMNS).copied().collect();
                entry.build(&shapes).at_timestep(row)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            distribution = entry.name(),
            timesteps = distributions.len(),
            "catalog distributions constructed"
        );

        Ok(Self {
            name: entry.name().to_owned(),
            loc,
            scale,
            distributions,
        })
    }

    /// Number of timesteps in the parameter series
    pub fn timesteps(&self) -> usize {
        self.distributions.len()
    }
}

impl fmt::Debug for CatalogFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogFunction")
            .field("name", &self.name)
            .field("loc", &self.loc)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl SasCdf for CatalogFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn cdf_i(&self, st: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        let distribution = self
            .distributions
            .get(i)
            .ok_or(SasError::TimestepOutOfRange {
                index: i,
                timesteps: self.timesteps(),
            })?;
        let loc = at(&self.loc, i)?;
        let scale = at(&self.scale, i)?;

        // Some statrs CDFs panic on NaN instead of propagating it
        if st.iter().any(|value| value.is_nan()) {
            return Err(computation_error(
                "catalog evaluation",
                &format!("NaN storage value passed to '{}'", self.name),
            ));
        }

        Ok(st.mapv(|value| distribution.cdf((value - loc) / scale)))
    }
}
