//! Capability traits implemented by the SAS function variants
//!
//! Every variant evaluates its CDF for a single timestep. Evaluating the whole
//! series at once and inverting the CDF are separate capabilities, so a
//! variant that lacks one simply does not implement the trait.

use crate::support::error::Result;
use ndarray::{Array1, ArrayD, ArrayView1, ArrayViewD};

/// CDF evaluation against one timestep's parameter set
pub trait SasCdf: Send + Sync {
    /// Type tag of the variant
    fn name(&self) -> &str;

    /// Evaluate the CDF of timestep `i` at every element of `st`
    ///
    /// The output has the shape of `st`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is outside the parameter series or the
    /// evaluation itself fails
    fn cdf_i(&self, st: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>>;
}

/// CDF evaluation across the whole timestep series
pub trait SasCdfAll: SasCdf {
    /// Evaluate element `i` of `st` against the parameters of timestep `i`
    ///
    /// # Errors
    ///
    /// Returns an error if `st` does not hold one value per timestep
    fn cdf_all(&self, st: ArrayView1<'_, f64>) -> Result<Array1<f64>>;
}

/// Closed-form inverse CDF for one timestep
pub trait SasInverseCdf: SasCdf {
    /// Storage value at which the CDF of timestep `i` reaches each of `p`
    ///
    /// Probabilities outside [0, 1] saturate or map to NaN as documented by
    /// each variant; they are not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is outside the parameter series
    fn invcdf_i(&self, p: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>>;
}
