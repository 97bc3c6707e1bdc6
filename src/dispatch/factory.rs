//! Construction of SAS functions from a type tag and a parameter matrix

use crate::dispatch::registry::{Catalog, standard_catalog};
use crate::functions::{
    CatalogFunction, Gamma, InvGauss, Kumaraswamy, LookupTable, SasCdf, SasCdfAll, SasInverseCdf,
    Uniform,
};
use crate::support::configuration::{
    GAMMA_TAG, INVGAUSS_TAG, KUMARASWAMY_TAG, LOOKUP_TABLE_TAG, UNIFORM_TAG,
};
use crate::support::error::{Result, SasError};
use ndarray::{Array1, ArrayD, ArrayView1, ArrayView2, ArrayViewD};
use tracing::debug;

/// Variants that are resolved before the catalog is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    /// Linear ramp between `ST_min` and `ST_max`
    Uniform,
    /// Kumaraswamy distribution on `[ST_min, ST_max]`
    Kumaraswamy,
    /// Gamma distribution truncated at `ST_max`
    Gamma,
    /// Inverse-Gaussian distribution
    InvGauss,
    /// Piecewise-linear lookup table
    LookupTable,
}

impl BuiltinKind {
    /// All built-in variants
    pub const ALL: [Self; 5] = [
        Self::Uniform,
        Self::Kumaraswamy,
        Self::Gamma,
        Self::InvGauss,
        Self::LookupTable,
    ];

    /// Resolve a type tag to a built-in variant
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Type tag accepted by [`create_function`]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Uniform => UNIFORM_TAG,
            Self::Kumaraswamy => KUMARASWAMY_TAG,
            Self::Gamma => GAMMA_TAG,
            Self::InvGauss => INVGAUSS_TAG,
            Self::LookupTable => LOOKUP_TABLE_TAG,
        }
    }
}

/// A constructed SAS function of any variant
///
/// Capabilities a variant lacks are reported as [`SasError::Unsupported`].
#[derive(Debug)]
pub enum SasFunction {
    /// Uniform variant
    Uniform(Uniform),
    /// Kumaraswamy variant
    Kumaraswamy(Kumaraswamy),
    /// Truncated gamma variant
    Gamma(Gamma),
    /// Inverse-Gaussian variant
    InvGauss(InvGauss),
    /// Catalog-backed variant
    Catalog(CatalogFunction),
    /// Lookup table variant
    LookupTable(LookupTable),
}

impl SasFunction {
    const fn as_cdf(&self) -> &dyn SasCdf {
        match self {
            Self::Uniform(function) => function,
            Self::Kumaraswamy(function) => function,
            Self::Gamma(function) => function,
            Self::InvGauss(function) => function,
            Self::Catalog(function) => function,
            Self::LookupTable(function) => function,
        }
    }

    const fn as_cdf_all(&self) -> Option<&dyn SasCdfAll> {
        match self {
            Self::Uniform(function) => Some(function),
            Self::Kumaraswamy(function) => Some(function),
            Self::Gamma(function) => Some(function),
            Self::LookupTable(function) => Some(function),
            Self::InvGauss(_) | Self::Catalog(_) => None,
        }
    }

    const fn as_inverse(&self) -> Option<&dyn SasInverseCdf> {
        match self {
            Self::Uniform(function) => Some(function),
            Self::Gamma(function) => Some(function),
            Self::Kumaraswamy(_)
            | Self::InvGauss(_)
            | Self::Catalog(_)
            | Self::LookupTable(_) => None,
        }
    }

    fn unsupported(&self, operation: &'static str) -> SasError {
        SasError::Unsupported {
            function: self.name().to_owned(),
            operation,
        }
    }

    /// Type tag or catalog name of the wrapped variant
    pub fn name(&self) -> &str {
        self.as_cdf().name()
    }

    /// Whether [`Self::cdf_all`] is available
    pub const fn supports_cdf_all(&self) -> bool {
        !matches!(self, Self::InvGauss(_) | Self::Catalog(_))
    }

    /// Whether [`Self::invcdf_i`] is available
    pub const fn supports_inverse(&self) -> bool {
        matches!(self, Self::Uniform(_) | Self::Gamma(_))
    }

    /// Evaluate the CDF of timestep `i` at every element of `st`
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is outside the parameter series or the
    /// evaluation fails
    pub fn cdf_i(&self, st: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        self.as_cdf().cdf_i(st, i)
    }

    /// Evaluate element `i` of `st` against the parameters of timestep `i`
    ///
    /// # Errors
    ///
    /// Returns an error if the variant has no whole-series evaluation or `st`
    /// does not hold one value per timestep
    pub fn cdf_all(&self, st: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        self.as_cdf_all()
            .ok_or_else(|| self.unsupported("cdf_all"))?
            .cdf_all(st)
    }

    /// Storage values at which the CDF of timestep `i` reaches `p`
    ///
    /// # Errors
    ///
    /// Returns an error if the variant has no closed-form inverse or `i` is
    /// outside the parameter series
    pub fn invcdf_i(&self, p: ArrayViewD<'_, f64>, i: usize) -> Result<ArrayD<f64>> {
        self.as_inverse()
            .ok_or_else(|| self.unsupported("invcdf_i"))?
            .invcdf_i(p, i)
    }
}

/// Initialize a SAS function from a type tag and a parameter matrix
///
/// Built-in tags (`uniform`, `kumaraswami`, `gamma`, `invgauss`,
/// `lookuptable`) take precedence; any other tag is looked up in the standard
/// distribution catalog. Each row of `params` is one timestep, except for the
/// lookup table where each row is one breakpoint.
///
/// # Errors
///
/// Returns [`SasError::UnrecognizedType`] for unknown tags, or the variant's
/// construction error
pub fn create_function(rsas_type: &str, params: ArrayView2<'_, f64>) -> Result<SasFunction> {
    create_function_with(standard_catalog(), rsas_type, params)
}

/// Initialize a SAS function, resolving non built-in tags against `catalog`
///
/// # Errors
///
/// Returns [`SasError::UnrecognizedType`] for unknown tags, or the variant's
/// construction error
pub fn create_function_with(
    catalog: &Catalog,
    rsas_type: &str,
    params: ArrayView2<'_, f64>,
) -> Result<SasFunction> {
    let function = match BuiltinKind::from_tag(rsas_type) {
        Some(BuiltinKind::Uniform) => SasFunction::Uniform(Uniform::new(params)?),
        Some(BuiltinKind::Kumaraswamy) => SasFunction::Kumaraswamy(Kumaraswamy::new(params)?),
        Some(BuiltinKind::Gamma) => SasFunction::Gamma(Gamma::new(params)?),
        Some(BuiltinKind::InvGauss) => SasFunction::InvGauss(InvGauss::new(params)?),
        Some(BuiltinKind::LookupTable) => SasFunction::LookupTable(LookupTable::new(params)?),
        None => {
            let entry = catalog
                .get(rsas_type)
                .ok_or_else(|| SasError::UnrecognizedType {
                    name: rsas_type.to_owned(),
                })?;
            SasFunction::Catalog(CatalogFunction::new(entry, params)?)
        }
    };

    debug!(
        rsas_type,
        variant = function.name(),
        rows = params.nrows(),
        "SAS function created"
    );

    Ok(function)
}
