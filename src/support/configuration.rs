//! Type tags, parameter matrix layouts and numeric defaults

// Built-in type tags accepted by the dispatcher
/// Tag for the uniform SAS function
pub const UNIFORM_TAG: &str = "uniform";
/// Tag for the Kumaraswamy SAS function (historical spelling)
pub const KUMARASWAMY_TAG: &str = "kumaraswami";
/// Tag for the truncated gamma SAS function
pub const GAMMA_TAG: &str = "gamma";
/// Tag for the inverse-Gaussian SAS function
pub const INVGAUSS_TAG: &str = "invgauss";
/// Tag for the lookup table SAS function
pub const LOOKUP_TABLE_TAG: &str = "lookuptable";

// Column counts of the parameter matrix for each built-in variant
/// Uniform: `ST_min`, `ST_max`
pub const UNIFORM_COLUMNS: usize = 2;
/// Kumaraswamy: `ST_min`, `ST_max`, a, b
pub const KUMARASWAMY_COLUMNS: usize = 4;
/// Gamma: `ST_min`, `ST_max`, scale, shape
pub const GAMMA_COLUMNS: usize = 4;
/// Inverse Gaussian: loc, scale, mu (further columns are ignored)
pub const INVGAUSS_MIN_COLUMNS: usize = 3;
/// Lookup table: `S_T`, Omega
pub const LOOKUP_TABLE_COLUMNS: usize = 2;
/// Catalog distributions: loc, scale, then one column per shape parameter
pub const CATALOG_BASE_COLUMNS: usize = 2;

/// Minimum number of breakpoints a lookup table needs to interpolate
pub const MIN_LOOKUP_BREAKPOINTS: usize = 2;

/// Absolute tolerance for comparing CDF values in round-trip checks
pub const CDF_TOLERANCE: f64 = 1e-9;
