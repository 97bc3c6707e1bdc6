//! SAS function variants and the capability traits they implement

/// Catalog-backed generic distribution adapter
pub mod catalog;
/// Parameter matrix parsing helpers
pub mod columns;
/// Truncated gamma distribution
pub mod gamma;
/// Inverse-Gaussian distribution
pub mod invgauss;
/// Kumaraswamy distribution
pub mod kumaraswamy;
/// Piecewise-linear lookup table
pub mod lookup;
/// Capability traits shared by all variants
pub mod traits;
/// Uniform distribution
pub mod uniform;

pub use catalog::CatalogFunction;
pub use gamma::Gamma;
pub use invgauss::InvGauss;
pub use kumaraswamy::Kumaraswamy;
pub use lookup::LookupTable;
pub use traits::{SasCdf, SasCdfAll, SasInverseCdf};
pub use uniform::Uniform;
