//! Type-tag dispatch from a parameter matrix to a constructed SAS function

/// Factory resolving built-in tags and catalog names
pub mod factory;
/// Registry of named catalog distributions
pub mod registry;

pub use factory::{BuiltinKind, SasFunction, create_function, create_function_with};
pub use registry::{Catalog, CatalogEntry, StandardCdf, standard_catalog};
