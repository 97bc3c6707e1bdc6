//! Named catalog of standard continuous distributions
//!
//! Each entry maps a name to the number of shape parameters it takes and a
//! constructor closure producing the standard (zero location, unit scale)
//! distribution. Location and scale are applied by the catalog SAS function.

use crate::support::error::{Result, invalid_parameter};
use statrs::distribution::{
    Beta, Cauchy, ChiSquared, ContinuousCDF, Exp, InverseGamma, Laplace, LogNormal, Normal,
    Pareto, StudentsT, Triangular, Weibull,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// CDF of a fully parameterized standard distribution
pub trait StandardCdf: Send + Sync {
    /// Cumulative probability below `x`
    fn cdf(&self, x: f64) -> f64;
}

impl<D> StandardCdf for D
where
    D: ContinuousCDF<f64, f64> + Send + Sync,
{
    fn cdf(&self, x: f64) -> f64 {
        <D as ContinuousCDF<f64, f64>>::cdf(self, x)
    }
}

/// Builds a standard distribution from one row of shape parameters
pub type Constructor = Box<dyn Fn(&[f64]) -> Result<Box<dyn StandardCdf>> + Send + Sync>;

/// A registered distribution family
pub struct CatalogEntry {
    name: String,
    shape_parameters: usize,
    constructor: Constructor,
}

impl CatalogEntry {
    /// Registered name of the family
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of shape parameters following loc and scale
    pub const fn shape_parameters(&self) -> usize {
        self.shape_parameters
    }

    /// Construct the standard distribution for one set of shape parameters
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the number of shapes is wrong or
    /// the distribution rejects them
    pub fn build(&self, shapes: &[f64]) -> Result<Box<dyn StandardCdf>> {
        if shapes.len() != self.shape_parameters {
            return Err(invalid_parameter(
                "shapes",
                &shapes.len(),
                &format!(
                    "'{}' takes {} shape parameters",
                    self.name, self.shape_parameters
                ),
            ));
        }
        (self.constructor)(shapes)
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("shape_parameters", &self.shape_parameters)
            .finish_non_exhaustive()
    }
}

/// Registry of distribution families resolvable by name
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family, replacing any previous entry with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, shape_parameters: usize, constructor: F)
    where
        F: Fn(&[f64]) -> Result<Box<dyn StandardCdf>> + Send + Sync + 'static,
    {
        let name = name.into();
        self.entries.insert(
            name.clone(),
            CatalogEntry {
                name,
                shape_parameters,
                constructor: Box::new(constructor),
            },
        );
    }

    /// Look up a family by name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Whether a family is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Catalog of the `statrs` continuous distributions under their usual names
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register("norm", 0, |_| boxed("norm", Normal::new(0.0, 1.0)));
        catalog.register("expon", 0, |_| boxed("expon", Exp::new(1.0)));
        catalog.register("cauchy", 0, |_| boxed("cauchy", Cauchy::new(0.0, 1.0)));
        catalog.register("laplace", 0, |_| boxed("laplace", Laplace::new(0.0, 1.0)));
        catalog.register("lognorm", 1, |shapes| {
            let [s] = shape_values(shapes)?;
            boxed("lognorm", LogNormal::new(0.0, s))
        });
        catalog.register("weibull_min", 1, |shapes| {
            let [c] = shape_values(shapes)?;
            boxed("weibull_min", Weibull::new(c, 1.0))
        });
        catalog.register("chi2", 1, |shapes| {
            let [df] = shape_values(shapes)?;
            boxed("chi2", ChiSquared::new(df))
        });
        catalog.register("t", 1, |shapes| {
            let [df] = shape_values(shapes)?;
            boxed("t", StudentsT::new(0.0, 1.0, df))
        });
        catalog.register("invgamma", 1, |shapes| {
            let [a] = shape_values(shapes)?;
            boxed("invgamma", InverseGamma::new(a, 1.0))
        });
        catalog.register("pareto", 1, |shapes| {
            let [b] = shape_values(shapes)?;
            boxed("pareto", Pareto::new(1.0, b))
        });
        catalog.register("triang", 1, |shapes| {
            let [c] = shape_values(shapes)?;
            boxed("triang", Triangular::new(0.0, 1.0, c))
        });
        catalog.register("beta", 2, |shapes| {
            let [a, b] = shape_values(shapes)?;
            boxed("beta", Beta::new(a, b))
        });

        catalog
    }
}

/// Process-wide standard catalog, built on first use
pub fn standard_catalog() -> &'static Catalog {
    static STANDARD: LazyLock<Catalog> = LazyLock::new(Catalog::standard);
    &STANDARD
}

/// Fixed-size view of a shape parameter row
fn shape_values<const N: usize>(shapes: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(shapes).map_err(|error| invalid_parameter("shapes", &shapes.len(), &error))
}

/// Erase a freshly constructed distribution, mapping its error
fn boxed<D, E>(name: &'static str, built: std::result::Result<D, E>) -> Result<Box<dyn StandardCdf>>
where
    D: StandardCdf + 'static,
    E: fmt::Display,
{
    match built {
        Ok(distribution) => Ok(Box::new(distribution)),
        Err(error) => Err(invalid_parameter(name, &"shape parameters", &error)),
    }
}
