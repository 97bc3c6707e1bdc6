//! Storage selection (SAS) functions for time-variable transport modeling
//!
//! Each SAS function describes, per timestep, which part of the stored water
//! (ranked by storage or age) is selected for outflow. Functions are built from
//! a type tag and a parameter matrix with one row per timestep, and evaluate
//! their cumulative distribution at arrays of storage values.

#![forbid(unsafe_code)]

/// Type-tag dispatch and the catalog of named distributions
pub mod dispatch;
/// SAS function variants and their capability traits
pub mod functions;
/// Numeric primitives: special functions and interpolation
pub mod math;
/// Error handling and configuration
pub mod support;

pub use dispatch::{SasFunction, create_function};
pub use support::error::{Result, SasError};
