//! Numeric primitives for the SAS functions

/// Strict piecewise-linear interpolation
pub mod interpolation;
/// Incomplete gamma and error function wrappers
pub mod special;
