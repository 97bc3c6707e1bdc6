//! Parameter matrix parsing shared by the variants

use crate::support::error::{Result, SasError, invalid_parameter};
use ndarray::{Array1, ArrayView2, Axis};

/// Require exactly `expected` columns in the parameter matrix
///
/// # Errors
///
/// Returns an invalid parameter error naming the variant otherwise
pub fn require_columns(
    params: &ArrayView2<'_, f64>,
    expected: usize,
    function: &'static str,
) -> Result<()> {
    if params.ncols() == expected {
        Ok(())
    } else {
        Err(invalid_parameter(
            "params",
            &format!("{} columns", params.ncols()),
            &format!("'{function}' expects {expected} columns"),
        ))
    }
}

/// Require at least `minimum` columns in the parameter matrix
///
/// # Errors
///
/// Returns an invalid parameter error naming the variant otherwise
pub fn require_min_columns(
    params: &ArrayView2<'_, f64>,
    minimum: usize,
    function: &'static str,
) -> Result<()> {
    if params.ncols() >= minimum {
        Ok(())
    } else {
        Err(invalid_parameter(
            "params",
            &format!("{} columns", params.ncols()),
            &format!("'{function}' expects at least {minimum} columns"),
        ))
    }
}

/// Owned copy of one column, detached from the caller's matrix
///
/// # Errors
///
/// Returns an invalid parameter error if the column does not exist
pub fn column(
    params: &ArrayView2<'_, f64>,
    index: usize,
    parameter: &'static str,
) -> Result<Array1<f64>> {
    if index >= params.ncols() {
        return Err(invalid_parameter(
            parameter,
            &format!("column {index}"),
            &format!("matrix has only {} columns", params.ncols()),
        ));
    }
    Ok(params.index_axis(Axis(1), index).to_owned())
}

/// Require every value of a column to be positive and finite
///
/// # Errors
///
/// Returns an invalid parameter error naming the first offending row
pub fn require_positive(values: &Array1<f64>, parameter: &'static str) -> Result<()> {
    match values
        .iter()
        .enumerate()
        .find(|(_, value)| !(value.is_finite() && **value > 0.0))
    {
        Some((row, value)) => Err(invalid_parameter(
            parameter,
            value,
            &format!("must be positive and finite (timestep {row})"),
        )),
        None => Ok(()),
    }
}

/// Parameter value of timestep `i`
///
/// # Errors
///
/// Returns a timestep error if `i` is outside the series
pub fn at(values: &Array1<f64>, i: usize) -> Result<f64> {
    values
        .get(i)
        .copied()
        .ok_or(SasError::TimestepOutOfRange {
            index: i,
            timesteps: values.len(),
        })
}

/// Require one storage value per timestep
///
/// # Errors
///
/// Returns a shape error if the lengths differ
pub fn require_len(operation: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(SasError::ShapeMismatch {
            operation,
            expected,
            actual,
        })
    }
}
