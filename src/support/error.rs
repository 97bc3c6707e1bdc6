//! Error types for SAS function construction and evaluation

use std::fmt;

/// Main error type for all SAS function operations
#[derive(Debug, Clone, PartialEq)]
pub enum SasError {
    /// Type tag matches neither a built-in variant nor a catalog entry
    UnrecognizedType {
        /// The tag that failed to resolve
        name: String,
    },

    /// Lookup table breakpoints or probabilities are unusable
    ///
    /// Raised when:
    /// - The first probability is not exactly 0 or the last is not exactly 1
    /// - Breakpoints are not strictly increasing
    /// - Probabilities leave [0, 1] or decrease
    InvalidLookupTable {
        /// Description of what's wrong with the table
        reason: String,
    },

    /// Operation is not provided by this SAS function variant
    Unsupported {
        /// Name of the variant
        function: String,
        /// Operation that was requested
        operation: &'static str,
    },

    /// Parameter matrix validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input array length disagrees with the number of timesteps
    ShapeMismatch {
        /// Operation that received the array
        operation: &'static str,
        /// Expected number of elements
        expected: usize,
        /// Number of elements received
        actual: usize,
    },

    /// Timestep index exceeds the parameter series
    TimestepOutOfRange {
        /// The requested timestep
        index: usize,
        /// Number of timesteps the function was built for
        timesteps: usize,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedType { name } => {
                write!(f, "No such SAS function type '{name}'")
            }
            Self::InvalidLookupTable { reason } => {
                write!(f, "Invalid lookup table: {reason}")
            }
            Self::Unsupported {
                function,
                operation,
            } => {
                write!(f, "{operation} is not implemented for '{function}' SAS functions")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ShapeMismatch {
                operation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch in {operation}: expected {expected} values, got {actual}"
                )
            }
            Self::TimestepOutOfRange { index, timesteps } => {
                write!(
                    f,
                    "Timestep {index} is out of bounds (function has {timesteps} timesteps)"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SasError {}

/// Convenience type alias for SAS function results
pub type Result<T> = std::result::Result<T, SasError>;

/// Enriches parameter errors with the timestep row they came from
pub trait WithTimestep<T> {
    /// Tag an invalid parameter error with its timestep row
    ///
    /// # Errors
    ///
    /// Propagates the original error with the row appended to its reason
    fn at_timestep(self, row: usize) -> Result<T>;
}

impl<T, E> WithTimestep<T> for std::result::Result<T, E>
where
    E: Into<SasError>,
{
    fn at_timestep(self, row: usize) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only parameter errors are row specific
            if let SasError::InvalidParameter { reason, .. } = &mut error {
                reason.push_str(&format!(" (timestep {row})"));
            }
            error
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SasError {
    SasError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid lookup table error
pub fn invalid_lookup_table(reason: &impl ToString) -> SasError {
    SasError::InvalidLookupTable {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SasError {
    SasError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
