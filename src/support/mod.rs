//! Error handling and configuration shared by every SAS function

/// Type tags, column layouts and numeric defaults
pub mod configuration;
/// Error types for construction and evaluation
pub mod error;
