//! Error types for SPC analysis
//!
//! Provides a unified error type for all spc-stats crates.

use thiserror::Error;

/// Core error type for SPC operations
#[derive(Error, Debug)]
pub enum Error {
    /// A data source, sheet, or series column could not be located
    #[error("Not found: {0}")]
    NotFound(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors caught at the outer boundary of a public operation
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sample too short for core statistics
    pub fn too_few_samples(actual: usize) -> Self {
        Self::InsufficientData {
            expected: 2,
            actual,
        }
    }

    /// Create an error for a missing series column
    pub fn series_not_found(name: &str, available: &[String]) -> Self {
        Self::NotFound(format!(
            "series '{name}' not found, available: {available:?}"
        ))
    }

    /// Create an error for a post-filter sample with no usable rows
    pub fn no_data() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }
}
