//! Error types for paired-sample testing
//!
//! Provides a unified error type for all paired-stats crates.

use thiserror::Error;

/// Core error type for paired-sample operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data: mismatched lengths, non-numeric entries or too few pairs
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// All paired differences are identical, so the t statistic is undefined
    #[error("Zero variance: every paired difference equals {mean_difference}")]
    ZeroVariance { mean_difference: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Chart drawing or image encoding failed
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for samples of different length
    pub fn size_mismatch(x_len: usize, y_len: usize) -> Self {
        Self::InvalidInput(format!(
            "Samples must have the same length: x has {x_len} values, y has {y_len}"
        ))
    }

    /// Create an error for fewer pairs than the test needs
    pub fn insufficient_data(expected: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "Insufficient data: expected at least {expected} paired observations, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str, index: usize) -> Self {
        Self::InvalidInput(format!(
            "{context} contains a non-numeric value at position {}",
            index + 1
        ))
    }

    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Significance level {alpha} must be in (0, 1)"))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_zero_variance(&self) -> bool {
        matches!(self, Self::ZeroVariance { .. })
    }
}
