//! Error types for power analysis
//!
//! Provides a unified error type for all power-stats crates.

use thiserror::Error;

/// Core error type for power-analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-supplied parameter outside its documented valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Mathematically undefined operation on the given input
    #[error("Domain error: {0}")]
    Domain(String),

    /// Iterative routine exhausted its tolerance or iteration budget
    #[error("Convergence failure: {0}")]
    Convergence(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common error patterns

impl Error {
    /// Create an invalid-parameter error
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a domain error
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Create a convergence error
    pub fn convergence(msg: impl Into<String>) -> Self {
        Self::Convergence(msg.into())
    }

    /// Create an error for a probability-like parameter outside (0, 1)
    pub fn outside_unit_interval(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} {value} must be in (0, 1)"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Domain(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a group too small to estimate dispersion
    pub fn too_few_observations(group: &str, expected: usize, actual: usize) -> Self {
        Self::Domain(format!(
            "{group} needs at least {expected} observations, got {actual}"
        ))
    }
}
