//! Core types for power analysis
//!
//! This crate provides the foundational error type and input-validation
//! helpers shared by the power-stats workspace. Estimation crates
//! (`power-spread`, `power-effect`, `power-ttest`) build on these so the
//! whole pipeline reports failures through one taxonomy:
//!
//! - [`Error::InvalidParameter`]: a caller broke a documented contract
//!   (e.g. a significance level outside (0, 1))
//! - [`Error::Domain`]: the requested quantity is mathematically undefined
//!   for the given input (e.g. pooled dispersion of single-observation
//!   groups)
//! - [`Error::Convergence`]: an iterative backend ran out of tolerance or
//!   iterations
//!
//! Errors are never coerced to NaN or infinity; every failure aborts the
//! computation and propagates to the caller.

pub mod error;
pub mod validate;

// Re-export core types
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
