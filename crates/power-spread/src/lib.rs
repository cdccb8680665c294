//! Sample moments and pooled dispersion for two-group designs
//!
//! This crate provides the dispersion layer of the power-stats pipeline:
//! classical per-sample moments under the unbiased (n − 1) convention, and
//! the degrees-of-freedom weighted pooled standard deviation that serves as
//! the common scale for standardized effect sizes.
//!
//! # Example
//!
//! ```rust
//! use power_spread::{pooled_std, sample_variance};
//!
//! let group1 = vec![2.0, 4.0, 6.0, 8.0, 10.0];
//! let group2 = vec![1.0, 3.0, 5.0, 7.0, 9.0];
//!
//! assert_eq!(sample_variance(&group1).unwrap(), 10.0);
//! let s = pooled_std(&group1, &group2).unwrap();
//! assert!((s - 10.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! Groups with fewer than two observations, or containing NaN/Inf, are
//! rejected with a domain error rather than producing NaN.

pub mod moments;
pub mod pooled;

// Re-exports
pub use moments::{sample_mean, sample_std, sample_variance};
pub use pooled::{pooled_std, pooled_variance};
