//! Standardized effect size estimation
//!
//! This crate computes Cohen's d, the standardized mean difference between
//! two groups, scaled by their pooled standard deviation. The magnitude is
//! what downstream power analysis consumes: for sample-size purposes the
//! direction of the difference is irrelevant, so only |d| is exposed.
//!
//! # Example
//!
//! ```rust
//! use power_effect::cohen_d;
//!
//! let group1 = vec![2.0, 4.0, 6.0, 8.0, 10.0];
//! let group2 = vec![1.0, 3.0, 5.0, 7.0, 9.0];
//!
//! let effect = cohen_d(&group1, &group2).unwrap();
//! assert!((effect.magnitude - 0.3162).abs() < 1e-3);
//! println!("{effect}"); // Cohen's d: 0.316 (small)
//! ```

pub mod cohen_d;
pub mod types;

// Re-exports
pub use cohen_d::cohen_d;
pub use types::{EffectSize, EffectSizeInterpretation};
