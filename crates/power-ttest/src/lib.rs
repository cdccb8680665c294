//! Sample-size estimation for independent two-sample t-tests
//!
//! Given pilot observations for two groups, this crate answers the planning
//! question: how many subjects are needed in total for a t-test to detect
//! the observed effect at a chosen significance level and power?
//!
//! The pipeline estimates Cohen's d from the pilot data (via
//! `power-effect`), keeps the observed group size ratio fixed, and inverts
//! the power function of the test for the group-1 observation count. The
//! inversion sits behind the [`PowerInversion`] trait;
//! [`TwoSampleTTestPower`] is the default backend.
//!
//! # Example
//!
//! ```rust
//! use power_ttest::{required_sample_size, SampleSizeConfig};
//!
//! let group1 = vec![2.0, 4.0, 6.0, 8.0, 10.0];
//! let group2 = vec![1.0, 3.0, 5.0, 7.0, 9.0];
//!
//! // d ≈ 0.316: a small effect needs a sizeable trial
//! let config = SampleSizeConfig::default().with_power(0.8);
//! let estimate = required_sample_size(&group1, &group2, &config).unwrap();
//! assert!(estimate.total > 300.0 && estimate.total < 330.0);
//! ```

pub mod alternative;
pub mod power;
pub mod sample_size;
pub mod traits;

mod root_find;

// Re-exports
pub use alternative::Alternative;
pub use power::TwoSampleTTestPower;
pub use sample_size::{
    required_sample_size, required_sample_size_with, SampleSizeConfig, SampleSizeEstimate,
};
pub use traits::PowerInversion;
