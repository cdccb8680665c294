//! Sample-size and power analysis for two-sample t-tests
//!
//! This facade re-exports the power-stats workspace crates:
//!
//! - `power-core`: shared error taxonomy and input validation
//! - `power-spread`: sample moments and pooled dispersion
//! - `power-effect`: Cohen's d effect size estimation
//! - `power-ttest`: power inversion and required sample size
//!
//! # Example
//!
//! ```rust
//! use power_stats::{cohen_d, required_sample_size, SampleSizeConfig};
//!
//! // Pilot data from two groups
//! let group1 = vec![2.0, 4.0, 6.0, 8.0, 10.0];
//! let group2 = vec![1.0, 3.0, 5.0, 7.0, 9.0];
//!
//! let effect = cohen_d(&group1, &group2).unwrap();
//! println!("{effect}"); // Cohen's d: 0.316 (small)
//!
//! // How many subjects to detect that effect at 80% power?
//! let config = SampleSizeConfig::default();
//! let estimate = required_sample_size(&group1, &group2, &config).unwrap();
//! assert!(estimate.total > 300.0);
//! ```

pub use power_core::{Error, Result};

pub use power_spread::{pooled_std, pooled_variance, sample_mean, sample_std, sample_variance};

pub use power_effect::{cohen_d, EffectSize, EffectSizeInterpretation};

pub use power_ttest::{
    required_sample_size, required_sample_size_with, Alternative, PowerInversion,
    SampleSizeConfig, SampleSizeEstimate, TwoSampleTTestPower,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        cohen_d, pooled_std, required_sample_size, Alternative, EffectSize, Error,
        PowerInversion, Result, SampleSizeConfig, SampleSizeEstimate, TwoSampleTTestPower,
    };
}
