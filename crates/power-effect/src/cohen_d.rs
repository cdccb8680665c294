//! Cohen's d effect size
//!
//! Cohen's d expresses the difference between two group means in units of
//! their pooled standard deviation:
//!
//! ```text
//! d = (mean1 − mean2) / s_pooled
//! ```
//!
//! This estimator returns the magnitude |d|.

use crate::types::EffectSize;
use power_core::{Error, Result};
use power_spread::{pooled_std, sample_mean};

/// Compute Cohen's d for two groups, as a magnitude.
///
/// Both groups need at least two observations. Groups whose pooled standard
/// deviation is zero (constant data in both groups) leave the standardized
/// difference undefined and produce a domain error.
pub fn cohen_d(group1: &[f64], group2: &[f64]) -> Result<EffectSize> {
    let scale = pooled_std(group1, group2)?;
    if scale == 0.0 {
        return Err(Error::domain(
            "pooled standard deviation is zero; Cohen's d is undefined for constant samples",
        ));
    }

    let mean1 = sample_mean(group1)?;
    let mean2 = sample_mean(group2)?;
    let d = (mean1 - mean2) / scale;

    Ok(EffectSize::new(d.abs(), (group1.len(), group2.len())))
}
