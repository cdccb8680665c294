//! Required sample size for a two-sample t-test
//!
//! The pipeline estimates the effect size from pilot data, derives the
//! group size ratio, and asks a [`PowerInversion`] backend for the group-1
//! observation count that reaches the target power. Unequal allocation
//! costs power, and the backend only solves for group 1 under a fixed
//! ratio, so the result is re-expanded here into the total requirement
//! across both groups.

use crate::alternative::Alternative;
use crate::power::TwoSampleTTestPower;
use crate::traits::PowerInversion;
use power_core::{validate, Result};
use power_effect::cohen_d;
use tracing::debug;

/// Study design parameters for sample-size estimation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSizeConfig {
    /// Significance level of the test
    pub alpha: f64,
    /// Target statistical power
    pub power: f64,
    /// Sidedness of the alternative hypothesis
    pub alternative: Alternative,
    /// Round the total requirement up to a whole number of subjects
    pub round_up: bool,
}

impl Default for SampleSizeConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            power: 0.8,
            alternative: Alternative::TwoSided,
            round_up: true,
        }
    }
}

impl SampleSizeConfig {
    /// Set the significance level
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the target power
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// Set the sidedness of the alternative hypothesis
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    /// Report the fractional requirement instead of rounding up
    pub fn without_rounding(mut self) -> Self {
        self.round_up = false;
        self
    }
}

/// Sample-size requirement across both groups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSizeEstimate {
    /// Observations required in group 1
    pub nobs1: f64,
    /// Observations required in group 2 (`nobs1` scaled by the size ratio)
    pub nobs2: f64,
    /// Total subjects across both groups, ceiling-rounded when requested
    pub total: f64,
    /// Effect size magnitude the requirement was computed for
    pub effect_size: f64,
    /// Group size ratio `len(group2) / len(group1)` carried into the solver
    pub ratio: f64,
}

/// Required total sample size using the default t-test power backend.
///
/// See [`required_sample_size_with`] for the full contract.
pub fn required_sample_size(
    group1: &[f64],
    group2: &[f64],
    config: &SampleSizeConfig,
) -> Result<SampleSizeEstimate> {
    required_sample_size_with(&TwoSampleTTestPower::new(), group1, group2, config)
}

/// Required total sample size with a caller-supplied power backend.
///
/// Estimates Cohen's d from the pilot groups, keeps their observed size
/// ratio fixed, and solves for the smallest design that reaches
/// `config.power` at significance `config.alpha`. `alpha` and `power` are
/// validated before any estimation runs; dispersion and effect-size failures
/// propagate unchanged, and an effect size the backend cannot invert (e.g.
/// indistinguishable from zero) surfaces as a convergence error.
pub fn required_sample_size_with<P: PowerInversion>(
    solver: &P,
    group1: &[f64],
    group2: &[f64],
    config: &SampleSizeConfig,
) -> Result<SampleSizeEstimate> {
    validate::check_unit_interval("power", config.power)?;
    validate::check_unit_interval("alpha", config.alpha)?;

    let effect = cohen_d(group1, group2)?;
    let ratio = group2.len() as f64 / group1.len() as f64;

    debug!(
        "Estimated effect size {} from pilot groups of {} and {} observations",
        effect.magnitude,
        group1.len(),
        group2.len()
    );

    let nobs1 = solver.solve_nobs1(
        effect.magnitude,
        config.alpha,
        config.power,
        ratio,
        config.alternative,
    )?;
    let nobs2 = nobs1 * ratio;
    let n = nobs1 + nobs2;
    let total = if config.round_up { n.ceil() } else { n };

    Ok(SampleSizeEstimate {
        nobs1,
        nobs2,
        total,
        effect_size: effect.magnitude,
        ratio,
    })
}
