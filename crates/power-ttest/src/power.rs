//! Power of the independent two-sample t-test
//!
//! With `nobs1` observations in group 1 and `ratio · nobs1` in group 2, the
//! test statistic under the alternative is centered at the noncentrality
//!
//! ```text
//! ncp = d · sqrt(nobs1 · ratio / (1 + ratio))
//! ```
//!
//! The forward power function here uses the classical normal approximation
//! to the noncentral t distribution, which is accurate at the sample sizes
//! this crate exists to compute. Exact noncentral-t backends can replace it
//! through the [`PowerInversion`] trait.

use crate::alternative::Alternative;
use crate::root_find::root_find_monotonic;
use crate::traits::PowerInversion;
use power_core::{validate, Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::{debug, instrument};

/// Smallest solvable group-1 size; below this the t-test has no degrees of
/// freedom to spend.
const MIN_NOBS1: f64 = 2.0;

/// Power computations for the independent two-sample t-test
///
/// Stateless apart from the convergence tolerance of the sample-size
/// inversion; identical inputs always produce identical outputs.
#[derive(Debug, Clone, Copy)]
pub struct TwoSampleTTestPower {
    tolerance: f64,
}

impl TwoSampleTTestPower {
    /// Create a power calculator with the default convergence tolerance
    pub fn new() -> Self {
        Self { tolerance: 1e-8 }
    }

    /// Override the convergence tolerance of the inversion
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        assert!(
            tolerance.is_finite() && tolerance > 0.0,
            "tolerance must be positive"
        );
        self.tolerance = tolerance;
        self
    }

    /// Achieved power for a given group-1 observation count.
    ///
    /// `effect_size` is a magnitude (≥ 0); `ratio` is the group-2 to group-1
    /// size ratio. `nobs1` may be fractional, which the inversion exploits.
    pub fn power(
        &self,
        effect_size: f64,
        nobs1: f64,
        alpha: f64,
        ratio: f64,
        alternative: Alternative,
    ) -> Result<f64> {
        validate::check_unit_interval("alpha", alpha)?;
        check_effect_size(effect_size)?;
        check_ratio(ratio)?;
        if !nobs1.is_finite() || nobs1 < MIN_NOBS1 {
            return Err(Error::invalid_parameter(format!(
                "nobs1 {nobs1} must be a finite number of at least {MIN_NOBS1}"
            )));
        }

        let normal = standard_normal()?;
        let ncp = effect_size * (nobs1 * ratio / (1.0 + ratio)).sqrt();

        let achieved = match alternative {
            Alternative::TwoSided => {
                let crit = normal.inverse_cdf(1.0 - alpha / 2.0);
                normal.cdf(ncp - crit) + normal.cdf(-ncp - crit)
            }
            Alternative::Larger => {
                let crit = normal.inverse_cdf(1.0 - alpha);
                normal.cdf(ncp - crit)
            }
            Alternative::Smaller => {
                let crit = normal.inverse_cdf(1.0 - alpha);
                normal.cdf(-ncp - crit)
            }
        };
        Ok(achieved)
    }

    /// Solve for the group-1 observation count achieving the target power.
    ///
    /// Monotonic bisection on the forward power function over
    /// `nobs1 ∈ [2, ∞)`. Targets the power function cannot reach (an effect
    /// size indistinguishable from zero, or a `smaller` alternative paired
    /// with a positive magnitude) surface as convergence errors.
    #[instrument(skip(self), fields(tolerance = self.tolerance))]
    pub fn solve_nobs1(
        &self,
        effect_size: f64,
        alpha: f64,
        power: f64,
        ratio: f64,
        alternative: Alternative,
    ) -> Result<f64> {
        validate::check_unit_interval("alpha", alpha)?;
        validate::check_unit_interval("power", power)?;
        check_effect_size(effect_size)?;
        check_ratio(ratio)?;

        debug!(
            "Solving group-1 observations for effect size {} at alpha {}, power {}, ratio {}",
            effect_size, alpha, power, ratio
        );

        let nobs1 = root_find_monotonic(
            |n| self.power(effect_size, n, alpha, ratio, alternative),
            MIN_NOBS1,
            power,
            self.tolerance,
        )
        .map_err(|e| match e {
            Error::Convergence(msg) => Error::convergence(format!(
                "no sample size reaches power {power} (effect size {effect_size} may be too small to detect): {msg}"
            )),
            other => other,
        })?;

        debug!("Converged at nobs1 = {}", nobs1);
        Ok(nobs1)
    }
}

impl Default for TwoSampleTTestPower {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerInversion for TwoSampleTTestPower {
    fn solve_nobs1(
        &self,
        effect_size: f64,
        alpha: f64,
        power: f64,
        ratio: f64,
        alternative: Alternative,
    ) -> Result<f64> {
        TwoSampleTTestPower::solve_nobs1(self, effect_size, alpha, power, ratio, alternative)
    }
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0)
        .map_err(|e| Error::domain(format!("failed to construct standard normal: {e}")))
}

fn check_effect_size(effect_size: f64) -> Result<()> {
    if !effect_size.is_finite() || effect_size < 0.0 {
        return Err(Error::invalid_parameter(format!(
            "effect_size {effect_size} must be a finite non-negative magnitude"
        )));
    }
    Ok(())
}

fn check_ratio(ratio: f64) -> Result<()> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(Error::invalid_parameter(format!(
            "ratio {ratio} must be a finite positive number"
        )));
    }
    Ok(())
}
