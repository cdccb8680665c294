//! The power-inversion seam

use crate::alternative::Alternative;
use power_core::Result;

/// Capability to invert the power function of a two-sample t-test
///
/// Given an effect size magnitude, significance level, target power, and the
/// ratio of group-2 to group-1 observations, an implementation returns the
/// group-1 observation count at which the test reaches the target power.
/// Sample-size estimation only ever solves for this one quantity, so heavier
/// backends (exact noncentral-t solvers, simulation) can slot in behind this
/// trait without the estimation pipeline changing.
pub trait PowerInversion {
    /// Solve the power function for the group-1 observation count.
    ///
    /// Returns a convergence error when no observation count reaches the
    /// target power within the backend's numerical budget, e.g. an effect
    /// size indistinguishable from zero.
    fn solve_nobs1(
        &self,
        effect_size: f64,
        alpha: f64,
        power: f64,
        ratio: f64,
        alternative: Alternative,
    ) -> Result<f64>;
}
