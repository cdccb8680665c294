//! Bisection search for monotonic functions

use power_core::{Error, Result};

/// Cap on bracket doublings before the target is declared unattainable.
const MAX_BRACKET_DOUBLINGS: usize = 64;

/// Cap on bisection iterations.
const MAX_BISECTIONS: usize = 200;

/// Given a function `f` monotonically non-decreasing on `[lower_bound, ∞)`,
/// find `x` with `f(x)` within `tol` of `target`.
///
/// The search first doubles an upper bound out from `lower_bound` until the
/// bracket straddles the target, then bisects. If `f(lower_bound)` already
/// meets the target, `lower_bound` itself is returned. Failure to bracket or
/// to reach the tolerance within the iteration caps is a convergence error.
pub(crate) fn root_find_monotonic<F>(f: F, lower_bound: f64, target: f64, tol: f64) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let f_lower = f(lower_bound)?;
    if f_lower >= target {
        return Ok(lower_bound);
    }

    // Expand the search window until it straddles the target
    let mut lo = lower_bound;
    let mut hi = lower_bound;
    let mut f_hi = f_lower;
    let mut doublings = 0;
    while f_hi < target {
        if doublings == MAX_BRACKET_DOUBLINGS {
            return Err(Error::convergence(format!(
                "no upper bracket found after {MAX_BRACKET_DOUBLINGS} expansions; target {target} appears unattainable"
            )));
        }
        lo = hi;
        hi = hi * 2.0 + 1.0; // +1 in case the lower bound is zero
        f_hi = f(hi)?;
        doublings += 1;
    }

    // Bisect
    let mut x = 0.5 * (lo + hi);
    for _ in 0..MAX_BISECTIONS {
        let y = f(x)?;
        if (y - target).abs() <= tol || (hi - lo) <= tol {
            return Ok(x);
        }
        if y < target {
            lo = x;
        } else {
            hi = x;
        }
        x = 0.5 * (lo + hi);
    }

    Err(Error::convergence(format!(
        "bisection did not reach tolerance {tol} within {MAX_BISECTIONS} iterations"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_root_find() {
        let f = |x: f64| Ok(x);
        let res = root_find_monotonic(f, 0.0, 3.0, 1e-9).unwrap();
        assert!((res - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_root_find() {
        let f = |x: f64| Ok(x * x);
        let res = root_find_monotonic(f, 0.0, 9.0, 1e-9).unwrap();
        assert!((res - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_target_met_at_lower_bound() {
        let f = |x: f64| Ok(x);
        let res = root_find_monotonic(f, 5.0, 3.0, 1e-9).unwrap();
        assert_eq!(res, 5.0);
    }

    #[test]
    fn test_unattainable_target() {
        // Saturates below 1, so a target of 2 can never bracket
        let f = |x: f64| Ok(x / (1.0 + x));
        let err = root_find_monotonic(f, 0.0, 2.0, 1e-9).unwrap_err();
        assert!(matches!(err, Error::Convergence(_)));
    }

    #[test]
    fn test_inner_error_propagates() {
        let f = |_x: f64| -> Result<f64> { Err(Error::domain("bad input")) };
        let err = root_find_monotonic(f, 0.0, 1.0, 1e-9).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }
}
