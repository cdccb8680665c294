//! Pooled dispersion across two groups
//!
//! The pooled variance weights each group's unbiased variance by its degrees
//! of freedom:
//!
//! ```text
//! s²_pooled = ((n1 − 1)·s²1 + (n2 − 1)·s²2) / (n1 + n2 − 2)
//! ```
//!
//! Its square root is the common scale used for standardized mean
//! differences.

use crate::moments::sample_variance;
use power_core::{validate, Error, Result};

/// Degrees-of-freedom weighted pooled variance of two groups.
///
/// Both groups need at least two observations, which keeps the
/// `n1 + n2 − 2` denominator positive.
pub fn pooled_variance(group1: &[f64], group2: &[f64]) -> Result<f64> {
    validate::check_group_size("group1", group1, 2)?;
    validate::check_group_size("group2", group2, 2)?;

    let n1 = group1.len() as f64;
    let n2 = group2.len() as f64;
    let var1 = sample_variance(group1)?;
    let var2 = sample_variance(group2)?;

    let pooled = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0);
    if !pooled.is_finite() || pooled < 0.0 {
        return Err(Error::domain(
            "pooled variance is not a finite non-negative number",
        ));
    }
    Ok(pooled)
}

/// Pooled standard deviation of two groups.
///
/// Symmetric in its arguments and always non-negative.
pub fn pooled_std(group1: &[f64], group2: &[f64]) -> Result<f64> {
    Ok(pooled_variance(group1, group2)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pooled_std_basic() {
        // Both groups have unbiased variance 10, so pooling changes nothing
        let group1 = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let group2 = vec![1.0, 3.0, 5.0, 7.0, 9.0];

        let s = pooled_std(&group1, &group2).unwrap();
        assert_relative_eq!(s, 10.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_pooled_variance_weights_by_degrees_of_freedom() {
        // var1 = 1 (n1 = 3), var2 = 4 (n2 = 5)
        let group1 = vec![1.0, 2.0, 3.0];
        let group2 = vec![0.0, 2.0, 4.0, 6.0, 8.0];
        assert_relative_eq!(sample_variance(&group1).unwrap(), 1.0);
        assert_relative_eq!(sample_variance(&group2).unwrap(), 10.0);

        let expected = (2.0 * 1.0 + 4.0 * 10.0) / 6.0;
        assert_relative_eq!(pooled_variance(&group1, &group2).unwrap(), expected);
    }

    #[test]
    fn test_pooled_std_symmetry() {
        let group1 = vec![1.0, 2.0, 3.0, 4.0];
        let group2 = vec![10.0, 20.0, 30.0];
        let forward = pooled_std(&group1, &group2).unwrap();
        let backward = pooled_std(&group2, &group1).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_pooled_std_single_observation_group() {
        let err = pooled_std(&[5.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, power_core::Error::Domain(_)));

        // Two singleton groups leave zero degrees of freedom
        assert!(pooled_std(&[5.0], &[7.0]).is_err());
    }

    #[test]
    fn test_pooled_std_rejects_non_finite() {
        let group1 = vec![1.0, f64::NAN, 3.0];
        let group2 = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            pooled_std(&group1, &group2),
            Err(power_core::Error::Domain(_))
        ));
    }

    #[test]
    fn test_pooled_std_constant_groups_is_zero() {
        let group1 = vec![4.0, 4.0, 4.0];
        let group2 = vec![9.0, 9.0];
        assert_relative_eq!(pooled_std(&group1, &group2).unwrap(), 0.0);
    }
}
