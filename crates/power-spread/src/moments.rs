//! Classical sample moments
//!
//! Mean, variance, and standard deviation with the unbiased (n − 1)
//! denominator. Every estimator in this workspace uses the same denominator
//! convention, so per-group variances stay comparable when they are pooled.

use power_core::{validate, Error, Result};

/// Arithmetic mean of a sample.
pub fn sample_mean(data: &[f64]) -> Result<f64> {
    validate::check_finite("sample", data)?;
    if data.is_empty() {
        return Err(Error::domain("mean of an empty sample is undefined"));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Unbiased sample variance (n − 1 denominator).
///
/// Requires at least two observations; with fewer, the denominator is zero
/// and the variance is undefined.
pub fn sample_variance(data: &[f64]) -> Result<f64> {
    validate::check_finite("sample", data)?;
    validate::check_group_size("sample", data, 2)?;

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Ok(variance)
}

/// Unbiased sample standard deviation.
pub fn sample_std(data: &[f64]) -> Result<f64> {
    Ok(sample_variance(data)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        let data = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(sample_mean(&data).unwrap(), 6.0);
    }

    #[test]
    fn test_mean_empty() {
        assert!(sample_mean(&[]).is_err());
    }

    #[test]
    fn test_variance_unbiased_convention() {
        // Sum of squared deviations is 40; n − 1 = 4
        let data = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(sample_variance(&data).unwrap(), 10.0);
        assert_relative_eq!(sample_std(&data).unwrap(), 10.0_f64.sqrt());
    }

    #[test]
    fn test_variance_constant_sample() {
        let data = vec![3.0, 3.0, 3.0, 3.0];
        assert_relative_eq!(sample_variance(&data).unwrap(), 0.0);
    }

    #[test]
    fn test_variance_needs_two_observations() {
        assert!(matches!(
            sample_variance(&[5.0]),
            Err(power_core::Error::Domain(_))
        ));
        assert!(sample_variance(&[]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(sample_mean(&[1.0, f64::NAN]).is_err());
        assert!(sample_variance(&[1.0, f64::INFINITY, 2.0]).is_err());
    }
}
