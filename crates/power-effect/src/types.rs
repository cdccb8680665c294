//! Types for effect size representation

use std::fmt;

/// A standardized mean difference between two groups
///
/// The magnitude is Cohen's d taken as an absolute value: downstream power
/// computations treat effect size as a direction-free quantity. Callers that
/// need the direction of the difference should compare the group means
/// directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSize {
    /// The effect size magnitude (always ≥ 0)
    pub magnitude: f64,
    /// Interpretation of the magnitude
    pub interpretation: EffectSizeInterpretation,
    /// Sample sizes (group1, group2)
    pub sample_sizes: (usize, usize),
}

impl EffectSize {
    /// Create a new effect size from a magnitude and the group sizes
    pub fn new(magnitude: f64, sample_sizes: (usize, usize)) -> Self {
        let interpretation = EffectSizeInterpretation::from_magnitude(magnitude);
        Self {
            magnitude,
            interpretation,
            sample_sizes,
        }
    }

    /// Check if the effect size is practically significant
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Medium | EffectSizeInterpretation::Large
        )
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cohen's d: {:.3} ({})",
            self.magnitude, self.interpretation
        )
    }
}

/// Interpretation of effect size magnitude following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeInterpretation {
    /// Negligible effect (very small)
    Negligible,
    /// Small effect
    Small,
    /// Medium effect
    Medium,
    /// Large effect
    Large,
}

impl EffectSizeInterpretation {
    /// Get interpretation from a standardized-mean-difference magnitude
    pub fn from_magnitude(magnitude: f64) -> Self {
        let abs_magnitude = magnitude.abs();
        if abs_magnitude < 0.2 {
            Self::Negligible
        } else if abs_magnitude < 0.5 {
            Self::Small
        } else if abs_magnitude < 0.8 {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpretation_thresholds() {
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.1),
            EffectSizeInterpretation::Negligible
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.3),
            EffectSizeInterpretation::Small
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.6),
            EffectSizeInterpretation::Medium
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(1.0),
            EffectSizeInterpretation::Large
        );
    }

    #[test]
    fn test_effect_size_display() {
        let effect_size = EffectSize::new(0.6, (10, 10));
        let display = format!("{}", effect_size);
        assert!(display.contains("Cohen's d"));
        assert!(display.contains("0.600"));
        assert!(display.contains("medium"));
    }

    #[test]
    fn test_practical_significance() {
        assert!(!EffectSize::new(0.3, (5, 5)).is_practically_significant());
        assert!(EffectSize::new(0.5, (5, 5)).is_practically_significant());
        assert!(EffectSize::new(1.2, (5, 5)).is_practically_significant());
    }
}
