//! Sidedness of the alternative hypothesis

use power_core::Error;
use std::fmt;
use std::str::FromStr;

/// Alternative hypothesis for the two-sample t-test
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum Alternative {
    /// Group means differ in either direction
    #[default]
    TwoSided,
    /// Mean of group 1 exceeds mean of group 2
    Larger,
    /// Mean of group 1 falls below mean of group 2
    Smaller,
}

impl Alternative {
    /// Canonical string form, matching the accepted `FromStr` spellings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoSided => "two-sided",
            Self::Larger => "larger",
            Self::Smaller => "smaller",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Alternative {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-sided" => Ok(Self::TwoSided),
            "larger" => Ok(Self::Larger),
            "smaller" => Ok(Self::Smaller),
            other => Err(Error::invalid_parameter(format!(
                "unrecognized alternative '{other}'; expected one of 'two-sided', 'larger', 'smaller'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_sided() {
        assert_eq!(Alternative::default(), Alternative::TwoSided);
    }

    #[test]
    fn test_from_str_round_trip() {
        for alt in [
            Alternative::TwoSided,
            Alternative::Larger,
            Alternative::Smaller,
        ] {
            assert_eq!(alt.as_str().parse::<Alternative>().unwrap(), alt);
            assert_eq!(format!("{alt}"), alt.as_str());
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "one-sided".parse::<Alternative>().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(err.to_string().contains("one-sided"));
    }
}
