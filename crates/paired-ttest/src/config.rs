//! Test configuration: significance level and alternative hypothesis

use paired_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Significance level of a test, validated to lie strictly inside (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Alpha(f64);

impl Alpha {
    /// Create a new significance level
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha > 0.0 && alpha < 1.0 {
            Ok(Self(alpha))
        } else {
            Err(Error::invalid_alpha(alpha))
        }
    }

    /// Get the significance level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Confidence level of the matching two-sided interval (1 - alpha)
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.0
    }

    /// Common significance levels
    pub const TEN_PERCENT: Self = Self(0.10);
    pub const FIVE_PERCENT: Self = Self(0.05);
    pub const ONE_PERCENT: Self = Self(0.01);
}

impl Default for Alpha {
    fn default() -> Self {
        Self::FIVE_PERCENT
    }
}

impl TryFrom<f64> for Alpha {
    type Error = Error;

    fn try_from(alpha: f64) -> Result<Self> {
        Self::new(alpha)
    }
}

impl From<Alpha> for f64 {
    fn from(alpha: Alpha) -> Self {
        alpha.0
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which tail(s) of the t distribution contribute to the p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlternativeHypothesis {
    /// Mean difference is less than zero
    Left,
    /// Mean difference is greater than zero
    Right,
    /// Mean difference is not zero
    #[default]
    TwoSided,
}

impl AlternativeHypothesis {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::TwoSided => "two-sided",
        }
    }
}

impl FromStr for AlternativeHypothesis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "less" => Ok(Self::Left),
            "right" | "greater" => Ok(Self::Right),
            "two-sided" | "two_sided" | "two" | "both" => Ok(Self::TwoSided),
            other => Err(Error::InvalidParameter(format!(
                "Unknown alternative hypothesis '{other}', expected left, right or two-sided"
            ))),
        }
    }
}

impl fmt::Display for AlternativeHypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a paired t-test
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TTestConfig {
    /// Significance level, also used for the confidence interval
    pub alpha: Alpha,
    /// Tail selection for the p-value
    pub alternative: AlternativeHypothesis,
}

impl TTestConfig {
    pub fn new(alpha: Alpha, alternative: AlternativeHypothesis) -> Self {
        Self { alpha, alternative }
    }

    /// Set the significance level, validating it
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        self.alpha = Alpha::new(alpha)?;
        Ok(self)
    }

    pub fn with_alternative(mut self, alternative: AlternativeHypothesis) -> Self {
        self.alternative = alternative;
        self
    }
}
