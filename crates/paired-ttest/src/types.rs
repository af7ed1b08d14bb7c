//! Result types for the paired t-test

use crate::config::AlternativeHypothesis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing the p-value against the significance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// p-value below alpha
    RejectNull,
    /// p-value at or above alpha
    FailToReject,
}

impl Decision {
    pub fn from_p_value(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Self::RejectNull
        } else {
            Self::FailToReject
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::RejectNull)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RejectNull => "Reject H0",
            Self::FailToReject => "Fail to reject H0",
        };
        f.write_str(s)
    }
}

/// A two-sided confidence interval around the mean difference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}]",
            self.confidence_level * 100.0,
            self.lower,
            self.upper
        )
    }
}

/// Everything a paired t-test produces
///
/// `std_dev_diff` is always strictly positive: degenerate samples are
/// rejected before a result is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub mean_diff: f64,
    pub std_dev_diff: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
    pub decision: Decision,
    pub confidence_interval: ConfidenceInterval,
    /// Significance level the decision and interval were computed at
    pub alpha: f64,
    pub alternative: AlternativeHypothesis,
    pub n_pairs: usize,
}

impl TestResult {
    /// Standard error of the mean difference
    pub fn standard_error(&self) -> f64 {
        self.std_dev_diff / (self.n_pairs as f64).sqrt()
    }

    pub fn is_significant(&self) -> bool {
        self.decision.is_rejection()
    }
}
