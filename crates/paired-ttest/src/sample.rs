//! Paired observations and the derived difference series

use paired_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Minimum number of pairs: one degree of freedom
pub const MIN_PAIRS: usize = 2;

/// Two matched samples of equal length
///
/// Construction enforces `x.len() == y.len() >= 2` and that every value is
/// finite. The pair is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePair {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SamplePair {
    /// Create a validated sample pair
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len()));
        }
        if let Some(index) = x.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite("Sample x", index));
        }
        if let Some(index) = y.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite("Sample y", index));
        }
        if x.len() < MIN_PAIRS {
            return Err(Error::insufficient_data(MIN_PAIRS, x.len()));
        }

        Ok(Self { x, y })
    }

    /// Create a validated sample pair by copying two slices
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self> {
        Self::new(x.to_vec(), y.to_vec())
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a validated pair
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Element-wise differences `x[i] - y[i]`
    pub fn differences(&self) -> DifferenceSeries {
        DifferenceSeries(self.x.iter().zip(&self.y).map(|(a, b)| a - b).collect())
    }
}

impl<'de> Deserialize<'de> for SamplePair {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            x: Vec<f64>,
            y: Vec<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.x, raw.y).map_err(serde::de::Error::custom)
    }
}

/// Differences of a [`SamplePair`], recomputed per test
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceSeries(Vec<f64>);

impl DifferenceSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// True when every difference equals the first
    pub fn is_constant(&self) -> bool {
        self.0.windows(2).all(|w| w[0] == w[1])
    }

    /// Arithmetic mean of the differences
    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    /// Bessel-corrected sample variance
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        let sum_sq: f64 = self.0.iter().map(|d| (d - mean).powi(2)).sum();
        sum_sq / (self.0.len() - 1) as f64
    }

    /// Sample standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_pair() {
        let pair = SamplePair::from_slices(&[10.0, 12.0, 9.0], &[8.0, 11.0, 9.0]).unwrap();
        assert_eq!(pair.len(), 3);
        assert!(!pair.is_empty());
        assert_eq!(pair.x(), &[10.0, 12.0, 9.0]);
        assert_eq!(pair.y(), &[8.0, 11.0, 9.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let err = SamplePair::from_slices(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_too_few_pairs() {
        let err = SamplePair::from_slices(&[1.0], &[2.0]).unwrap_err();
        assert!(err.is_invalid_input());

        let err = SamplePair::from_slices(&[], &[]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_non_numeric_values() {
        let err = SamplePair::from_slices(&[1.0, f64::NAN], &[1.0, 2.0]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("Sample x"));

        let err = SamplePair::from_slices(&[1.0, 2.0], &[f64::INFINITY, 2.0]).unwrap_err();
        assert!(err.to_string().contains("Sample y"));
    }

    #[test]
    fn test_difference_statistics() {
        let pair = SamplePair::from_slices(
            &[10.0, 12.0, 9.0, 15.0, 11.0],
            &[8.0, 11.0, 9.0, 13.0, 10.0],
        )
        .unwrap();
        let diffs = pair.differences();

        assert_eq!(diffs.as_slice(), &[2.0, 1.0, 0.0, 2.0, 1.0]);
        assert_relative_eq!(diffs.mean(), 1.2, epsilon = 1e-12);
        assert_relative_eq!(diffs.variance(), 0.7, epsilon = 1e-12);
        assert_relative_eq!(diffs.std_dev(), 0.836_660_026_534_075_6, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_differences() {
        let pair = SamplePair::from_slices(&[0.1, 0.1, 0.1], &[0.0, 0.0, 0.0]).unwrap();
        assert!(pair.differences().is_constant());

        let pair = SamplePair::from_slices(&[0.1, 0.2], &[0.0, 0.0]).unwrap();
        assert!(!pair.differences().is_constant());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: SamplePair = serde_json::from_str(r#"{"x":[1.0,2.0],"y":[0.5,1.0]}"#).unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_str::<SamplePair>(r#"{"x":[1.0,2.0],"y":[0.5]}"#);
        assert!(bad.is_err());
    }
}
