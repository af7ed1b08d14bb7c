//! Paired-sample Student's t-test
//!
//! This crate tests whether the mean of paired differences `x[i] - y[i]`
//! differs from zero. It reports the t statistic, degrees of freedom,
//! p-value, decision at a chosen significance level and a two-sided
//! confidence interval for the mean difference.
//!
//! # Overview
//!
//! - [`SamplePair`] validates the two samples (equal length, at least two
//!   pairs, finite values) and derives the [`DifferenceSeries`].
//! - [`PairedTTest`] runs the test under a [`TTestConfig`].
//! - [`TestResult`] holds the outcome; [`TestReport`] formats it.
//! - The [`input`] module parses samples from text fields and CSV.
//!
//! # Examples
//!
//! ```rust
//! use paired_ttest::{compute, AlternativeHypothesis, Decision};
//!
//! let before = [10.0, 12.0, 9.0, 15.0, 11.0];
//! let after = [8.0, 11.0, 9.0, 13.0, 10.0];
//!
//! let result = compute(&before, &after, 0.05, AlternativeHypothesis::TwoSided).unwrap();
//! assert_eq!(result.degrees_of_freedom, 4);
//! assert_eq!(result.decision, Decision::RejectNull);
//! println!("{}", result.report());
//! ```
//!
//! ## Reading pairs from CSV
//!
//! ```rust
//! use paired_ttest::{input::PairedInput, PairedTTest, TTestConfig};
//!
//! let csv = "10,8\n12,11\n9,9\n15,13\n11,10\n";
//! let input = PairedInput::from_csv_reader(csv.as_bytes(), TTestConfig::default()).unwrap();
//! let result = PairedTTest::new(input.config).compute(&input.x, &input.y).unwrap();
//! assert!(result.p_value < 0.05);
//! ```

mod config;
mod engine;
pub mod input;
mod report;
mod sample;
mod types;

// Re-exports
pub use config::{Alpha, AlternativeHypothesis, TTestConfig};
pub use engine::{compute, p_value, PairedTTest};
pub use input::PairedInput;
pub use report::TestReport;
pub use sample::{DifferenceSeries, SamplePair, MIN_PAIRS};
pub use types::{ConfidenceInterval, Decision, TestResult};

pub use paired_core::{Error, Result};
