//! The paired-sample t-test
//!
//! Differences `d[i] = x[i] - y[i]` are tested against a mean of zero using
//! the Student-t distribution with `n - 1` degrees of freedom. The confidence
//! interval always uses the two-sided critical value at the configured
//! alpha, whichever alternative selects the p-value tails.

use crate::{
    Alpha, AlternativeHypothesis, ConfidenceInterval, Decision, SamplePair, TTestConfig,
    TestResult,
};
use paired_core::{student_t, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Paired t-test engine
///
/// Stateless apart from its configuration; every call to
/// [`compute`](Self::compute) is independent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PairedTTest {
    config: TTestConfig,
}

impl PairedTTest {
    pub fn new(config: TTestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TTestConfig {
        &self.config
    }

    /// Run the test on two raw samples
    #[instrument(
        skip(self, x, y),
        fields(
            n_x = x.len(),
            n_y = y.len(),
            alpha = self.config.alpha.value(),
            alternative = %self.config.alternative
        )
    )]
    pub fn compute(&self, x: &[f64], y: &[f64]) -> Result<TestResult> {
        let sample = SamplePair::from_slices(x, y).map_err(|e| {
            warn!("Rejected input: {e}");
            e
        })?;
        self.compute_sample(&sample)
    }

    /// Run the test on an already validated sample pair
    pub fn compute_sample(&self, sample: &SamplePair) -> Result<TestResult> {
        let differences = sample.differences();
        let n = differences.len();
        let sqrt_n = (n as f64).sqrt();

        let mean_diff = differences.mean();
        let std_dev_diff = differences.std_dev();
        if !(mean_diff.is_finite() && std_dev_diff.is_finite()) {
            warn!("Differences overflow: mean = {mean_diff}, sd = {std_dev_diff}");
            return Err(Error::InvalidInput(
                "Paired differences are too large to summarize as finite numbers".to_string(),
            ));
        }
        // Rounding in the mean can leave a tiny variance for identical differences
        if std_dev_diff == 0.0 || differences.is_constant() {
            warn!("All {n} paired differences equal {mean_diff}");
            return Err(Error::ZeroVariance {
                mean_difference: mean_diff,
            });
        }

        let standard_error = std_dev_diff / sqrt_n;
        let t_statistic = mean_diff / standard_error;
        let degrees_of_freedom = n - 1;
        let df = degrees_of_freedom as f64;
        debug!(
            "mean = {mean_diff}, sd = {std_dev_diff}, t = {t_statistic}, df = {degrees_of_freedom}"
        );

        let alpha = self.config.alpha.value();
        let t_critical = student_t::inverse_cdf(1.0 - alpha / 2.0, df);
        let margin_of_error = t_critical * standard_error;
        let confidence_interval = ConfidenceInterval::new(
            mean_diff - margin_of_error,
            mean_diff + margin_of_error,
            mean_diff,
            self.config.alpha.confidence_level(),
        );

        let p_value = p_value(t_statistic, df, self.config.alternative);
        let decision = Decision::from_p_value(p_value, alpha);
        debug!("p = {p_value}, critical = {t_critical}, decision = {decision}");

        Ok(TestResult {
            mean_diff,
            std_dev_diff,
            t_statistic,
            degrees_of_freedom,
            p_value,
            decision,
            confidence_interval,
            alpha,
            alternative: self.config.alternative,
            n_pairs: n,
        })
    }
}

/// p-value of `t_statistic` under the selected alternative
pub fn p_value(t_statistic: f64, df: f64, alternative: AlternativeHypothesis) -> f64 {
    let cdf = student_t::cdf(t_statistic, df);
    match alternative {
        AlternativeHypothesis::Left => cdf,
        AlternativeHypothesis::Right => 1.0 - cdf,
        AlternativeHypothesis::TwoSided => 2.0 * cdf.min(1.0 - cdf),
    }
}

/// Run a paired t-test with an unvalidated significance level
pub fn compute(
    x: &[f64],
    y: &[f64],
    alpha: f64,
    alternative: AlternativeHypothesis,
) -> Result<TestResult> {
    let config = TTestConfig::new(Alpha::new(alpha)?, alternative);
    PairedTTest::new(config).compute(x, y)
}
