//! Human-readable rendering of a [`TestResult`]

use crate::TestResult;
use std::fmt;

/// Labelled, 4-decimal presentation of a test result
///
/// `Display` writes one `label: value` line per field.
#[derive(Debug, Clone, Copy)]
pub struct TestReport<'a> {
    result: &'a TestResult,
}

impl<'a> TestReport<'a> {
    pub fn new(result: &'a TestResult) -> Self {
        Self { result }
    }

    /// Label/value pairs in display order
    pub fn lines(&self) -> Vec<(String, String)> {
        let r = self.result;
        let ci = &r.confidence_interval;
        vec![
            ("t statistic".to_string(), format!("{:.4}", r.t_statistic)),
            ("p-value".to_string(), format!("{:.4}", r.p_value)),
            ("Decision".to_string(), r.decision.to_string()),
            (
                format!("Confidence interval ({})", format_percent(ci.confidence_level)),
                format!("[{:.4}, {:.4}]", ci.lower, ci.upper),
            ),
            ("Mean of differences".to_string(), format!("{:.4}", r.mean_diff)),
            (
                "Standard deviation of differences".to_string(),
                format!("{:.4}", r.std_dev_diff),
            ),
            ("Degrees of freedom".to_string(), r.degrees_of_freedom.to_string()),
        ]
    }
}

impl fmt::Display for TestReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

impl TestResult {
    pub fn report(&self) -> TestReport<'_> {
        TestReport::new(self)
    }
}

// 0.95 -> "95%", 0.975 -> "97.5%"
fn format_percent(level: f64) -> String {
    let formatted = format!("{:.2}", level * 100.0);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}
