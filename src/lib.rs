//! # Paired Stats
//!
//! Paired-sample t-testing with a rendered Student-t reference distribution.
//!
//! This crate re-exports the member crates of the workspace:
//!
//! - [`core`]: error type and the Student-t distribution routines
//! - [`ttest`]: validation, the paired t-test engine and report formatting
//! - [`viz`]: density curves, critical-value markers and PNG export
//!
//! [`compute_and_render`] runs the whole pipeline for one request.
//!
//! ```
//! use paired_stats::prelude::*;
//!
//! let x = "10, 12, 9, 15, 11";
//! let y = "8, 11, 9, 13, 10";
//! let input = PairedInput::from_fields(x, y, TTestConfig::default())?;
//! let analysis = compute_and_render(&input)?;
//! assert_eq!(analysis.result.decision, Decision::RejectNull);
//! assert_eq!(analysis.curve.degrees_of_freedom, 4);
//! # Ok::<(), paired_stats::Error>(())
//! ```

pub use paired_core as core;
pub use paired_ttest as ttest;
pub use paired_viz as viz;

pub use paired_core::{Error, Result};

use paired_ttest::{PairedInput, PairedTTest, TestResult};
use paired_viz::{ChartExporter, DistributionCurve, DistributionRenderer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Outcome of one request: the test result and its reference distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub result: TestResult,
    pub curve: DistributionCurve,
}

/// Validate, test and sample the reference distribution
///
/// Fails before any distribution work when the input is rejected.
#[instrument(skip(input), fields(n_x = input.x.len(), n_y = input.y.len()))]
pub fn compute_and_render(input: &PairedInput) -> Result<Analysis> {
    let result = PairedTTest::new(input.config).compute(&input.x, &input.y)?;
    let curve = DistributionRenderer::new().render_result(&result)?;
    debug!(t = result.t_statistic, p = result.p_value, "analysis complete");
    Ok(Analysis { result, curve })
}

/// [`compute_and_render`] followed by an export of the curve
pub fn compute_and_export<E: ChartExporter>(
    input: &PairedInput,
    exporter: &mut E,
) -> Result<(Analysis, Option<PathBuf>)> {
    let analysis = compute_and_render(input)?;
    let written = exporter.export(&analysis.curve)?;
    Ok((analysis, written))
}

/// Commonly used types
pub mod prelude {
    pub use crate::{compute_and_export, compute_and_render, Analysis};
    pub use paired_core::{student_t, Error, Result};
    pub use paired_ttest::{
        compute, Alpha, AlternativeHypothesis, ConfidenceInterval, Decision, PairedInput,
        PairedTTest, TTestConfig, TestReport, TestResult,
    };
    pub use paired_viz::{
        ChartConfig, ChartExporter, DistributionCurve, DistributionRenderer, NullExporter,
        PngExporter,
    };
}
