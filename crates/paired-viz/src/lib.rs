//! # Paired Viz
//!
//! Reference-distribution curves for paired t-tests.
//!
//! [`DistributionRenderer`] samples the Student-t density over `[-4, 4]` and
//! pairs it with the observed statistic and the one-sided critical values.
//! The resulting [`DistributionCurve`] is plain data; a [`ChartExporter`]
//! turns it into an image (PNG with the `png` feature).
//!
//! ```
//! use paired_viz::render;
//!
//! let curve = render(3.2071, 4, 0.05)?;
//! assert_eq!(curve.points.len(), 81);
//! assert!(curve.critical_left < 0.0 && curve.critical_right > 0.0);
//! # Ok::<(), paired_core::Error>(())
//! ```

pub mod chart;
pub mod curve;

pub use chart::{ChartConfig, ChartExporter, NullExporter, DEFAULT_OUTPUT};
#[cfg(feature = "png")]
pub use chart::PngExporter;
pub use curve::{
    render, ChartSeries, DistributionCurve, DistributionRenderer, LineStyle, SeriesColor,
    DENSITY_POINTS, DOMAIN_MAX, DOMAIN_MIN, STEP,
};
