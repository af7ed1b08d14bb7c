//! Chart export for distribution curves
//!
//! Exporters are pluggable so callers that only need the numbers can skip
//! drawing entirely with [`NullExporter`].

use crate::curve::DistributionCurve;
use paired_core::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file name for exported charts
pub const DEFAULT_OUTPUT: &str = "t_distribution.png";

/// Chart dimensions, caption and destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub caption: String,
    pub output_path: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            caption: "Student-t distribution".to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ChartConfig {
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

/// Something that can turn a [`DistributionCurve`] into an artifact
pub trait ChartExporter {
    /// Export the curve, returning where it was written if anything was written
    fn export(&mut self, curve: &DistributionCurve) -> Result<Option<PathBuf>>;

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Exporter that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullExporter;

impl ChartExporter for NullExporter {
    #[inline(always)]
    fn export(&mut self, _curve: &DistributionCurve) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(feature = "png")]
pub use png::PngExporter;

#[cfg(feature = "png")]
mod png {
    use super::{ChartConfig, ChartExporter};
    use crate::curve::{DistributionCurve, LineStyle, DOMAIN_MAX, DOMAIN_MIN};
    use paired_core::{Error, Result};
    use plotters::prelude::*;
    use std::path::PathBuf;
    use tracing::{debug, instrument};

    fn render_error<E: std::fmt::Display>(err: E) -> Error {
        Error::Render(err.to_string())
    }

    /// Draws the density and its markers to a PNG bitmap
    #[derive(Debug, Clone, Default)]
    pub struct PngExporter {
        config: ChartConfig,
    }

    impl PngExporter {
        pub fn new(config: ChartConfig) -> Self {
            Self { config }
        }

        pub fn config(&self) -> &ChartConfig {
            &self.config
        }
    }

    impl ChartExporter for PngExporter {
        #[instrument(skip(self, curve), fields(path = %self.config.output_path.display()))]
        fn export(&mut self, curve: &DistributionCurve) -> Result<Option<PathBuf>> {
            let (width, height) = (self.config.width, self.config.height);
            if width == 0 || height == 0 {
                return Err(Error::InvalidParameter(format!(
                    "Chart size must be positive, got {width}x{height}"
                )));
            }

            let root = BitMapBackend::new(&self.config.output_path, (width, height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let y_max = curve.max_density() * 1.1;
            let mut chart = ChartBuilder::on(&root)
                .caption(&self.config.caption, ("sans-serif", 24))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(DOMAIN_MIN..DOMAIN_MAX, 0.0..y_max)
                .map_err(render_error)?;

            chart
                .configure_mesh()
                .x_desc("t")
                .y_desc("f(t)")
                .draw()
                .map_err(render_error)?;

            for series in curve.series() {
                let (r, g, b) = series.color.rgb();
                let style = RGBColor(r, g, b).stroke_width(2);
                match (series.line_style, series.marker_value()) {
                    (LineStyle::Dashed, Some(value)) => {
                        // Constant values are drawn as vertical markers at t = value
                        if !(DOMAIN_MIN..=DOMAIN_MAX).contains(&value) {
                            debug!("{} at {value} lies outside the plotted domain", series.label);
                            continue;
                        }
                        chart
                            .draw_series(DashedLineSeries::new(
                                vec![(value, 0.0), (value, y_max)],
                                6,
                                4,
                                style,
                            ))
                            .map_err(render_error)?
                            .label(series.label)
                            .legend(move |(x, y)| {
                                PathElement::new(vec![(x, y), (x + 20, y)], style)
                            });
                    }
                    _ => {
                        chart
                            .draw_series(LineSeries::new(series.points, style))
                            .map_err(render_error)?
                            .label(series.label)
                            .legend(move |(x, y)| {
                                PathElement::new(vec![(x, y), (x + 20, y)], style)
                            });
                    }
                }
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperMiddle)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(render_error)?;

            root.present().map_err(render_error)?;
            debug!("chart written");
            Ok(Some(self.config.output_path.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::render;

    #[test]
    fn test_null_exporter() {
        let curve = render(1.5, 4, 0.05).unwrap();
        let mut exporter = NullExporter;
        assert!(!exporter.is_enabled());
        assert_eq!(exporter.export(&curve).unwrap(), None);
    }

    #[test]
    fn test_chart_config_defaults() {
        let config = ChartConfig::default();
        assert_eq!((config.width, config.height), (800, 500));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));

        let config = config.with_size(640, 480).with_output("out/chart.png").with_caption("paired");
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.output_path, PathBuf::from("out/chart.png"));
        assert_eq!(config.caption, "paired");
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_png_rejects_zero_size() {
        let curve = render(1.5, 4, 0.05).unwrap();
        let mut exporter = PngExporter::new(ChartConfig::default().with_size(0, 100));
        assert!(matches!(
            exporter.export(&curve),
            Err(paired_core::Error::InvalidParameter(_))
        ));
    }
}
