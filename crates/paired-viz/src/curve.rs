//! Sampling of the Student-t density and critical values for plotting

use paired_core::{student_t, Error, Result};
use paired_ttest::{Alpha, TestResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Left edge of the plotted t domain
pub const DOMAIN_MIN: f64 = -4.0;
/// Right edge of the plotted t domain
pub const DOMAIN_MAX: f64 = 4.0;
/// Distance between consecutive density samples
pub const STEP: f64 = 0.1;
/// Number of density samples, both edges included
pub const DENSITY_POINTS: usize = 81;

const SAMPLES_PER_UNIT: f64 = 10.0;

/// Stroke pattern of a chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesColor {
    Blue,
    Red,
    Green,
    Orange,
}

impl SeriesColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0, 0, 255),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 128, 0),
            Self::Orange => (255, 165, 0),
        }
    }
}

/// One labelled line of the distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub line_style: LineStyle,
    pub color: SeriesColor,
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    /// A series holding `value` at every domain sample
    fn constant(label: &str, color: SeriesColor, value: f64, domain: &[(f64, f64)]) -> Self {
        Self {
            label: label.to_string(),
            line_style: LineStyle::Dashed,
            color,
            points: domain.iter().map(|&(t, _)| (t, value)).collect(),
        }
    }

    /// The constant value of a marker series, `None` for the density curve
    pub fn marker_value(&self) -> Option<f64> {
        match self.line_style {
            LineStyle::Dashed => self.points.first().map(|&(_, v)| v),
            LineStyle::Solid => None,
        }
    }
}

/// Sampled reference distribution with the statistic and one-sided critical values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCurve {
    /// `(t, density)` pairs over `[DOMAIN_MIN, DOMAIN_MAX]`
    pub points: Vec<(f64, f64)>,
    pub t_statistic: f64,
    pub degrees_of_freedom: usize,
    pub alpha: f64,
    /// `InverseCDF(alpha, df)`
    pub critical_left: f64,
    /// `InverseCDF(1 - alpha, df)`
    pub critical_right: f64,
}

impl DistributionCurve {
    /// Largest sampled density, the peak at `t = 0`
    pub fn max_density(&self) -> f64 {
        self.points.iter().map(|&(_, d)| d).fold(0.0, f64::max)
    }

    /// Chart series in drawing order: density, statistic, left and right critical values
    pub fn series(&self) -> [ChartSeries; 4] {
        [
            ChartSeries {
                label: "Student-t distribution".to_string(),
                line_style: LineStyle::Solid,
                color: SeriesColor::Blue,
                points: self.points.clone(),
            },
            ChartSeries::constant("Computed t", SeriesColor::Red, self.t_statistic, &self.points),
            ChartSeries::constant(
                "Left critical value",
                SeriesColor::Green,
                self.critical_left,
                &self.points,
            ),
            ChartSeries::constant(
                "Right critical value",
                SeriesColor::Orange,
                self.critical_right,
                &self.points,
            ),
        ]
    }
}

/// Builds [`DistributionCurve`]s; holds no state between calls
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionRenderer;

impl DistributionRenderer {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self))]
    pub fn render(&self, t_statistic: f64, df: usize, alpha: f64) -> Result<DistributionCurve> {
        if df < 1 {
            return Err(Error::InvalidParameter(format!(
                "Degrees of freedom must be at least 1, got {df}"
            )));
        }
        if t_statistic.is_nan() {
            return Err(Error::InvalidParameter("t statistic is NaN".to_string()));
        }
        let alpha = Alpha::new(alpha)?.value();
        let dof = df as f64;

        let points: Vec<(f64, f64)> = (0..DENSITY_POINTS)
            .map(|i| {
                let t = (i as f64 + DOMAIN_MIN * SAMPLES_PER_UNIT) / SAMPLES_PER_UNIT;
                (t, student_t::pdf(t, dof))
            })
            .collect();

        let critical_left = student_t::inverse_cdf(alpha, dof);
        let critical_right = student_t::inverse_cdf(1.0 - alpha, dof);
        debug!("critical values [{critical_left}, {critical_right}]");

        Ok(DistributionCurve {
            points,
            t_statistic,
            degrees_of_freedom: df,
            alpha,
            critical_left,
            critical_right,
        })
    }

    /// Curve for a finished test, reusing its statistic, df and alpha
    pub fn render_result(&self, result: &TestResult) -> Result<DistributionCurve> {
        self.render(result.t_statistic, result.degrees_of_freedom, result.alpha)
    }
}

/// Render with a default [`DistributionRenderer`]
pub fn render(t_statistic: f64, df: usize, alpha: f64) -> Result<DistributionCurve> {
    DistributionRenderer::new().render(t_statistic, df, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_domain_sampling() {
        let curve = render(3.2071, 4, 0.05).unwrap();
        assert_eq!(curve.points.len(), DENSITY_POINTS);
        assert_eq!(curve.points[0].0, DOMAIN_MIN);
        assert_eq!(curve.points[DENSITY_POINTS - 1].0, DOMAIN_MAX);
        assert_eq!(curve.points[40].0, 0.0);
        for pair in curve.points.windows(2) {
            assert_relative_eq!(pair[1].0 - pair[0].0, STEP, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_density_values() {
        let curve = render(0.0, 4, 0.05).unwrap();
        assert_relative_eq!(curve.points[40].1, 0.375, epsilon = 1e-12);
        assert_relative_eq!(curve.max_density(), 0.375, epsilon = 1e-12);
        // Symmetric about zero
        for i in 0..DENSITY_POINTS {
            let mirrored = curve.points[DENSITY_POINTS - 1 - i].1;
            assert_relative_eq!(curve.points[i].1, mirrored, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_critical_values() {
        let curve = render(1.0, 10, 0.05).unwrap();
        assert_relative_eq!(curve.critical_left, -1.812_461_122_811_676, epsilon = 1e-9);
        assert_relative_eq!(curve.critical_right, 1.812_461_122_811_676, epsilon = 1e-9);
    }

    #[test]
    fn test_series_layout() {
        let curve = render(2.5, 6, 0.1).unwrap();
        let series = curve.series();

        assert_eq!(series[0].line_style, LineStyle::Solid);
        assert_eq!(series[0].marker_value(), None);
        assert_eq!(series[1].label, "Computed t");
        assert_eq!(series[1].marker_value(), Some(2.5));
        assert_eq!(series[2].marker_value(), Some(curve.critical_left));
        assert_eq!(series[3].marker_value(), Some(curve.critical_right));
        for s in &series {
            assert_eq!(s.points.len(), DENSITY_POINTS);
        }
        for s in &series[1..] {
            assert_eq!(s.line_style, LineStyle::Dashed);
            assert!(s.points.iter().all(|&(_, v)| v == s.points[0].1));
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(render(1.0, 0, 0.05), Err(Error::InvalidParameter(_))));
        assert!(matches!(render(1.0, 3, 0.0), Err(Error::InvalidParameter(_))));
        assert!(matches!(render(1.0, 3, 1.0), Err(Error::InvalidParameter(_))));
        assert!(matches!(render(f64::NAN, 3, 0.05), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_color_table() {
        assert_eq!(SeriesColor::Blue.rgb(), (0, 0, 255));
        assert_eq!(SeriesColor::Orange.rgb(), (255, 165, 0));
    }
}
