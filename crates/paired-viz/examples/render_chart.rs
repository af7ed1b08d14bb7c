//! Render the reference distribution for a small paired sample
//!
//! Run with `cargo run -p paired-viz --example render_chart [output.png]`

use anyhow::Result;
use paired_ttest::{AlternativeHypothesis, PairedTTest, TTestConfig};
use paired_viz::{ChartConfig, ChartExporter, DistributionRenderer, PngExporter, DEFAULT_OUTPUT};

fn main() -> Result<()> {
    let output = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let before = [10.0, 12.0, 9.0, 15.0, 11.0];
    let after = [8.0, 11.0, 9.0, 13.0, 10.0];

    let config = TTestConfig::default().with_alternative(AlternativeHypothesis::TwoSided);
    let result = PairedTTest::new(config).compute(&before, &after)?;
    println!("{}", result.report());

    let curve = DistributionRenderer::new().render_result(&result)?;
    let mut exporter = PngExporter::new(ChartConfig::default().with_output(output));
    if let Some(path) = exporter.export(&curve)? {
        println!("Chart written to {}", path.display());
    }
    Ok(())
}
