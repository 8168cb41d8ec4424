// src/main.rs
use anyhow::{Context, Result};
use log::info;
use franck_hertz::analysis::CsvSource;
use franck_hertz::{AnalysisConfig, AnalysisPipeline};
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = AnalysisConfig::default();
    let source = CsvSource::from_path(
        &config.input_path,
        &config.voltage_column,
        &config.current_column,
    )
    .with_context(|| format!("cannot open {}", config.input_path.display()))?;
    let mut pipeline = AnalysisPipeline::new(source, config);
    info!(
        "FFT cutoff {}, peak thresholds {:?}",
        pipeline.config().fft_cutoff,
        pipeline.config().peaks
    );
    let report = pipeline.run().context("analysis failed")?;
    for (ordinal, peak) in report.peaks.iter().enumerate() {
        info!("Peak #{ordinal}: {:.2} V", peak.voltage);
    }
    if let Some(spacing) = report.mean_spacing {
        info!("Mean peak spacing {spacing:.2} V");
    }
    info!("Plot saved to {}", report.output_path.display());
    Ok(())
}
