use std::path::PathBuf;
use log::{debug, info};
use crate::analysis::annotate::{mean_spacing, resolve_spans};
use crate::analysis::fft::FourierSmoother;
use crate::analysis::gaussian::GaussianFilter;
use crate::analysis::peaks::detect_peaks;
use crate::analysis::plot::{render_peaks_png, write_png, PlotData};
use crate::analysis::source::SeriesSource;
use crate::analysis::{AnalysisError, Peak, ResolvedSpan, SampleSeries};
use crate::config::AnalysisConfig;
/// Intermediate results of one run, before anything is drawn.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Input series after the leading samples were dropped.
    pub series: SampleSeries,
    /// FFT-smoothed current, in amperes.
    pub smoothed: Vec<f64>,
    /// Plotted curve: smoothed current in display units, Gaussian filtered.
    pub display: Vec<f64>,
    pub peaks: Vec<Peak>,
    pub spans: Vec<ResolvedSpan>,
}
/// What a finished run produced.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub peaks: Vec<Peak>,
    pub spans: Vec<ResolvedSpan>,
    pub mean_spacing: Option<f64>,
    pub output_path: PathBuf,
    pub png_bytes: usize,
}
/// Load, smooth, find peaks, annotate and plot one run.
pub struct AnalysisPipeline<S: SeriesSource> {
    source: S,
    config: AnalysisConfig,
}
impl<S: SeriesSource> AnalysisPipeline<S> {
    pub fn new(source: S, config: AnalysisConfig) -> Self {
        Self { source, config }
    }
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
    pub fn analyze(&mut self) -> Result<Analysis, AnalysisError> {
        let series = self.source.load()?.skip_leading(self.config.skip_samples)?;
        info!(
            "Analyzing {} samples after skipping {}",
            series.len(),
            self.config.skip_samples
        );
        let smoothed = FourierSmoother::with_cutoff(self.config.fft_cutoff)?.smooth(series.current())?;
        let peaks = detect_peaks(series.voltage(), &smoothed, &self.config.peaks);
        info!("Detected {} peaks", peaks.len());
        for (ordinal, peak) in peaks.iter().enumerate() {
            debug!(
                "Peak #{ordinal}: sample {} at {:.2} V, {:.3e} A (prominence {:.3e})",
                peak.index, peak.voltage, peak.current, peak.prominence
            );
        }
        let spans = resolve_spans(&self.config.spans, &peaks)?;
        let scaled: Vec<f64> = smoothed
            .iter()
            .map(|v| v * self.config.display_scale)
            .collect();
        let display = GaussianFilter::new(self.config.display_sigma).apply(&scaled);
        Ok(Analysis {
            series,
            smoothed,
            display,
            peaks,
            spans,
        })
    }
    pub fn render(&self, analysis: &Analysis) -> Result<Vec<u8>, AnalysisError> {
        let markers: Vec<(f64, f64)> = analysis
            .peaks
            .iter()
            .map(|p| (p.voltage, p.current * self.config.display_scale))
            .collect();
        let data = PlotData {
            voltage: analysis.series.voltage(),
            curve: &analysis.display,
            peaks: &markers,
            spans: &analysis.spans,
        };
        render_peaks_png(&data, &self.config.plot)
    }
    pub fn run(&mut self) -> Result<AnalysisReport, AnalysisError> {
        let analysis = self.analyze()?;
        let png = self.render(&analysis)?;
        write_png(&self.config.output_path, &png)?;
        Ok(AnalysisReport {
            mean_spacing: mean_spacing(&analysis.peaks),
            peaks: analysis.peaks,
            spans: analysis.spans,
            output_path: self.config.output_path.clone(),
            png_bytes: png.len(),
        })
    }
}
