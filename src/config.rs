use std::path::PathBuf;
use crate::analysis::{PeakCriteria, PeakSpan, PlotStyle, MERCURY_SPANS};
/// Every knob of one analysis run. The defaults reproduce the mercury run
/// (second run of the Ch A/Ch B capture).
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub voltage_column: String,
    pub current_column: String,
    /// Samples dropped from the start of the run before any processing.
    pub skip_samples: usize,
    /// Normalized FFT cutoff. 1.0 keeps every bin.
    pub fft_cutoff: f64,
    pub peaks: PeakCriteria,
    /// Factor applied to currents before plotting (A -> 1e-11 A).
    pub display_scale: f64,
    /// Width of the Gaussian that softens the plotted curve, in samples.
    pub display_sigma: f64,
    pub spans: Vec<PeakSpan>,
    pub output_path: PathBuf,
    pub plot: PlotStyle,
}
impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("mercury.csv"),
            voltage_column: "Voltage, Ch B (V) Run #2".to_owned(),
            current_column: "Current, Ch A (A) Run #2".to_owned(),
            skip_samples: 1258,
            fft_cutoff: 1.0,
            peaks: PeakCriteria {
                min_height: 0.2e-11,
                min_distance: 3,
                min_prominence: 1e-12,
            },
            display_scale: 1e11,
            display_sigma: 2.0,
            spans: MERCURY_SPANS.to_vec(),
            output_path: PathBuf::from("compact_voltage_current_plot.png"),
            plot: PlotStyle::default(),
        }
    }
}
