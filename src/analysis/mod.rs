// src/analysis/mod.rs
pub mod annotate;
pub mod error;
pub mod fft;
pub mod gaussian;
pub mod peaks;
pub mod pipeline;
pub mod plot;
pub mod series;
pub mod source;
pub use annotate::{PeakSpan, ResolvedSpan, MERCURY_SPANS};
pub use error::AnalysisError;
pub use fft::FourierSmoother;
pub use gaussian::GaussianFilter;
pub use peaks::{find_peaks, Peak, PeakCriteria};
pub use pipeline::{Analysis, AnalysisPipeline, AnalysisReport};
pub use plot::{render_peaks_png, write_png, PlotData, PlotStyle};
pub use series::SampleSeries;
pub use source::{CsvSource, ManualSource, SeriesSource};
