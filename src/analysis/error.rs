use thiserror::Error;
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("column `{0}` not found in csv header")]
    MissingColumn(String),
    #[error("line {line}: `{value}` in column `{column}` is not a number")]
    BadNumber {
        line: u64,
        column: String,
        value: String,
    },
    #[error("voltage and current lengths differ: {voltage} vs {current}")]
    LengthMismatch { voltage: usize, current: usize },
    #[error("series has no samples")]
    EmptySeries,
    #[error("cannot skip {skip} samples, series only has {available}")]
    TooShort { skip: usize, available: usize },
    #[error("cutoff must be a non-negative number, got {0}")]
    InvalidCutoff(f64),
    #[error("span ({start}, {end}) needs peak #{missing}, only {detected} peaks detected")]
    MissingPeak {
        start: usize,
        end: usize,
        missing: usize,
        detected: usize,
    },
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for AnalysisError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AnalysisError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for AnalysisError {
    fn from(value: image::ImageError) -> Self {
        AnalysisError::Plot(value.to_string())
    }
}
