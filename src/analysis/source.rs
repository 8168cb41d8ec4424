use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::ReaderBuilder;
use log::{debug, info};
use crate::analysis::{AnalysisError, SampleSeries};
/// Something that can hand over one voltage/current run.
pub trait SeriesSource {
    fn load(&mut self) -> Result<SampleSeries, AnalysisError>;
}
/// Reads two named columns from a CSV table and flips the current's sign.
///
/// The tube's collector current is recorded as a negative value, so the
/// loader negates it to get upward-pointing peaks. A blank cell in either
/// column ends the run; the interface writes shorter runs padded with
/// empty cells next to longer ones.
pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
    voltage_column: String,
    current_column: String,
}
impl CsvSource<File> {
    pub fn from_path(
        path: impl AsRef<Path>,
        voltage_column: &str,
        current_column: &str,
    ) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        info!("Reading {}", path.display());
        let reader = ReaderBuilder::new().flexible(true).from_path(path)?;
        Ok(Self {
            reader,
            voltage_column: voltage_column.to_owned(),
            current_column: current_column.to_owned(),
        })
    }
}
impl<R: Read> CsvSource<R> {
    pub fn from_reader(reader: R, voltage_column: &str, current_column: &str) -> Self {
        Self {
            reader: ReaderBuilder::new().flexible(true).from_reader(reader),
            voltage_column: voltage_column.to_owned(),
            current_column: current_column.to_owned(),
        }
    }
}
impl<R: Read> SeriesSource for CsvSource<R> {
    fn load(&mut self) -> Result<SampleSeries, AnalysisError> {
        let headers = self.reader.headers()?.clone();
        let voltage_idx = column_index(&headers, &self.voltage_column)?;
        let current_idx = column_index(&headers, &self.current_column)?;
        let mut voltage = Vec::new();
        let mut current = Vec::new();
        for record in self.reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let v = record.get(voltage_idx).map(str::trim).unwrap_or("");
            let c = record.get(current_idx).map(str::trim).unwrap_or("");
            if v.is_empty() || c.is_empty() {
                debug!("Run ends at line {line}");
                break;
            }
            voltage.push(parse_cell(v, line, &self.voltage_column)?);
            current.push(-parse_cell(c, line, &self.current_column)?);
        }
        info!("Loaded {} samples", voltage.len());
        SampleSeries::new(voltage, current)
    }
}
fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, AnalysisError> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| AnalysisError::MissingColumn(name.to_owned()))
}
fn parse_cell(value: &str, line: u64, column: &str) -> Result<f64, AnalysisError> {
    value.parse::<f64>().map_err(|_| AnalysisError::BadNumber {
        line,
        column: column.to_owned(),
        value: value.to_owned(),
    })
}
/// In-memory source useful for tests and replaying synthetic runs.
pub struct ManualSource {
    series: SampleSeries,
}
impl ManualSource {
    pub fn new(series: SampleSeries) -> Self {
        Self { series }
    }
}
impl SeriesSource for ManualSource {
    fn load(&mut self) -> Result<SampleSeries, AnalysisError> {
        Ok(self.series.clone())
    }
}
