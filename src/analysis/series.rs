use crate::analysis::AnalysisError;
/// Voltage/current samples of one run, indexed by sample position.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    voltage: Vec<f64>,
    current: Vec<f64>,
}
impl SampleSeries {
    pub fn new(voltage: Vec<f64>, current: Vec<f64>) -> Result<Self, AnalysisError> {
        if voltage.len() != current.len() {
            return Err(AnalysisError::LengthMismatch {
                voltage: voltage.len(),
                current: current.len(),
            });
        }
        Ok(Self { voltage, current })
    }
    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }
    pub fn current(&self) -> &[f64] {
        &self.current
    }
    pub fn len(&self) -> usize {
        self.voltage.len()
    }
    pub fn is_empty(&self) -> bool {
        self.voltage.is_empty()
    }
    /// Drops the first `skip` samples. At least one sample must remain.
    pub fn skip_leading(mut self, skip: usize) -> Result<Self, AnalysisError> {
        if self.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        if skip >= self.len() {
            return Err(AnalysisError::TooShort {
                skip,
                available: self.len(),
            });
        }
        self.voltage.drain(..skip);
        self.current.drain(..skip);
        Ok(self)
    }
}
pub(crate) fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn rejects_mismatched_columns() {
        let err = SampleSeries::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::LengthMismatch {
                voltage: 2,
                current: 1
            }
        ));
    }
    #[test]
    fn skip_leading_keeps_tail() {
        let series = SampleSeries::new(vec![0.0, 1.0, 2.0, 3.0], vec![5.0, 6.0, 7.0, 8.0])
            .unwrap()
            .skip_leading(2)
            .unwrap();
        assert_eq!(series.voltage(), &[2.0, 3.0]);
        assert_eq!(series.current(), &[7.0, 8.0]);
        assert_eq!(min_max(series.voltage()), Some((2.0, 3.0)));
    }
    #[test]
    fn skip_leading_must_leave_samples() {
        let series = SampleSeries::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        assert!(matches!(
            series.skip_leading(2),
            Err(AnalysisError::TooShort {
                skip: 2,
                available: 2
            })
        ));
        let empty = SampleSeries::new(vec![], vec![]).unwrap();
        assert!(matches!(
            empty.skip_leading(0),
            Err(AnalysisError::EmptySeries)
        ));
    }
}
