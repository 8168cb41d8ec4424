use log::{info, warn};
use crate::analysis::{AnalysisError, Peak};
/// Curated pair of peak ordinals and the reference spacing printed between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakSpan {
    pub start: usize,
    pub end: usize,
    pub delta_v: f64,
}
impl PeakSpan {
    pub const fn new(start: usize, end: usize, delta_v: f64) -> Self {
        Self {
            start,
            end,
            delta_v,
        }
    }
    pub fn label(&self) -> String {
        format!("ΔV = {:.2}V", self.delta_v)
    }
}
/// Spans annotated on the mercury run. Peak #4 is not annotated.
pub const MERCURY_SPANS: [PeakSpan; 5] = [
    PeakSpan::new(0, 1, 4.70),
    PeakSpan::new(1, 2, 4.90),
    PeakSpan::new(2, 3, 4.90),
    PeakSpan::new(3, 5, 4.80),
    PeakSpan::new(5, 6, 4.80),
];
/// Span placed on the detected peaks.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSpan {
    pub span: PeakSpan,
    pub start_voltage: f64,
    pub end_voltage: f64,
}
impl ResolvedSpan {
    pub fn measured_delta(&self) -> f64 {
        self.end_voltage - self.start_voltage
    }
    pub fn mid_voltage(&self) -> f64 {
        (self.start_voltage + self.end_voltage) / 2.0
    }
}
/// Deviation between the measured and curated spacing that gets logged.
pub const SPACING_WARN_VOLTS: f64 = 0.5;
/// Looks every span up in the detected peaks. A span naming a peak that was
/// not detected fails the whole resolution.
pub fn resolve_spans(
    spans: &[PeakSpan],
    peaks: &[Peak],
) -> Result<Vec<ResolvedSpan>, AnalysisError> {
    spans
        .iter()
        .map(|span| {
            let lookup = |ordinal: usize| {
                peaks
                    .get(ordinal)
                    .map(|p| p.voltage)
                    .ok_or(AnalysisError::MissingPeak {
                        start: span.start,
                        end: span.end,
                        missing: ordinal,
                        detected: peaks.len(),
                    })
            };
            let resolved = ResolvedSpan {
                span: *span,
                start_voltage: lookup(span.start)?,
                end_voltage: lookup(span.end)?,
            };
            let measured = resolved.measured_delta();
            info!(
                "Peaks {}->{}: measured {measured:.2} V, annotated {:.2} V",
                span.start, span.end, span.delta_v
            );
            if (measured - span.delta_v).abs() > SPACING_WARN_VOLTS {
                warn!(
                    "Peaks {}->{} are {measured:.2} V apart, annotation says {:.2} V",
                    span.start, span.end, span.delta_v
                );
            }
            Ok(resolved)
        })
        .collect()
}
/// Mean voltage step between consecutive detected peaks.
pub fn mean_spacing(peaks: &[Peak]) -> Option<f64> {
    if peaks.len() < 2 {
        return None;
    }
    let first = peaks.first()?.voltage;
    let last = peaks.last()?.voltage;
    Some((last - first) / (peaks.len() - 1) as f64)
}
