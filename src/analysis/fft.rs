use rustfft::{num_complex::Complex64, FftPlanner};
use crate::analysis::AnalysisError;
/// Normalized frequency of every DFT bin, in cycles per sample.
///
/// Bin `k` maps to `k / n` for the first `ceil(n / 2)` bins and to
/// `(k - n) / n` for the rest, so an even-length transform reports its
/// Nyquist bin as `-0.5`.
pub fn bin_frequencies(n: usize) -> Vec<f64> {
    let positive = (n + 1) / 2;
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 / n as f64
            } else {
                (k as f64 - n as f64) / n as f64
            }
        })
        .collect()
}
/// Brick-wall low-pass filter applied in the frequency domain.
pub struct FourierSmoother {
    cutoff: f64,
}
impl FourierSmoother {
    /// `cutoff` is a normalized frequency; anything at or above 0.5 keeps
    /// every bin.
    pub fn with_cutoff(cutoff: f64) -> Result<Self, AnalysisError> {
        if cutoff.is_nan() || cutoff < 0.0 {
            return Err(AnalysisError::InvalidCutoff(cutoff));
        }
        Ok(Self { cutoff })
    }
    pub fn smooth(&self, samples: &[f64]) -> Result<Vec<f64>, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        let n = samples.len();
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(n);
        let inverse = planner.plan_fft_inverse(n);
        let mut spectrum: Vec<Complex64> = samples
            .iter()
            .map(|&v| Complex64::new(v, 0.0))
            .collect();
        forward.process(&mut spectrum);
        for (bin, freq) in spectrum.iter_mut().zip(bin_frequencies(n)) {
            if freq.abs() > self.cutoff {
                *bin = Complex64::new(0.0, 0.0);
            }
        }
        inverse.process(&mut spectrum);
        // rustfft leaves the inverse unnormalized
        let scale = 1.0 / n as f64;
        Ok(spectrum.iter().map(|c| c.re * scale).collect())
    }
}
