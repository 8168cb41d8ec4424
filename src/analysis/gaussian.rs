/// Gaussian kernel used to soften the displayed curve.
///
/// The kernel is truncated at `truncate` standard deviations and samples past
/// either end are mirrored about the edge (`d c b a | a b c d | d c b a`).
#[derive(Clone, Debug)]
pub struct GaussianFilter {
    weights: Vec<f64>,
    radius: usize,
}
impl GaussianFilter {
    pub const DEFAULT_TRUNCATE: f64 = 4.0;
    pub fn new(sigma: f64) -> Self {
        Self::with_truncate(sigma, Self::DEFAULT_TRUNCATE)
    }
    pub fn with_truncate(sigma: f64, truncate: f64) -> Self {
        let sigma = if sigma.is_finite() { sigma.max(0.0) } else { 0.0 };
        let radius = (truncate * sigma + 0.5) as usize;
        if radius == 0 {
            return Self {
                weights: vec![1.0],
                radius,
            };
        }
        let raw: Vec<f64> = (0..=2 * radius)
            .map(|i| {
                let x = i as f64 - radius as f64;
                (-0.5 * x * x / (sigma * sigma)).exp()
            })
            .collect();
        let total: f64 = raw.iter().sum();
        Self {
            weights: raw.into_iter().map(|w| w / total).collect(),
            radius,
        }
    }
    pub fn apply(&self, samples: &[f64]) -> Vec<f64> {
        let n = samples.len();
        if n == 0 {
            return Vec::new();
        }
        (0..n)
            .map(|i| {
                self.weights
                    .iter()
                    .enumerate()
                    .map(|(k, w)| {
                        let offset = i as isize + k as isize - self.radius as isize;
                        w * samples[reflect_index(offset, n)]
                    })
                    .sum()
            })
            .collect()
    }
}
fn reflect_index(index: isize, n: usize) -> usize {
    let period = 2 * n as isize;
    let m = index.rem_euclid(period) as usize;
    if m < n {
        m
    } else {
        2 * n - 1 - m
    }
}
