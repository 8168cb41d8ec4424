use std::cmp::Ordering;
use log::debug;
/// Thresholds a local maximum has to clear to count as a peak.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakCriteria {
    pub min_height: f64,
    /// Minimum spacing between kept peaks, in samples. Values below 1 act as 1.
    pub min_distance: usize,
    pub min_prominence: f64,
}
/// A detected peak together with the values it was found at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    pub index: usize,
    pub voltage: f64,
    pub current: f64,
    pub prominence: f64,
}
/// Returns the indices of the peaks in `series` that satisfy every
/// threshold in `criteria`, in increasing order.
///
/// Candidates are filtered by height first, then thinned by distance
/// (highest peak wins inside a window), then checked for prominence.
pub fn find_peaks(series: &[f64], criteria: &PeakCriteria) -> Vec<usize> {
    select_peaks(series, criteria)
        .into_iter()
        .map(|(index, _)| index)
        .collect()
}
/// Same selection as [`find_peaks`], returned as [`Peak`]s carrying the
/// voltage at each index and the prominence computed during selection.
/// `voltage` is indexed like `series`.
pub fn detect_peaks(voltage: &[f64], series: &[f64], criteria: &PeakCriteria) -> Vec<Peak> {
    select_peaks(series, criteria)
        .into_iter()
        .map(|(index, prominence)| Peak {
            index,
            voltage: voltage[index],
            current: series[index],
            prominence,
        })
        .collect()
}
fn select_peaks(series: &[f64], criteria: &PeakCriteria) -> Vec<(usize, f64)> {
    let maxima = local_maxima(series);
    let tall: Vec<usize> = maxima
        .into_iter()
        .filter(|&i| series[i] >= criteria.min_height)
        .collect();
    let spaced = filter_by_distance(series, &tall, criteria.min_distance.max(1));
    let prominences = compute_prominences(series, &spaced);
    let peaks: Vec<(usize, f64)> = spaced
        .into_iter()
        .zip(prominences)
        .filter(|&(_, p)| p >= criteria.min_prominence)
        .collect();
    debug!("{} peaks pass {criteria:?}", peaks.len());
    peaks
}
/// Indices of samples that rise above their left neighbour and are followed
/// by a drop. Flat tops report their middle sample; the first and last
/// samples never qualify.
pub fn local_maxima(series: &[f64]) -> Vec<usize> {
    let mut maxima = Vec::new();
    if series.len() < 3 {
        return maxima;
    }
    let last = series.len() - 1;
    let mut i = 1;
    while i < last {
        if series[i - 1] < series[i] {
            let mut ahead = i + 1;
            while ahead < last && series[ahead] == series[i] {
                ahead += 1;
            }
            if series[ahead] < series[i] {
                maxima.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    maxima
}
/// Keeps the highest peak in every `distance`-sample neighbourhood.
///
/// `peaks` must be sorted; the result is sorted as well.
pub(crate) fn filter_by_distance(series: &[f64], peaks: &[usize], distance: usize) -> Vec<usize> {
    let mut keep = vec![true; peaks.len()];
    let mut order: Vec<usize> = (0..peaks.len()).collect();
    // stable sort, so equal heights are visited right to left
    order.sort_by(|&a, &b| {
        series[peaks[a]]
            .partial_cmp(&series[peaks[b]])
            .unwrap_or(Ordering::Equal)
    });
    for &j in order.iter().rev() {
        if !keep[j] {
            continue;
        }
        for k in (0..j).rev() {
            if peaks[j] - peaks[k] >= distance {
                break;
            }
            keep[k] = false;
        }
        for k in j + 1..peaks.len() {
            if peaks[k] - peaks[j] >= distance {
                break;
            }
            keep[k] = false;
        }
    }
    peaks
        .iter()
        .zip(keep)
        .filter(|&(_, kept)| kept)
        .map(|(&p, _)| p)
        .collect()
}
/// Prominence of each peak: how far it stands above the higher of the two
/// lowest points reached before the signal climbs above it again (or the
/// series ends) on either side.
pub fn compute_prominences(series: &[f64], peaks: &[usize]) -> Vec<f64> {
    peaks
        .iter()
        .map(|&peak| {
            let height = series[peak];
            let left_base = series[..=peak]
                .iter()
                .rev()
                .take_while(|&&v| v <= height)
                .fold(height, |lo, &v| lo.min(v));
            let right_base = series[peak..]
                .iter()
                .take_while(|&&v| v <= height)
                .fold(height, |lo, &v| lo.min(v));
            height - left_base.max(right_base)
        })
        .collect()
}
#[cfg(test)]
mod tests {
    use super::*;
    fn gaussian_bumps(n: usize, centers: &[(usize, f64)], width: f64) -> Vec<f64> {
        (0..n)
            .map(|i| {
                centers
                    .iter()
                    .map(|&(c, amp)| {
                        let d = i as f64 - c as f64;
                        amp * (-0.5 * d * d / (width * width)).exp()
                    })
                    .sum()
            })
            .collect()
    }
    fn loose() -> PeakCriteria {
        PeakCriteria {
            min_height: f64::NEG_INFINITY,
            min_distance: 1,
            min_prominence: 0.0,
        }
    }
    #[test]
    fn three_bumps_give_three_centres() {
        let series = gaussian_bumps(300, &[(50, 1.0), (150, 1.4), (250, 1.2)], 8.0);
        let criteria = PeakCriteria {
            min_height: 0.5,
            min_distance: 3,
            min_prominence: 0.2,
        };
        assert_eq!(find_peaks(&series, &criteria), vec![50, 150, 250]);
    }
    #[test]
    fn indices_in_range_and_increasing() {
        let series: Vec<f64> = (0..200)
            .map(|i| ((i as f64) * 0.37).sin() + ((i as f64) * 0.05).cos())
            .collect();
        let peaks = find_peaks(&series, &loose());
        assert!(!peaks.is_empty());
        assert!(peaks.iter().all(|&i| i < series.len()));
        assert!(peaks.windows(2).all(|w| w[0] < w[1]));
    }
    #[test]
    fn height_above_maximum_finds_nothing() {
        let series = gaussian_bumps(100, &[(30, 1.0), (70, 2.0)], 5.0);
        let criteria = PeakCriteria {
            min_height: 2.5,
            ..loose()
        };
        assert!(find_peaks(&series, &criteria).is_empty());
    }
    #[test]
    fn flat_top_reports_middle_and_edges_never_count() {
        assert_eq!(local_maxima(&[0.0, 1.0, 1.0, 1.0, 0.0]), vec![2]);
        assert_eq!(local_maxima(&[0.0, 1.0, 1.0, 0.0]), vec![1]);
        assert!(local_maxima(&[3.0, 1.0, 2.0]).is_empty());
        assert!(local_maxima(&[0.0, 1.0, 1.0]).is_empty());
        assert!(local_maxima(&[]).is_empty());
    }
    #[test]
    fn distance_keeps_the_taller_neighbour() {
        let series = [0.0, 1.0, 0.0, 3.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.5, 0.0];
        let criteria = PeakCriteria {
            min_distance: 3,
            ..loose()
        };
        assert_eq!(find_peaks(&series, &criteria), vec![3, 9]);
        assert_eq!(filter_by_distance(&series, &[1, 3, 5, 9], 1), vec![1, 3, 5, 9]);
    }
    #[test]
    fn prominence_rejects_shoulder() {
        // small ripple on the flank of a big bump
        let series = [0.0, 1.0, 2.0, 2.2, 2.1, 3.0, 5.0, 3.0, 1.0, 0.0];
        assert_eq!(local_maxima(&series), vec![3, 6]);
        let prominences = compute_prominences(&series, &[3, 6]);
        assert!((prominences[0] - 0.1).abs() < 1e-12);
        assert!((prominences[1] - 5.0).abs() < 1e-12);
        let criteria = PeakCriteria {
            min_prominence: 0.5,
            ..loose()
        };
        assert_eq!(find_peaks(&series, &criteria), vec![6]);
    }
    #[test]
    fn detected_peaks_carry_voltage_and_prominence() {
        let series = [0.0, 1.0, 2.0, 2.2, 2.1, 3.0, 5.0, 3.0, 1.0, 0.0];
        let voltage: Vec<f64> = (0..series.len()).map(|i| 4.0 + i as f64 * 0.5).collect();
        let peaks = detect_peaks(&voltage, &series, &loose());
        assert_eq!(peaks.len(), 2);
        assert_eq!(peaks[0].index, 3);
        assert!((peaks[0].prominence - 0.1).abs() < 1e-12);
        assert_eq!(
            peaks[1],
            Peak {
                index: 6,
                voltage: 7.0,
                current: 5.0,
                prominence: 5.0,
            }
        );
        let indices: Vec<usize> = peaks.iter().map(|p| p.index).collect();
        assert_eq!(indices, find_peaks(&series, &loose()));
    }
}
