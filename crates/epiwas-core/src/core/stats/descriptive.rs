/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population standard deviation (no degrees-of-freedom correction).
pub fn std_dev(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    Some((ss / data.len() as f64).sqrt())
}

/// Median (50th percentile); the mean of the two middle values for even lengths.
pub fn median(data: &[f64]) -> Option<f64> {
    percentile(data, 0.5)
}

/// Quantile `q ∈ [0, 1]` using linear interpolation between closest ranks.
///
/// For sorted data `x` of length `n`, the quantile sits at rank `q·(n − 1)`; fractional ranks
/// interpolate between their neighbors.
pub fn percentile(data: &[f64], q: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Some(percentile_sorted(&sorted, q))
}

/// Median absolute deviation around the median.
pub fn median_absolute_deviation(data: &[f64]) -> Option<f64> {
    let med = median(data)?;
    let deviations: Vec<f64> = data.iter().map(|&x| (x - med).abs()).collect();
    median(&deviations)
}

fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = lo + 1;
    let frac = rank - lo as f64;
    if hi >= n {
        sorted[n - 1]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}
