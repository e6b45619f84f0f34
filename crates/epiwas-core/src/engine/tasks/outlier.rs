use crate::core::stats::descriptive::percentile;

/// Tukey fence multiplier applied to the interquartile range.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Upper outlier fence `Q75 + 1.5 * (Q75 - Q25)` of `reference`.
///
/// Returns `None` for an empty reference set.
pub fn outlier_threshold(reference: &[f64]) -> Option<f64> {
    let q75 = percentile(reference, 0.75)?;
    let q25 = percentile(reference, 0.25)?;
    Some(q75 + IQR_MULTIPLIER * (q75 - q25))
}

/// Total amount by which `values` exceed `threshold`.
///
/// Values at or below the threshold contribute nothing.
#[inline]
pub fn outlier_sum(values: &[f64], threshold: f64) -> f64 {
    values
        .iter()
        .filter(|&&v| v > threshold)
        .map(|&v| v - threshold)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_uses_interpolated_quartiles() {
        let threshold = outlier_threshold(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert!((threshold - 7.0).abs() < 1e-12);
    }

    #[test]
    fn threshold_of_constant_reference_is_the_constant() {
        assert_eq!(outlier_threshold(&[2.0; 6]), Some(2.0));
    }

    #[test]
    fn threshold_of_empty_reference_is_undefined() {
        assert_eq!(outlier_threshold(&[]), None);
    }

    #[test]
    fn threshold_grows_with_upper_quartile() {
        let low = outlier_threshold(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let high = outlier_threshold(&[1.0, 2.0, 3.0, 6.0, 7.0]).unwrap();
        assert!(high > low);
    }

    #[test]
    fn sum_counts_only_excess_above_threshold() {
        assert_eq!(outlier_sum(&[0.0, 2.0, 10.0], 5.0), 5.0);
        assert_eq!(outlier_sum(&[5.0, 5.0], 5.0), 0.0);
        assert_eq!(outlier_sum(&[6.0, 7.5, -3.0], 5.0), 3.5);
        assert_eq!(outlier_sum(&[], 5.0), 0.0);
    }
}
