use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function Φ(x).
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// Two-sided tail probability `2·(1 − Φ(|z|))`.
///
/// Evaluated as `erfc(|z| / √2)` so that large `|z|` decays smoothly toward zero instead of
/// cancelling to exactly zero in `1 − Φ`. A NaN input is treated as no signal.
pub fn two_sided_p_value(z: f64) -> f64 {
    if z.is_nan() {
        return 1.0;
    }
    libm::erfc(z.abs() / SQRT_2).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn cdf_at_zero_is_one_half() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < TOL);
    }

    #[test]
    fn cdf_known_values() {
        assert!((standard_normal_cdf(1.959963984540054) - 0.975).abs() < TOL);
        assert!((standard_normal_cdf(-1.0) - 0.15865525393145707).abs() < TOL);
    }

    #[test]
    fn p_value_at_zero_is_one() {
        assert_eq!(two_sided_p_value(0.0), 1.0);
    }

    #[test]
    fn p_value_is_symmetric_in_z() {
        assert_eq!(two_sided_p_value(2.5), two_sided_p_value(-2.5));
    }

    #[test]
    fn p_value_at_1_96_is_five_percent() {
        assert!((two_sided_p_value(1.959963984540054) - 0.05).abs() < TOL);
    }

    #[test]
    fn p_value_vanishes_for_large_z() {
        assert!(two_sided_p_value(40.0) < 1e-300);
        assert_eq!(two_sided_p_value(f64::INFINITY), 0.0);
    }

    #[test]
    fn p_value_of_nan_is_one() {
        assert_eq!(two_sided_p_value(f64::NAN), 1.0);
    }
}
