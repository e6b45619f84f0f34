use super::normalization::Normalization;
use super::outlier::outlier_sum;
use crate::core::stats::{descriptive, normal};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{instrument, trace};

/// Summary of the outlier-sum null distribution. Individual draws are not retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub iterations: usize,
}

/// Builds the null distribution of the outlier sum by random relabeling.
///
/// Each trial pools `case` and `control`, draws `case.len()` values uniformly without
/// replacement (the head of a random permutation), robust-normalizes them against the original
/// `control` values and records their outlier sum against the fixed `threshold`.
///
/// Returns `None` when `control` is empty or `iterations` is zero.
#[instrument(level = "trace", skip_all, fields(iterations = iterations, n_case = case.len()))]
pub fn null_distribution(
    case: &[f64],
    control: &[f64],
    threshold: f64,
    iterations: usize,
    rng: &mut impl Rng,
) -> Option<NullSummary> {
    if iterations == 0 {
        return None;
    }
    let normalization = Normalization::robust(control)?;

    let mut pooled: Vec<f64> = case.iter().chain(control).copied().collect();
    let n_case = case.len();

    let draws: Vec<f64> = (0..iterations)
        .map(|_| {
            let (relabeled, _) = pooled.partial_shuffle(&mut *rng, n_case);
            let normalized = normalization.apply_all(relabeled);
            outlier_sum(&normalized, threshold)
        })
        .collect();

    let summary = NullSummary {
        mean: descriptive::mean(&draws)?,
        std_dev: descriptive::std_dev(&draws)?,
        iterations,
    };
    trace!(mean = summary.mean, std_dev = summary.std_dev, "Null distribution summarized.");
    Some(summary)
}

/// Why a z-score has the value it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZScoreKind {
    /// The observed statistic deviates from the null mean.
    Signal,
    /// The observed statistic equals the null mean exactly.
    NoSignal,
    /// The null distribution had no spread (or was never built), so no z-score exists.
    Undefined,
}

/// A z-score together with its classification.
///
/// `value` is `0.0` for both [`ZScoreKind::NoSignal`] and [`ZScoreKind::Undefined`]; the kind
/// keeps the two apart for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScore {
    pub value: f64,
    pub kind: ZScoreKind,
}

impl ZScore {
    pub const UNDEFINED: Self = Self {
        value: 0.0,
        kind: ZScoreKind::Undefined,
    };

    pub fn from_null(observed: f64, null: &NullSummary) -> Self {
        if null.std_dev == 0.0 || !null.std_dev.is_finite() {
            return Self::UNDEFINED;
        }
        let z = (observed - null.mean) / null.std_dev;
        if z.is_nan() {
            Self::UNDEFINED
        } else if z == 0.0 {
            Self {
                value: 0.0,
                kind: ZScoreKind::NoSignal,
            }
        } else {
            Self {
                value: z,
                kind: ZScoreKind::Signal,
            }
        }
    }
}

/// Standardizes `observed` against a freshly drawn null distribution.
pub fn z_score(
    observed: f64,
    case: &[f64],
    control: &[f64],
    threshold: f64,
    iterations: usize,
    rng: &mut impl Rng,
) -> ZScore {
    null_distribution(case, control, threshold, iterations, rng)
        .map_or(ZScore::UNDEFINED, |null| ZScore::from_null(observed, &null))
}

/// Two-sided p-value `2 * (1 - Φ(|z|))`.
#[inline]
pub fn p_value(z: f64) -> f64 {
    normal::two_sided_p_value(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tasks::outlier::outlier_threshold;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn normal_sample(rng: &mut StdRng, n: usize, shift: f64) -> Vec<f64> {
        (0..n)
            .map(|_| {
                let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
                let u2: f64 = rng.r#gen();
                shift + (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
            })
            .collect()
    }

    fn observed_z(case: &[f64], control: &[f64], iterations: usize, rng: &mut StdRng) -> ZScore {
        let threshold = outlier_threshold(control).unwrap();
        let normalized = Normalization::robust(control).unwrap().apply_all(case);
        let observed = outlier_sum(&normalized, threshold);
        z_score(observed, case, control, threshold, iterations, rng)
    }

    #[test]
    fn same_seed_reproduces_null_distribution() {
        let case = [0.5, 3.0, 7.5, 1.0];
        let control = [0.0, 1.0, 2.0, 0.5, 1.5];
        let a = null_distribution(&case, &control, 1.0, 200, &mut StdRng::seed_from_u64(11));
        let b = null_distribution(&case, &control, 1.0, 200, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
        assert_eq!(a.unwrap().iterations, 200);
    }

    #[test]
    fn null_distribution_requires_control_and_iterations() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(null_distribution(&[1.0], &[], 0.0, 10, &mut rng), None);
        assert_eq!(null_distribution(&[1.0], &[1.0], 0.0, 0, &mut rng), None);
    }

    #[test]
    fn identical_distributions_average_to_zero_z() {
        let seeds = 200;
        let scores: Vec<f64> = (0..seeds)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let control = normal_sample(&mut rng, 100, 0.0);
                let case = normal_sample(&mut rng, 100, 0.0);
                observed_z(&case, &control, 200, &mut rng).value
            })
            .collect();
        let average = descriptive::mean(&scores).unwrap();
        let standard_error = descriptive::std_dev(&scores).unwrap() / (seeds as f64).sqrt();
        assert!(
            average.abs() < 0.35,
            "average z was {average}, standard error {standard_error}"
        );
    }

    #[test]
    fn shifted_case_is_a_strong_signal() {
        let mut rng = StdRng::seed_from_u64(42);
        let control = normal_sample(&mut rng, 100, 0.0);
        let case = normal_sample(&mut rng, 100, 5.0);
        let z = observed_z(&case, &control, 300, &mut rng);
        assert_eq!(z.kind, ZScoreKind::Signal);
        assert!(z.value > 3.0, "z was {}", z.value);
        assert!(p_value(z.value) < 0.01);
    }

    #[test]
    fn constant_pool_has_undefined_z() {
        let mut rng = StdRng::seed_from_u64(3);
        let z = z_score(0.0, &[1.0, 1.0], &[1.0, 1.0, 1.0], 1.0, 50, &mut rng);
        assert_eq!(z, ZScore::UNDEFINED);
        assert_eq!(p_value(z.value), 1.0);
    }

    #[test]
    fn z_equal_to_null_mean_is_no_signal() {
        let null = NullSummary {
            mean: 2.0,
            std_dev: 0.5,
            iterations: 10,
        };
        assert_eq!(ZScore::from_null(2.0, &null).kind, ZScoreKind::NoSignal);
        let z = ZScore::from_null(3.0, &null);
        assert_eq!(z.kind, ZScoreKind::Signal);
        assert!((z.value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn nan_observation_is_undefined() {
        let null = NullSummary {
            mean: 0.0,
            std_dev: 1.0,
            iterations: 10,
        };
        assert_eq!(ZScore::from_null(f64::NAN, &null), ZScore::UNDEFINED);
    }

    #[test]
    fn p_value_bounds() {
        assert_eq!(p_value(0.0), 1.0);
        assert!(p_value(40.0) < 1e-12);
        assert!(p_value(-40.0) < 1e-12);
        assert!((p_value(1.959963984540054) - 0.05).abs() < 1e-9);
    }
}
