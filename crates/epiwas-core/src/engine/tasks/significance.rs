use super::normalization::Normalization;
use super::outlier::{outlier_sum, outlier_threshold};
use super::permutation::{ZScore, p_value, z_score};
use crate::core::models::results::PositionResult;
use rand::Rng;

/// Runs the PIE test for a single amino-acid position.
///
/// A position with no case or no control values is reported as
/// [`PositionResult::no_evidence`]. Otherwise the case values are robust-normalized against the
/// control values, their outlier sum is taken against the IQR fence of the raw control values
/// and compared with `iterations` relabeled draws.
pub fn evaluate_position(
    position: i64,
    case: &[f64],
    control: &[f64],
    iterations: usize,
    rng: &mut impl Rng,
) -> PositionResult {
    let (Some(&representative_value), Some(threshold), Some(normalization)) = (
        case.first(),
        outlier_threshold(control),
        Normalization::robust(control),
    ) else {
        return PositionResult::no_evidence(position);
    };

    let observed = outlier_sum(&normalization.apply_all(case), threshold);
    let z: ZScore = z_score(observed, case, control, threshold, iterations, rng);

    PositionResult {
        position,
        representative_value,
        z_score: z.value,
        p_value: p_value(z.value),
    }
}
