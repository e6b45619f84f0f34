use crate::core::models::positions::PositionTable;
use crate::core::models::results::PositionResult;
use crate::core::stats::descriptive::percentile;
use crate::engine::config::PieConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::significance::evaluate_position;
use crate::engine::utils::sampling::position_rng;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Phase during which every case position is permutation tested, one task step per position.
pub const PERMUTATION_PHASE: &str = "Permutation Testing";

#[derive(Debug, Clone, PartialEq)]
pub struct PieResult {
    /// One result per distinct case position, ascending by position.
    pub results: Vec<PositionResult>,
    /// The subset of `results` whose p-value is within the configured top fraction.
    pub top: Vec<PositionResult>,
}

/// Tests every position of `case` against the values `control` holds for the same position.
///
/// Positions are independent and evaluated in parallel when the `parallel` feature is on. Each
/// position draws from its own random stream, derived from `config.seed` when one is set.
#[instrument(skip_all, name = "pie_workflow", fields(iterations = config.iterations))]
pub fn run(
    case: &PositionTable,
    control: &PositionTable,
    config: &PieConfig,
    reporter: &ProgressReporter,
) -> Result<PieResult, EngineError> {
    config.validate()?;

    let control_groups = control.grouped();
    let positions: Vec<(i64, Vec<f64>)> = case.grouped().into_iter().collect();
    info!(
        positions = positions.len(),
        case_rows = case.len(),
        control_rows = control.len(),
        "Starting permutation testing."
    );

    let results = reporter.phase(PERMUTATION_PHASE, || {
        reporter.report(Progress::TaskStart {
            total_steps: positions.len() as u64,
        });

        #[cfg(not(feature = "parallel"))]
        let iterator = positions.iter();

        #[cfg(feature = "parallel")]
        let iterator = positions.par_iter();

        let mut results: Vec<PositionResult> = iterator
            .map(|(position, case_values)| {
                let control_values = control_groups
                    .get(position)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                let mut rng = position_rng(config.seed, *position);
                let result = evaluate_position(
                    *position,
                    case_values,
                    control_values,
                    config.iterations,
                    &mut rng,
                );
                reporter.report(Progress::TaskIncrement);
                result
            })
            .collect();
        results.sort_by_key(|result| result.position);

        reporter.report(Progress::TaskFinish);
        Ok::<_, EngineError>(results)
    })?;

    let top = reporter.phase("Result Assembly", || {
        Ok::<_, EngineError>(select_top(&results, config.top_fraction))
    })?;

    info!(
        positions = results.len(),
        top = top.len(),
        "PIE testing complete."
    );
    Ok(PieResult { results, top })
}

/// Results whose p-value is at or below the `fraction` quantile of all p-values.
///
/// The cutoff is rank based: ties at the cutoff are all kept, so the subset may be larger
/// than `fraction * results.len()`.
pub fn select_top(results: &[PositionResult], fraction: f64) -> Vec<PositionResult> {
    let p_values: Vec<f64> = results.iter().map(|r| r.p_value).collect();
    let Some(cutoff) = percentile(&p_values, fraction) else {
        return Vec::new();
    };
    debug!(cutoff, "Top-fraction p-value cutoff.");
    results
        .iter()
        .filter(|r| r.p_value <= cutoff)
        .copied()
        .collect()
}
