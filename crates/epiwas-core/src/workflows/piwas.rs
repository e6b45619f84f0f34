use crate::core::models::enrichment::KmerEnrichment;
use crate::core::models::profile::{PiwasProfile, PiwasRow};
use crate::core::models::sample::SampleTables;
use crate::core::models::sequence::ProteinSequence;
use crate::engine::config::PiwasConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::normalization::normalize_enrichment;
use crate::engine::tasks::windowed_scoring::{combine_kmer_lengths, score_windows};
use tracing::{info, instrument, warn};

/// Phase that scores the case and control samples, one task step per sample.
pub const SCORING_PHASE: &str = "Window Scoring";

#[derive(Debug, Clone, PartialEq)]
pub struct PiwasResult {
    pub case: PiwasProfile,
    pub control: PiwasProfile,
}

/// Scores `protein` for one case and one control sample.
///
/// The case tables are normalized against the matching control tables before scoring; the
/// control sample is scored on its raw tables.
#[instrument(
    skip_all,
    name = "piwas_workflow",
    fields(case = %case.sample_id, control = %control.sample_id, protein_length = protein.len())
)]
pub fn run(
    case: &SampleTables,
    control: &SampleTables,
    protein: &ProteinSequence,
    config: &PiwasConfig,
    reporter: &ProgressReporter,
) -> Result<PiwasResult, EngineError> {
    reporter.phase("Validation", || -> Result<(), EngineError> {
        config.validate()?;
        check_kmer_lengths(case, "case", config)?;
        check_kmer_lengths(control, "control", config)
    })?;

    let (short, long) = reporter.phase("Normalization", || {
        let (short, _) = normalize_enrichment(&case.short, &control.short)?;
        let (long, _) = normalize_enrichment(&case.long, &control.long)?;
        Ok::<_, EngineError>((short, long))
    })?;

    if protein.len() < config.long_kmer_length {
        warn!(
            protein_length = protein.len(),
            long_kmer_length = config.long_kmer_length,
            "Protein is shorter than the long k-mer length; profiles will be empty."
        );
    }

    let result = reporter.phase(SCORING_PHASE, || {
        reporter.report(Progress::TaskStart { total_steps: 2 });
        let case_profile = build_profile(protein, &case.sample_id, &short, &long, config);
        reporter.report(Progress::TaskIncrement);
        let control_profile =
            build_profile(protein, &control.sample_id, &control.short, &control.long, config);
        reporter.report(Progress::TaskIncrement);
        reporter.report(Progress::TaskFinish);
        Ok::<_, EngineError>(PiwasResult {
            case: case_profile,
            control: control_profile,
        })
    })?;

    info!(positions = result.case.len(), "PIWAS scoring complete.");
    Ok(result)
}

fn check_kmer_lengths(
    sample: &SampleTables,
    role: &'static str,
    config: &PiwasConfig,
) -> Result<(), EngineError> {
    let expect = |table: &KmerEnrichment, which: &'static str, expected: usize| {
        if table.kmer_length() == expected {
            Ok(())
        } else {
            Err(EngineError::KmerLengthMismatch {
                sample: role,
                role: which,
                expected,
                found: table.kmer_length(),
            })
        }
    };
    expect(&sample.short, "short", config.short_kmer_length)?;
    expect(&sample.long, "long", config.long_kmer_length)
}

fn build_profile(
    protein: &ProteinSequence,
    sample_id: &str,
    short: &KmerEnrichment,
    long: &KmerEnrichment,
    config: &PiwasConfig,
) -> PiwasProfile {
    let short_scores = score_windows(protein, short, config.short_kmer_length, config.window_radius);
    let long_scores = score_windows(protein, long, config.long_kmer_length, config.window_radius);
    let combined = combine_kmer_lengths(&short_scores.scores, &long_scores.scores);

    let rows = combined
        .into_iter()
        .zip(short_scores.kmers.into_iter().zip(long_scores.kmers))
        .enumerate()
        .map(|(i, (iwas_value, (short_kmer, long_kmer)))| PiwasRow {
            position: i + 1,
            iwas_value,
            short_kmer,
            long_kmer,
        })
        .collect();

    PiwasProfile {
        protein_name: protein.name().unwrap_or_default().to_string(),
        sample_id: sample_id.to_string(),
        short_kmer_length: config.short_kmer_length,
        long_kmer_length: config.long_kmer_length,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const TOL: f64 = 1e-9;

    fn table(entries: &[(&str, f64)]) -> KmerEnrichment {
        KmerEnrichment::from_entries(entries.iter().map(|&(k, v)| (k, v))).unwrap()
    }

    fn samples() -> (SampleTables, SampleTables) {
        let case = SampleTables::new(
            "AD100",
            table(&[("AAAAA", 4.0), ("CCCCC", 10.0)]),
            table(&[("AAAAAB", 2.0)]),
        );
        let control = SampleTables::new(
            "AD200",
            table(&[("AAAAA", 1.0), ("DDDDD", 3.0)]),
            table(&[("AAAAAB", 1.0), ("BBBBBB", 3.0)]),
        );
        (case, control)
    }

    fn config(window_radius: usize) -> PiwasConfig {
        PiwasConfig {
            window_radius,
            ..PiwasConfig::default()
        }
    }

    #[test]
    fn scores_case_normalized_and_control_raw() {
        let (case, control) = samples();
        let protein = ProteinSequence::new(Some("sp|P1|TEST".into()), "AAAAABBBBBB").unwrap();

        let result = run(&case, &control, &protein, &config(0), &ProgressReporter::new()).unwrap();

        assert_eq!(result.case.len(), 6);
        assert_eq!(result.control.len(), 6);
        assert_eq!(result.case.protein_name, "sp|P1|TEST");
        assert_eq!(result.case.sample_id, "AD100");
        assert_eq!(result.control.sample_id, "AD200");

        // AAAAA normalizes to (4 - 2) / 1; AAAAAB to (2 - 2) / 1
        let case_scores: Vec<f64> = result.case.scores().collect();
        assert!((case_scores[0] - 2.0).abs() < TOL);
        assert!(case_scores[1..].iter().all(|&v| v == 0.0));

        let control_scores: Vec<f64> = result.control.scores().collect();
        assert_eq!(control_scores, vec![1.0, 0.0, 0.0, 0.0, 0.0, 3.0]);

        let first = &result.case.rows[0];
        assert_eq!(first.position, 1);
        assert_eq!(first.short_kmer, "AAAAA");
        assert_eq!(first.long_kmer, "AAAAAB");
        let last = &result.control.rows[5];
        assert_eq!(last.position, 6);
        assert_eq!(last.short_kmer, "BBBBB");
        assert_eq!(last.long_kmer, "BBBBBB");
    }

    #[test]
    fn window_spreads_hits_to_neighbors() {
        let (case, control) = samples();
        let protein = ProteinSequence::new(None, "AAAAABBBBBB").unwrap();
        let result = run(&case, &control, &protein, &config(5), &ProgressReporter::new()).unwrap();

        let control_scores: Vec<f64> = result.control.scores().collect();
        assert_eq!(control_scores, vec![3.0; 6]);
        assert_eq!(result.case.protein_name, "");
    }

    #[test]
    fn short_protein_yields_empty_profiles() {
        let (case, control) = samples();
        let protein = ProteinSequence::new(None, "AAAAA").unwrap();
        let result = run(&case, &control, &protein, &config(5), &ProgressReporter::new()).unwrap();
        assert!(result.case.is_empty());
        assert!(result.control.is_empty());
    }

    #[test]
    fn mismatched_kmer_length_is_rejected() {
        let (mut case, control) = samples();
        case.short = table(&[("AAAA", 1.0)]);
        let protein = ProteinSequence::new(None, "AAAAABBBBBB").unwrap();

        let err = run(&case, &control, &protein, &config(5), &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::KmerLengthMismatch {
                sample: "case",
                role: "short",
                expected: 5,
                found: 4
            }
        ));
    }

    #[test]
    fn reports_phases_in_order() {
        let (case, control) = samples();
        let protein = ProteinSequence::new(None, "AAAAABBBBBB").unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            if let Progress::PhaseStart { name } = event {
                sink.lock().unwrap().push(name);
            }
        }));

        run(&case, &control, &protein, &config(5), &reporter).unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec!["Validation", "Normalization", "Window Scoring"]
        );
    }
}
