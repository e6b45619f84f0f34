use super::pie::{self, PieResult};
use super::piwas::{self, PiwasResult};
use crate::core::models::sample::SampleTables;
use crate::core::models::sequence::ProteinSequence;
use crate::engine::config::{PieConfig, PiwasConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    pub piwas: PiwasResult,
    pub pie: PieResult,
}

/// PIWAS scoring followed by PIE testing of the resulting case profile against the control
/// profile.
#[instrument(skip_all, name = "pipeline_workflow")]
pub fn run(
    case: &SampleTables,
    control: &SampleTables,
    protein: &ProteinSequence,
    piwas_config: &PiwasConfig,
    pie_config: &PieConfig,
    reporter: &ProgressReporter,
) -> Result<PipelineResult, EngineError> {
    pie_config.validate()?;

    let piwas = piwas::run(case, control, protein, piwas_config, reporter)?;
    reporter.report(Progress::Message(format!(
        "Scored {} positions; testing significance.",
        piwas.case.len()
    )));

    let pie = pie::run(
        &piwas.case.to_position_table(),
        &piwas.control.to_position_table(),
        pie_config,
        reporter,
    )?;

    info!(
        positions = pie.results.len(),
        top = pie.top.len(),
        "Pipeline complete."
    );
    Ok(PipelineResult { piwas, pie })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::enrichment::KmerEnrichment;

    fn table(entries: &[(&str, f64)]) -> KmerEnrichment {
        KmerEnrichment::from_entries(entries.iter().map(|&(k, v)| (k, v))).unwrap()
    }

    fn inputs() -> (SampleTables, SampleTables, ProteinSequence) {
        let case = SampleTables::new(
            "AD1",
            table(&[("MKTAY", 3.0), ("IAKQR", 1.0)]),
            table(&[("MKTAYI", 2.0)]),
        );
        let control = SampleTables::new(
            "AD2",
            table(&[("MKTAY", 1.0), ("KTAYI", 0.5), ("QRQIS", 2.0)]),
            table(&[("MKTAYI", 1.0), ("AKQRQI", 0.0)]),
        );
        let protein = ProteinSequence::new(Some("demo".into()), "MKTAYIAKQRQISFVKSHFSRQ").unwrap();
        (case, control, protein)
    }

    #[test]
    fn pie_covers_every_piwas_position() {
        let (case, control, protein) = inputs();
        let pie_config = PieConfig {
            iterations: 50,
            seed: Some(3),
            ..PieConfig::default()
        };

        let result = run(
            &case,
            &control,
            &protein,
            &PiwasConfig::default(),
            &pie_config,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(result.piwas.case.len(), 17);
        assert_eq!(result.pie.results.len(), result.piwas.case.len());
        let positions: Vec<i64> = result.pie.results.iter().map(|r| r.position).collect();
        assert_eq!(positions, (1..=17).collect::<Vec<_>>());
        for (row, outcome) in result.piwas.case.rows.iter().zip(&result.pie.results) {
            assert_eq!(outcome.representative_value, row.iwas_value);
        }
    }

    #[test]
    fn invalid_pie_config_fails_before_scoring() {
        let (case, control, protein) = inputs();
        let pie_config = PieConfig {
            top_fraction: 0.0,
            ..PieConfig::default()
        };
        let err = run(
            &case,
            &control,
            &protein,
            &PiwasConfig::default(),
            &pie_config,
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
