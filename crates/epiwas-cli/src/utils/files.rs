use crate::error::{CliError, Result};
use epiwas::core::io::fasta::FastaFile;
use epiwas::core::io::sample::{discover_sample_files, load_sample};
use epiwas::core::io::tables::{PieResultsFile, PiwasProfileFile, PositionTableFile};
use epiwas::core::io::traits::{ReadTable, WriteTable};
use epiwas::core::models::positions::PositionTable;
use epiwas::core::models::profile::PiwasProfile;
use epiwas::core::models::results::PositionResult;
use epiwas::core::models::sample::SampleTables;
use epiwas::core::models::sequence::ProteinSequence;
use epiwas::engine::config::PiwasConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const TOTAL_RESULTS_FILE: &str = "total_results_output.csv";
pub const TOP_RESULTS_FILE: &str = "top_5_percent_output.csv";

/// Which side of the comparison a PIWAS profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRole {
    Case,
    Control,
}

impl SampleRole {
    fn suffix(self) -> &'static str {
        match self {
            SampleRole::Case => "case",
            SampleRole::Control => "control",
        }
    }
}

pub fn load_sample_dir(dir: &Path, config: &PiwasConfig) -> Result<SampleTables> {
    let sample = discover_sample_files(dir, config.short_kmer_length, config.long_kmer_length)
        .and_then(|files| load_sample(&files))
        .map_err(|source| CliError::Sample {
            dir: dir.to_path_buf(),
            source,
        })?;
    info!(
        sample = %sample.sample_id,
        short_kmers = sample.short.len(),
        long_kmers = sample.long.len(),
        "Loaded sample from {:?}",
        dir
    );
    Ok(sample)
}

pub fn load_protein(path: &Path) -> Result<ProteinSequence> {
    let protein = FastaFile::read_from_path(path).map_err(|source| CliError::Protein {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(length = protein.len(), name = ?protein.name(), "Loaded protein sequence.");
    Ok(protein)
}

pub fn load_position_table(path: &Path) -> Result<PositionTable> {
    let table =
        PositionTableFile::read_from_path(path).map_err(|source| CliError::PositionTable {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(rows = table.len(), "Loaded position table from {:?}", path);
    Ok(table)
}

pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// `{sample_id}_piwas_scores_{case|control}.csv`, without the prefix when the ID is empty.
pub fn profile_file_name(sample_id: &str, role: SampleRole) -> String {
    if sample_id.is_empty() {
        format!("piwas_scores_{}.csv", role.suffix())
    } else {
        format!("{}_piwas_scores_{}.csv", sample_id, role.suffix())
    }
}

pub fn write_profile(dir: &Path, profile: &PiwasProfile, role: SampleRole) -> Result<PathBuf> {
    let path = dir.join(profile_file_name(&profile.sample_id, role));
    PiwasProfileFile::write_to_path(profile, &path).map_err(|source| CliError::Output {
        path: path.clone(),
        source,
    })?;
    info!(rows = profile.len(), "Wrote PIWAS profile to {:?}", path);
    Ok(path)
}

pub fn write_results(dir: &Path, file_name: &str, results: &[PositionResult]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    PieResultsFile::write_to_path(results, &path).map_err(|source| CliError::Output {
        path: path.clone(),
        source,
    })?;
    info!(rows = results.len(), "Wrote PIE results to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use epiwas::core::io::fasta::FastaError;
    use epiwas::core::io::sample::SampleLoadError;
    use tempfile::tempdir;

    #[test]
    fn profile_names_follow_sample_and_role() {
        assert_eq!(
            profile_file_name("AD12", SampleRole::Case),
            "AD12_piwas_scores_case.csv"
        );
        assert_eq!(
            profile_file_name("", SampleRole::Control),
            "piwas_scores_control.csv"
        );
    }

    #[test]
    fn sample_dir_without_tables_is_a_sample_error() {
        let dir = tempdir().unwrap();
        let err = load_sample_dir(dir.path(), &PiwasConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Sample { dir: ref d, source: SampleLoadError::MissingKmerFile { .. } } if d == dir.path()
        ));
    }

    #[test]
    fn protein_without_residues_is_a_protein_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("protein.fasta");
        fs::write(&path, ">header only\n").unwrap();
        let err = load_protein(&path).unwrap_err();
        assert!(matches!(
            err,
            CliError::Protein { source: FastaError::NoResidues, .. }
        ));
    }

    #[test]
    fn written_results_can_be_read_as_positions() {
        let dir = tempdir().unwrap();
        let results = vec![PositionResult::no_evidence(4), PositionResult::no_evidence(2)];
        let path = write_results(dir.path(), TOTAL_RESULTS_FILE, &results).unwrap();

        let table = load_position_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.values_at(4), vec![0.0]);
    }

    #[test]
    fn ensure_output_dir_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
