use super::error::TableError;
use super::kmer_csv::KmerCsvFile;
use super::traits::ReadTable;
use crate::core::models::sample::{SampleTables, sample_id_from_file_name};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SampleLoadError {
    #[error("I/O error while scanning '{path}': {source}", path = path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("No file containing '{pattern}' found in '{dir}'", dir = dir.display())]
    MissingKmerFile { dir: PathBuf, pattern: String },
    #[error("Failed to read k-mer table '{path}': {source}", path = path.display())]
    Table { path: PathBuf, source: TableError },
}

/// The pair of k-mer table files that make up one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFiles {
    pub short: PathBuf,
    pub long: PathBuf,
}

/// Locates the short and long k-mer tables inside a sample folder.
///
/// The short table is the first file (by name) whose name contains `kmer_<short_length>`, the
/// long table the first one containing `kmer_<long_length>`.
pub fn discover_sample_files(
    dir: &Path,
    short_length: usize,
    long_length: usize,
) -> Result<SampleFiles, SampleLoadError> {
    let io_err = |source| SampleLoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if entry.file_type().map_err(io_err)?.is_file() {
            names.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }
    names.sort();

    let find = |length: usize| {
        let pattern = format!("kmer_{}", length);
        names
            .iter()
            .find(|(name, _)| name.contains(&pattern))
            .map(|(_, path)| path.clone())
            .ok_or_else(|| SampleLoadError::MissingKmerFile {
                dir: dir.to_path_buf(),
                pattern,
            })
    };

    let files = SampleFiles {
        short: find(short_length)?,
        long: find(long_length)?,
    };
    debug!(short = ?files.short, long = ?files.long, "Discovered sample k-mer tables.");
    Ok(files)
}

/// Reads both k-mer tables of a sample.
///
/// The sample ID is taken from the short table's file name (see
/// [`sample_id_from_file_name`]); it is empty when the name carries none.
pub fn load_sample(files: &SampleFiles) -> Result<SampleTables, SampleLoadError> {
    let read = |path: &Path| {
        KmerCsvFile::read_from_path(path).map_err(|source| SampleLoadError::Table {
            path: path.to_path_buf(),
            source,
        })
    };
    let short = read(files.short.as_path())?;
    let long = read(files.long.as_path())?;

    let sample_id = files
        .short
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(sample_id_from_file_name)
        .unwrap_or_default();

    Ok(SampleTables::new(sample_id, short, long))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discovers_and_loads_sample_folder() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("AD123_kmer_5.csv"), "AAAAA,1.0\n").unwrap();
        fs::write(dir.path().join("AD123_kmer_6.csv"), "AAAAAA,2.0\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = discover_sample_files(dir.path(), 5, 6).unwrap();
        assert!(files.short.ends_with("AD123_kmer_5.csv"));
        assert!(files.long.ends_with("AD123_kmer_6.csv"));

        let sample = load_sample(&files).unwrap();
        assert_eq!(sample.sample_id, "AD123");
        assert_eq!(sample.short.get("AAAAA"), Some(1.0));
        assert_eq!(sample.long.get("AAAAAA"), Some(2.0));
    }

    #[test]
    fn missing_long_table_is_reported() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("AD1_kmer_5.csv"), "AAAAA,1.0\n").unwrap();
        let result = discover_sample_files(dir.path(), 5, 6);
        assert!(matches!(
            result,
            Err(SampleLoadError::MissingKmerFile { ref pattern, .. }) if pattern == "kmer_6"
        ));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = discover_sample_files(&dir.path().join("nope"), 5, 6);
        assert!(matches!(result, Err(SampleLoadError::Io { .. })));
    }

    #[test]
    fn malformed_table_names_the_offending_file() {
        let dir = tempdir().unwrap();
        let short = dir.path().join("kmer_5.csv");
        let long = dir.path().join("kmer_6.csv");
        fs::write(&short, "AAAAA,abc\n").unwrap();
        fs::write(&long, "AAAAAA,1\n").unwrap();

        let result = load_sample(&SampleFiles {
            short: short.clone(),
            long,
        });
        match result {
            Err(SampleLoadError::Table { path, .. }) => assert_eq!(path, short),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn sample_without_id_gets_empty_id() {
        let dir = tempdir().unwrap();
        let short = dir.path().join("kmer_5.csv");
        let long = dir.path().join("kmer_6.csv");
        fs::write(&short, "AAAAA,1\n").unwrap();
        fs::write(&long, "AAAAAA,1\n").unwrap();
        let sample = load_sample(&SampleFiles { short, long }).unwrap();
        assert_eq!(sample.sample_id, "");
    }
}
