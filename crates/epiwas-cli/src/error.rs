use epiwas::core::io::error::TableError;
use epiwas::core::io::fasta::FastaError;
use epiwas::core::io::sample::SampleLoadError;
use epiwas::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Failures of a CLI run, one variant per kind of input or output the commands touch.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file '{path}': {source}", path = path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not load sample folder '{dir}': {source}", dir = dir.display())]
    Sample {
        dir: PathBuf,
        #[source]
        source: SampleLoadError,
    },

    #[error("Could not read protein sequence '{path}': {source}", path = path.display())]
    Protein {
        path: PathBuf,
        #[source]
        source: FastaError,
    },

    #[error("Could not read position table '{path}': {source}", path = path.display())]
    PositionTable {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("Could not write '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("Failed to install logger: {0}")]
    Logging(String),

    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
