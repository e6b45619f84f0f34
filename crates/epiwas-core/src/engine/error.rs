use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{sample} {role} table holds {found}-mers, but the configuration expects {expected}-mers")]
    KmerLengthMismatch {
        sample: &'static str,
        role: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Reference set for '{statistic}' is empty")]
    EmptyReference { statistic: &'static str },
}
