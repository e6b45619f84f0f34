use crate::error::{CliError, Result};
use epiwas::engine::config::{PieConfig, PiwasConfig};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    prelude::*,
};

/// Target prefix shared by the core library and this binary. Events under it follow `-v`;
/// dependencies stay at `WARN`.
const OWN_TARGET: &str = "epiwas";

fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn own_targets_at(level: LevelFilter) -> Targets {
    Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target(OWN_TARGET, level)
}

fn console_filter(verbosity: u8, quiet: bool) -> Targets {
    if quiet {
        return Targets::new().with_default(LevelFilter::OFF);
    }
    own_targets_at(verbosity_level(verbosity))
}

// The log file keeps normalization and phase details even on a quiet console; per-position
// permutation traces still need -vvv.
fn file_filter(verbosity: u8) -> Targets {
    own_targets_at(verbosity_level(verbosity).max(LevelFilter::DEBUG))
}

/// Installs the global subscriber: compact stderr output plus an optional plain-text run log.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_filter(verbosity, quiet));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_filter(file_filter(verbosity)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// Records the scoring parameters a PIWAS profile depends on.
pub fn log_piwas_parameters(config: &PiwasConfig) {
    info!(
        short_kmer_length = config.short_kmer_length,
        long_kmer_length = config.long_kmer_length,
        window_radius = config.window_radius,
        "PIWAS parameters resolved."
    );
}

/// Records the permutation budget and seed, which together fix every PIE p-value.
pub fn log_pie_parameters(config: &PieConfig) {
    match config.seed {
        Some(seed) => info!(
            iterations = config.iterations,
            top_fraction = config.top_fraction,
            seed,
            "PIE parameters resolved; rerun with the same seed to reproduce p-values."
        ),
        None => info!(
            iterations = config.iterations,
            top_fraction = config.top_fraction,
            "PIE parameters resolved without a seed; p-values will vary between runs."
        ),
    }
}
