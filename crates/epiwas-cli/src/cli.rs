use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "EPIWAS Developers",
    version,
    about = "EPIWAS CLI - Protein-based immunome-wide association scoring (PIWAS) and permutation significance testing (PIE) of epitope enrichment data.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel permutation testing.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a protein against case and control k-mer enrichment tables (PIWAS).
    Piwas(PiwasArgs),
    /// Test position-scored case data against control data for significant outliers (PIE).
    Pie(PieArgs),
    /// Run PIWAS and feed its profiles straight into PIE.
    Pipeline(PipelineArgs),
}

/// Sample folders and protein record consumed by PIWAS.
#[derive(Args, Debug, Clone)]
pub struct SampleInputArgs {
    /// Folder holding the case sample's k-mer tables (files named `*kmer_5*` and `*kmer_6*`).
    #[arg(long = "case", required = true, value_name = "DIR")]
    pub case_dir: PathBuf,

    /// Folder holding the control sample's k-mer tables.
    #[arg(long = "control", required = true, value_name = "DIR")]
    pub control_dir: PathBuf,

    /// Protein sequence in FASTA format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub protein: PathBuf,
}

/// Overrides for the PIWAS parameters in the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PiwasOverrides {
    /// Override the shorter k-mer length.
    #[arg(long, value_name = "INT")]
    pub short_kmer_length: Option<usize>,

    /// Override the longer k-mer length.
    #[arg(long, value_name = "INT")]
    pub long_kmer_length: Option<usize>,

    /// Override the scoring window radius (k-mer starts on either side of a position).
    #[arg(short = 'w', long, value_name = "INT")]
    pub window_radius: Option<usize>,
}

/// Overrides for the PIE parameters in the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PieOverrides {
    /// Override the number of permutations per position.
    #[arg(short = 'n', long, value_name = "INT")]
    pub iterations: Option<usize>,

    /// Seed the permutation draws for reproducible results.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the fraction of positions reported as most significant.
    #[arg(long, value_name = "FLOAT")]
    pub top_fraction: Option<f64>,
}

/// Arguments for the `piwas` subcommand.
#[derive(Args, Debug)]
pub struct PiwasArgs {
    #[command(flatten)]
    pub inputs: SampleInputArgs,

    /// Directory receiving the per-sample score tables.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub piwas: PiwasOverrides,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S piwas.window-radius=10
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `pie` subcommand.
#[derive(Args, Debug)]
pub struct PieArgs {
    /// Case score table with `AminoAcidPosition` and `IwasValue` columns.
    #[arg(long = "case", required = true, value_name = "PATH")]
    pub case_table: PathBuf,

    /// Control score table with `AminoAcidPosition` and `IwasValue` columns.
    #[arg(long = "control", required = true, value_name = "PATH")]
    pub control_table: PathBuf,

    /// Directory receiving the result tables.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub pie: PieOverrides,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S pie.iterations=5000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `pipeline` subcommand.
#[derive(Args, Debug)]
pub struct PipelineArgs {
    #[command(flatten)]
    pub inputs: SampleInputArgs,

    /// Directory receiving the score and result tables.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub piwas: PiwasOverrides,

    #[command(flatten)]
    pub pie: PieOverrides,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S pie.seed=42
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
