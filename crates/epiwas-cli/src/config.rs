//! Layered configuration: built-in defaults, then an optional TOML file, then `--set`
//! overrides, then dedicated command-line flags.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{ConfigSources, build_config};
pub use models::AppConfig;
