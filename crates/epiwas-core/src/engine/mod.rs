//! # Engine Module
//!
//! The computational heart of EPIWAS: the tasks that turn enrichment tables into PIWAS scores
//! and PIWAS scores into PIE significance results.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Scoring and permutation parameters with validating builders
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types
//! - **Tasks** ([`tasks`]) - Enrichment normalization, windowed scoring, the IQR outlier
//!   statistic, the permutation significance test and the per-position driver
//!
//! ## Degeneracy policy
//!
//! Once inputs have been validated, numeric degeneracies never abort a run. A zero median
//! absolute deviation is replaced by one, an undefined or zero z-score collapses to zero and a
//! position without case or control data receives a neutral "not significant" result.

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
pub(crate) mod utils;
