//! # EPIWAS Core Library
//!
//! Scoring and significance testing for immune-epitope scan data. The library turns k-mer
//! enrichment tables into per-position protein scores (PIWAS) and then decides which positions
//! are statistically significant outliers against a control population (PIE).
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`KmerEnrichment`, `ProteinSequence`,
//!   `PositionTable`), descriptive statistics and the tabular/FASTA readers and writers used by
//!   collaborators that live outside the numeric engine.
//!
//! - **[`engine`]: The Logic Core.** Configuration, errors, progress reporting and the individual
//!   computational tasks: enrichment normalization, windowed scoring, the outlier statistic and
//!   the permutation significance test.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures (`piwas`, `pie` and the chained
//!   `pipeline`) that tie the engine tasks together and return result tables.

pub mod core;
pub mod engine;
pub mod workflows;
