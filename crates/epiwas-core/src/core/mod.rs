//! # Core Module
//!
//! Fundamental building blocks shared by the EPIWAS engine and its collaborators.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Enrichment tables, protein sequences, position-scored sample
//!   tables, PIWAS profiles and per-position results
//! - **Statistics** ([`stats`]) - Descriptive statistics with linear-interpolation percentiles and
//!   the standard normal tail used for p-values
//! - **File I/O** ([`io`]) - Validating readers for k-mer CSV tables, FASTA records and
//!   position tables, plus writers for PIWAS profiles and PIE result tables
//!
//! Every model here is immutable once constructed and validated; the engine never mutates its
//! inputs.

pub mod io;
pub mod models;
pub mod stats;
