//! # Workflows Module
//!
//! High-level entry points that chain the engine tasks into complete analyses.
//!
//! - **PIWAS** ([`piwas`]) - Normalizes case enrichment tables against control tables and scores
//!   a protein window by window, yielding one [`PiwasProfile`](crate::core::models::profile::PiwasProfile)
//!   per sample.
//! - **PIE** ([`pie`]) - Permutation significance test of position-scored case data against
//!   control data, with the most significant positions singled out.
//! - **Pipeline** ([`pipeline`]) - PIWAS followed by PIE on the profiles it produced, without
//!   a round trip through files.
//!
//! Every workflow validates its inputs up front, reports its phases through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) and returns an
//! [`EngineError`](crate::engine::error::EngineError) when validation fails.

pub mod pie;
pub mod pipeline;
pub mod piwas;
