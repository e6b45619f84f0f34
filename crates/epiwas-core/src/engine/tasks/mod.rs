//! Computational units of the PIWAS and PIE workflows.
//!
//! Each task is a pure function over already-validated inputs. Normalization and windowed
//! scoring produce PIWAS scores; the outlier statistic, the permutation tester and the
//! per-position driver turn those scores into PIE significance results.

pub mod normalization;
pub mod outlier;
pub mod permutation;
pub mod significance;
pub mod windowed_scoring;
