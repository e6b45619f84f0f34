//! Data models for enrichment scoring and significance testing.

pub mod enrichment;
pub mod positions;
pub mod profile;
pub mod results;
pub mod sample;
pub mod sequence;
