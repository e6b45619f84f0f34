//! Readers and writers for the tabular and sequence formats consumed and produced around the
//! engine.
//!
//! All readers validate eagerly and reject malformed input as a whole. The formats are:
//!
//! - [`kmer_csv`] - header-less `kmer_sequence,enrichment_value` tables
//! - [`fasta`] - FASTA-like protein records
//! - [`tables`] - position tables, PIWAS profiles and PIE result tables
//! - [`sample`] - discovery and loading of a sample's short/long k-mer tables

pub mod error;
pub mod fasta;
pub mod kmer_csv;
pub mod sample;
pub mod tables;
pub mod traits;
