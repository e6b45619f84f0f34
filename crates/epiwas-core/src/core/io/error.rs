use crate::core::models::enrichment::EnrichmentError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: u64, kind: TableParseErrorKind },
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("Invalid enrichment table: {0}")]
    Enrichment(#[from] EnrichmentError),
}

#[derive(Debug, Error, PartialEq)]
pub enum TableParseErrorKind {
    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("K-mer sequence must be a non-empty string")]
    EmptyKmer,
    #[error("Column '{column}' must contain numeric values (value: '{value}')")]
    NotNumeric { column: &'static str, value: String },
    #[error("Column '{column}' must contain integer values (value: '{value}')")]
    NotInteger { column: &'static str, value: String },
}
