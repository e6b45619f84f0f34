use super::error::{TableError, TableParseErrorKind};
use super::traits::ReadTable;
use crate::core::models::enrichment::KmerEnrichment;
use std::io::BufRead;

const EXPECTED_COLUMNS: usize = 2;

/// Header-less two-column CSV of `kmer_sequence,enrichment_value` rows.
pub struct KmerCsvFile;

impl ReadTable for KmerCsvFile {
    type Table = KmerEnrichment;
    type Error = TableError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Table, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());

            if record.len() != EXPECTED_COLUMNS {
                return Err(TableError::Parse {
                    line,
                    kind: TableParseErrorKind::ColumnCount {
                        expected: EXPECTED_COLUMNS,
                        found: record.len(),
                    },
                });
            }

            let kmer = &record[0];
            if kmer.is_empty() {
                return Err(TableError::Parse {
                    line,
                    kind: TableParseErrorKind::EmptyKmer,
                });
            }

            let raw_value = &record[1];
            let value: f64 = raw_value.parse().map_err(|_| TableError::Parse {
                line,
                kind: TableParseErrorKind::NotNumeric {
                    column: "enrichment_value",
                    value: raw_value.to_string(),
                },
            })?;

            entries.push((kmer.to_string(), value));
        }

        Ok(KmerEnrichment::from_entries(entries)?)
    }
}
