use super::error::{TableError, TableParseErrorKind};
use super::traits::{ReadTable, WriteTable};
use crate::core::models::positions::PositionTable;
use crate::core::models::profile::PiwasProfile;
use crate::core::models::results::PositionResult;
use serde::Serialize;
use std::io::{BufRead, Write};

pub const POSITION_COLUMN: &str = "AminoAcidPosition";
pub const VALUE_COLUMN: &str = "IwasValue";
pub const Z_SCORE_COLUMN: &str = "ZScore";
pub const P_VALUE_COLUMN: &str = "PValue";

/// Headed CSV with at least `AminoAcidPosition` and `IwasValue` columns.
///
/// Extra columns (such as the ones in a PIWAS profile) are ignored, so a profile written by
/// [`PiwasProfileFile`] can be read back directly as a PIE input.
pub struct PositionTableFile;

impl ReadTable for PositionTableFile {
    type Table = PositionTable;
    type Error = TableError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Table, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column_index = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(TableError::MissingColumn(name))
        };
        let position_idx = column_index(POSITION_COLUMN)?;
        let value_idx = column_index(VALUE_COLUMN)?;

        let mut table = PositionTable::new();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());

            let raw_position = record.get(position_idx).unwrap_or_default();
            let position: i64 = raw_position.parse().map_err(|_| TableError::Parse {
                line,
                kind: TableParseErrorKind::NotInteger {
                    column: POSITION_COLUMN,
                    value: raw_position.to_string(),
                },
            })?;

            let raw_value = record.get(value_idx).unwrap_or_default();
            let value = raw_value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TableError::Parse {
                    line,
                    kind: TableParseErrorKind::NotNumeric {
                        column: VALUE_COLUMN,
                        value: raw_value.to_string(),
                    },
                })?;

            table.push(position, value);
        }
        Ok(table)
    }
}

/// CSV rendering of a [`PiwasProfile`].
///
/// Columns: `ProteinName, SampleID, IwasValue, AminoAcidPosition, kmer_sequence_<k>mer` for the
/// short and the long k-mer length.
pub struct PiwasProfileFile;

impl WriteTable for PiwasProfileFile {
    type Table = PiwasProfile;
    type Error = TableError;

    fn write_to(table: &Self::Table, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record([
            "ProteinName".to_string(),
            "SampleID".to_string(),
            VALUE_COLUMN.to_string(),
            POSITION_COLUMN.to_string(),
            format!("kmer_sequence_{}mer", table.short_kmer_length),
            format!("kmer_sequence_{}mer", table.long_kmer_length),
        ])?;

        for row in &table.rows {
            csv_writer.serialize((
                table.protein_name.as_str(),
                table.sample_id.as_str(),
                row.iwas_value,
                row.position,
                row.short_kmer.as_str(),
                row.long_kmer.as_str(),
            ))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ResultRecord {
    #[serde(rename = "AminoAcidPosition")]
    position: i64,
    #[serde(rename = "IwasValue")]
    representative_value: f64,
    #[serde(rename = "ZScore")]
    z_score: f64,
    #[serde(rename = "PValue")]
    p_value: f64,
}

impl From<&PositionResult> for ResultRecord {
    fn from(r: &PositionResult) -> Self {
        Self {
            position: r.position,
            representative_value: r.representative_value,
            z_score: r.z_score,
            p_value: r.p_value,
        }
    }
}

/// CSV rendering of PIE position results: `AminoAcidPosition, IwasValue, ZScore, PValue`.
///
/// The header is written even when there are no rows.
pub struct PieResultsFile;

impl WriteTable for PieResultsFile {
    type Table = [PositionResult];
    type Error = TableError;

    fn write_to(table: &Self::Table, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record([POSITION_COLUMN, VALUE_COLUMN, Z_SCORE_COLUMN, P_VALUE_COLUMN])?;
        for result in table {
            csv_writer.serialize(ResultRecord::from(result))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
