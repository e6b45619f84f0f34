use super::traits::ReadTable;
use crate::core::models::sequence::{ProteinSequence, SequenceError};
use bio::io::fasta;
use std::io::{self, BufRead, Read};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Record contains no residues")]
    NoResidues,
    #[error("Invalid sequence: {0}")]
    Sequence(#[from] SequenceError),
}

/// FASTA-like protein record.
///
/// Records are concatenated in order into one sequence and the first record's header
/// (identifier and description) becomes the protein name. Input whose first non-blank line is
/// not a `>` header is read as bare residue lines.
pub struct FastaFile;

impl ReadTable for FastaFile {
    type Table = ProteinSequence;
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Table, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
            return Err(FastaError::NoResidues);
        };
        let (name, residues) = if first_line.starts_with('>') {
            read_records(content.trim_start())?
        } else {
            (None, join_residue_lines(&content))
        };

        if residues.is_empty() {
            return Err(FastaError::NoResidues);
        }
        Ok(ProteinSequence::new(name, residues)?)
    }
}

fn read_records(body: &str) -> Result<(Option<String>, String), FastaError> {
    let mut name = None;
    let mut residues = String::new();

    for record in fasta::Reader::new(body.as_bytes()).records() {
        let record = record?;
        if name.is_none() {
            name = Some(match record.desc() {
                Some(desc) => format!("{} {}", record.id(), desc),
                None => record.id().to_string(),
            });
        }
        residues.push_str(&String::from_utf8_lossy(record.seq()));
    }
    Ok((name, residues))
}

// Lines starting with `>` are dropped even without a leading header.
fn join_residue_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('>'))
        .map(str::trim)
        .collect()
}
