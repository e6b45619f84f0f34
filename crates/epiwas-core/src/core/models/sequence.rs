use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid residue {residue:?} at position {position} (residues must be printable ASCII)")]
    InvalidResidue { position: usize, residue: char },
}

/// An ordered chain of residue characters.
///
/// Residues are stored 0-indexed; reporting layers convert to 1-based amino-acid positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinSequence {
    name: Option<String>,
    residues: String,
}

impl ProteinSequence {
    /// Creates a sequence, validating that every residue is a printable ASCII character.
    pub fn new(name: Option<String>, residues: impl Into<String>) -> Result<Self, SequenceError> {
        let residues = residues.into();
        if let Some((idx, residue)) = residues
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_graphic())
        {
            return Err(SequenceError::InvalidResidue {
                position: idx + 1,
                residue,
            });
        }
        Ok(Self { name, residues })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn residues(&self) -> &str {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of k-mer start positions, `len - k + 1`, or zero when the sequence is too short.
    pub fn kmer_count(&self, kmer_length: usize) -> usize {
        if kmer_length == 0 || self.len() < kmer_length {
            0
        } else {
            self.len() - kmer_length + 1
        }
    }

    /// The k-mer starting at 0-based index `start`, if it fits.
    #[inline]
    pub fn kmer_at(&self, start: usize, kmer_length: usize) -> Option<&str> {
        self.residues.get(start..start.checked_add(kmer_length)?)
    }

    pub fn kmers(&self, kmer_length: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.kmer_count(kmer_length)).map(move |i| &self.residues[i..i + kmer_length])
    }
}
