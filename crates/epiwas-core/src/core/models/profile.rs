use super::positions::PositionTable;

/// One row of a PIWAS profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PiwasRow {
    /// 1-based amino-acid position.
    pub position: usize,
    pub iwas_value: f64,
    /// K-mer of the shorter length starting at this position.
    pub short_kmer: String,
    /// K-mer of the longer length starting at this position.
    pub long_kmer: String,
}

/// The combined per-position PIWAS scores of a single sample against one protein.
#[derive(Debug, Clone, PartialEq)]
pub struct PiwasProfile {
    pub protein_name: String,
    pub sample_id: String,
    pub short_kmer_length: usize,
    pub long_kmer_length: usize,
    pub rows: Vec<PiwasRow>,
}

impl PiwasProfile {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.iwas_value)
    }

    /// Projects the profile onto `(AminoAcidPosition, IwasValue)` rows for the PIE engine.
    pub fn to_position_table(&self) -> PositionTable {
        self.rows
            .iter()
            .map(|row| (row.position as i64, row.iwas_value))
            .collect()
    }
}
