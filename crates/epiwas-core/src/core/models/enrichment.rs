use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnrichmentError {
    #[error("Enrichment table contains no k-mers")]
    Empty,
    #[error("K-mer sequence must be a non-empty string")]
    EmptyKmer,
    #[error("Enrichment value for k-mer '{kmer}' is not a finite number: {value}")]
    NonFiniteValue { kmer: String, value: f64 },
    #[error("K-mer '{kmer}' has length {found}, but the table holds {expected}-mers")]
    InconsistentLength {
        kmer: String,
        expected: usize,
        found: usize,
    },
}

/// An immutable mapping from fixed-length sequence fragments to enrichment values.
///
/// A lookup for a fragment that is not in the table yields `None` ("no evidence"). The table
/// never invents a value for a missing fragment; substituting zero is the windowed scorer's
/// decision, not the table's.
#[derive(Debug, Clone, PartialEq)]
pub struct KmerEnrichment {
    kmer_length: usize,
    values: HashMap<String, f64>,
}

impl KmerEnrichment {
    /// Builds a table from `(kmer, value)` pairs.
    ///
    /// A k-mer listed more than once keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no entries, if a k-mer is empty, if a value is NaN or
    /// infinite, or if the k-mers do not all share one length.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, EnrichmentError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut kmer_length = None;
        let mut values = HashMap::new();

        for (kmer, value) in entries {
            let kmer = kmer.into();
            if kmer.is_empty() {
                return Err(EnrichmentError::EmptyKmer);
            }
            if !value.is_finite() {
                return Err(EnrichmentError::NonFiniteValue { kmer, value });
            }
            match kmer_length {
                None => kmer_length = Some(kmer.len()),
                Some(expected) if expected != kmer.len() => {
                    return Err(EnrichmentError::InconsistentLength {
                        found: kmer.len(),
                        kmer,
                        expected,
                    });
                }
                Some(_) => {}
            }
            values.insert(kmer, value);
        }

        let kmer_length = kmer_length.ok_or(EnrichmentError::Empty)?;
        Ok(Self {
            kmer_length,
            values,
        })
    }

    /// Rebuilds a table with every value passed through `f`, keeping the same k-mers.
    pub fn map_values(&self, mut f: impl FnMut(&str, f64) -> f64) -> Self {
        let values = self
            .values
            .iter()
            .map(|(kmer, &value)| (kmer.clone(), f(kmer, value)))
            .collect();
        Self {
            kmer_length: self.kmer_length,
            values,
        }
    }

    pub fn kmer_length(&self) -> usize {
        self.kmer_length
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, kmer: &str) -> Option<f64> {
        self.values.get(kmer).copied()
    }

    pub fn contains(&self, kmer: &str) -> bool {
        self.values.contains_key(kmer)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(kmer, &value)| (kmer.as_str(), value))
    }
}
