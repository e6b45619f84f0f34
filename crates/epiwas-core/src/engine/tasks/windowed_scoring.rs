use crate::core::models::enrichment::KmerEnrichment;
use crate::core::models::sequence::ProteinSequence;
use tracing::{instrument, trace};

/// Per-position window scores for one k-mer length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowScores {
    /// Max enrichment within the window around each k-mer start.
    pub scores: Vec<f64>,
    /// The k-mer located at each start, independent of which k-mer produced the score.
    pub kmers: Vec<String>,
}

impl WindowScores {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Scores every k-mer start of `sequence` by the strongest enrichment in its neighborhood.
///
/// For start `i`, every k-mer starting at `j ∈ [i - window_radius, i + window_radius]` (clamped to
/// the valid starts) is looked up in `table`. The score is the maximum value found, or `0.0`
/// when none of them is in the table. A sequence shorter than `kmer_length` yields no scores.
#[instrument(
    level = "debug",
    skip_all,
    fields(kmer_length = kmer_length, window_radius = window_radius)
)]
pub fn score_windows(
    sequence: &ProteinSequence,
    table: &KmerEnrichment,
    kmer_length: usize,
    window_radius: usize,
) -> WindowScores {
    let n = sequence.kmer_count(kmer_length);
    if n == 0 {
        return WindowScores::default();
    }

    let hits: Vec<Option<f64>> = sequence.kmers(kmer_length).map(|k| table.get(k)).collect();
    let last = n - 1;

    let scores = (0..n)
        .map(|i| {
            let lo = i.saturating_sub(window_radius);
            let hi = i.saturating_add(window_radius).min(last);
            hits[lo..=hi]
                .iter()
                .flatten()
                .copied()
                .reduce(f64::max)
                .unwrap_or(0.0)
        })
        .collect();
    let kmers = sequence.kmers(kmer_length).map(str::to_owned).collect();

    trace!(
        positions = n,
        matched = hits.iter().filter(|h| h.is_some()).count(),
        "Window scoring done."
    );
    WindowScores { scores, kmers }
}

/// Cuts two score vectors to the length of the shorter one.
///
/// Score vectors of different k-mer lengths differ in length by `k_long - k_short`; the tail of
/// the longer vector has no counterpart and is dropped.
pub fn truncate_to_shorter<'a, T>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    let len = a.len().min(b.len());
    (&a[..len], &b[..len])
}

/// Pointwise maximum of two score vectors after [`truncate_to_shorter`].
pub fn combine_kmer_lengths(short: &[f64], long: &[f64]) -> Vec<f64> {
    let (short, long) = truncate_to_shorter(short, long);
    short
        .iter()
        .zip(long)
        .map(|(&a, &b)| a.max(b))
        .collect()
}
