use crate::core::models::enrichment::KmerEnrichment;
use crate::core::stats::descriptive;
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

/// An affine rescaling `(value - center) / scale` derived from a control population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub center: f64,
    pub scale: f64,
}

impl Normalization {
    /// Mean / population standard deviation of `control`.
    ///
    /// A zero standard deviation is kept as-is; [`apply`](Self::apply) then only subtracts the
    /// center. Returns `None` for an empty control set.
    pub fn standard(control: &[f64]) -> Option<Self> {
        Some(Self {
            center: descriptive::mean(control)?,
            scale: descriptive::std_dev(control)?,
        })
    }

    /// Median / median absolute deviation of `control`, with a zero MAD replaced by 1.
    ///
    /// Returns `None` for an empty control set.
    pub fn robust(control: &[f64]) -> Option<Self> {
        let center = descriptive::median(control)?;
        let mad = descriptive::median_absolute_deviation(control)?;
        Some(Self {
            center,
            scale: if mad == 0.0 { 1.0 } else { mad },
        })
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        if self.scale == 0.0 {
            value - self.center
        } else {
            (value - self.center) / self.scale
        }
    }

    pub fn apply_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }
}

/// Rescales a case enrichment table against the control table (mean / standard deviation).
///
/// Only case k-mers that also appear in the control table are rescaled. A case k-mer absent from
/// the control table keeps its raw value.
#[instrument(level = "debug", skip_all, fields(kmer_length = case.kmer_length()))]
pub fn normalize_enrichment(
    case: &KmerEnrichment,
    control: &KmerEnrichment,
) -> Result<(KmerEnrichment, Normalization), EngineError> {
    let control_values: Vec<f64> = control.values().collect();
    let normalization =
        Normalization::standard(&control_values).ok_or(EngineError::EmptyReference {
            statistic: "control enrichment mean",
        })?;

    let mut passthrough = 0usize;
    let normalized = case.map_values(|kmer, value| {
        if control.contains(kmer) {
            normalization.apply(value)
        } else {
            passthrough += 1;
            value
        }
    });

    debug!(
        center = normalization.center,
        scale = normalization.scale,
        passthrough,
        "Normalized case enrichment against control."
    );
    Ok((normalized, normalization))
}
