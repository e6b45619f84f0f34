use super::enrichment::KmerEnrichment;
use regex::Regex;
use std::sync::LazyLock;

/// The two k-mer enrichment tables (short and long k-mer length) measured for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTables {
    pub sample_id: String,
    pub short: KmerEnrichment,
    pub long: KmerEnrichment,
}

impl SampleTables {
    pub fn new(sample_id: impl Into<String>, short: KmerEnrichment, long: KmerEnrichment) -> Self {
        Self {
            sample_id: sample_id.into(),
            short,
            long,
        }
    }
}

static SAMPLE_ID: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"AD\d+").ok());

/// Extracts a sample identifier of the form `AD<digits>` from a file name.
///
/// Returns the first occurrence, e.g. `"AD1234"` for `"AD1234_kmer_5.csv"`.
pub fn sample_id_from_file_name(file_name: &str) -> Option<String> {
    SAMPLE_ID
        .as_ref()?
        .find(file_name)
        .map(|found| found.as_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_id_is_extracted_from_prefix() {
        assert_eq!(
            sample_id_from_file_name("AD1234_kmer_5.csv"),
            Some("AD1234".to_string())
        );
    }

    #[test]
    fn sample_id_is_extracted_from_middle_of_name() {
        assert_eq!(
            sample_id_from_file_name("case_ADX_AD77_kmer_6.csv"),
            Some("AD77".to_string())
        );
    }

    #[test]
    fn first_of_several_sample_ids_wins() {
        assert_eq!(
            sample_id_from_file_name("AD12_vs_AD34_kmer_5.csv"),
            Some("AD12".to_string())
        );
        assert_eq!(
            sample_id_from_file_name("ADD9_AD5.csv"),
            Some("AD5".to_string())
        );
    }

    #[test]
    fn sample_id_missing_yields_none() {
        assert_eq!(sample_id_from_file_name("control_kmer_5.csv"), None);
        assert_eq!(sample_id_from_file_name("AD.csv"), None);
        assert_eq!(sample_id_from_file_name("trailing_AD"), None);
    }
}
