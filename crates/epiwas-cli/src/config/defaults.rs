use epiwas::engine::config::{
    DEFAULT_ITERATIONS, DEFAULT_LONG_KMER_LENGTH, DEFAULT_SHORT_KMER_LENGTH,
    DEFAULT_TOP_FRACTION, DEFAULT_WINDOW_RADIUS,
};

pub struct DefaultsConfig {
    pub short_kmer_length: usize,
    pub long_kmer_length: usize,
    pub window_radius: usize,
    pub iterations: usize,
    pub top_fraction: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            short_kmer_length: DEFAULT_SHORT_KMER_LENGTH,
            long_kmer_length: DEFAULT_LONG_KMER_LENGTH,
            window_radius: DEFAULT_WINDOW_RADIUS,
            iterations: DEFAULT_ITERATIONS,
            top_fraction: DEFAULT_TOP_FRACTION,
        }
    }
}
