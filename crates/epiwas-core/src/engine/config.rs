use thiserror::Error;

/// Shorter of the two k-mer lengths scored by PIWAS.
pub const DEFAULT_SHORT_KMER_LENGTH: usize = 5;
/// Longer of the two k-mer lengths scored by PIWAS.
pub const DEFAULT_LONG_KMER_LENGTH: usize = 6;
/// Half-width of the scoring window: a 10-residue window spans `i - 5 ..= i + 5`.
pub const DEFAULT_WINDOW_RADIUS: usize = 5;
/// Permutations drawn per position when building the null distribution.
pub const DEFAULT_ITERATIONS: usize = 1000;
/// Fraction of positions, by p-value rank, reported as most significant.
pub const DEFAULT_TOP_FRACTION: f64 = 0.05;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PiwasConfig {
    pub short_kmer_length: usize,
    pub long_kmer_length: usize,
    pub window_radius: usize,
}

impl PiwasConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_kmer_length == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "short_kmer_length",
                reason: "must be at least 1".into(),
            });
        }
        if self.long_kmer_length <= self.short_kmer_length {
            return Err(ConfigError::InvalidParameter {
                name: "long_kmer_length",
                reason: format!(
                    "must be greater than short_kmer_length ({})",
                    self.short_kmer_length
                ),
            });
        }
        Ok(())
    }
}

impl Default for PiwasConfig {
    fn default() -> Self {
        Self {
            short_kmer_length: DEFAULT_SHORT_KMER_LENGTH,
            long_kmer_length: DEFAULT_LONG_KMER_LENGTH,
            window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieConfig {
    pub iterations: usize,
    /// Seed for the permutation draws. `None` draws fresh entropy for every run.
    pub seed: Option<u64>,
    pub top_fraction: f64,
}

impl PieConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "iterations",
                reason: "at least one permutation is required".into(),
            });
        }
        if !(self.top_fraction > 0.0 && self.top_fraction <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "top_fraction",
                reason: format!("must lie in (0, 1], got {}", self.top_fraction),
            });
        }
        Ok(())
    }
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            top_fraction: DEFAULT_TOP_FRACTION,
        }
    }
}

#[derive(Default)]
pub struct PiwasConfigBuilder {
    short_kmer_length: Option<usize>,
    long_kmer_length: Option<usize>,
    window_radius: Option<usize>,
}

impl PiwasConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn short_kmer_length(mut self, length: usize) -> Self {
        self.short_kmer_length = Some(length);
        self
    }
    pub fn long_kmer_length(mut self, length: usize) -> Self {
        self.long_kmer_length = Some(length);
        self
    }
    pub fn window_radius(mut self, radius: usize) -> Self {
        self.window_radius = Some(radius);
        self
    }

    pub fn build(self) -> Result<PiwasConfig, ConfigError> {
        let short_kmer_length = self
            .short_kmer_length
            .ok_or(ConfigError::MissingParameter("short_kmer_length"))?;
        let long_kmer_length = self
            .long_kmer_length
            .ok_or(ConfigError::MissingParameter("long_kmer_length"))?;
        let window_radius = self
            .window_radius
            .ok_or(ConfigError::MissingParameter("window_radius"))?;

        let config = PiwasConfig {
            short_kmer_length,
            long_kmer_length,
            window_radius,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct PieConfigBuilder {
    iterations: Option<usize>,
    seed: Option<u64>,
    top_fraction: Option<f64>,
}

impl PieConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn top_fraction(mut self, fraction: f64) -> Self {
        self.top_fraction = Some(fraction);
        self
    }

    pub fn build(self) -> Result<PieConfig, ConfigError> {
        let iterations = self
            .iterations
            .ok_or(ConfigError::MissingParameter("iterations"))?;
        let top_fraction = self
            .top_fraction
            .ok_or(ConfigError::MissingParameter("top_fraction"))?;

        let config = PieConfig {
            iterations,
            seed: self.seed,
            top_fraction,
        };
        config.validate()?;
        Ok(config)
    }
}
