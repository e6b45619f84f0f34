use epiwas::engine::config::{PieConfig, PiwasConfig};

/// Fully resolved parameters for both workflows.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub piwas: PiwasConfig,
    pub pie: PieConfig,
}
