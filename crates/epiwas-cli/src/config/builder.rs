use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{PieOverrides, PiwasOverrides};
use crate::error::{CliError, Result};
use crate::utils::parser;
use epiwas::engine::config::{PieConfigBuilder, PiwasConfigBuilder};
use std::path::Path;
use std::str::FromStr;

/// Every place a parameter can come from, lowest precedence first.
pub struct ConfigSources<'a> {
    pub config_path: Option<&'a Path>,
    pub set_values: &'a [String],
    pub piwas: &'a PiwasOverrides,
    pub pie: &'a PieOverrides,
}

pub fn build_config(sources: &ConfigSources) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = sources.config_path {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, sources.set_values)?;

    let piwas_file = file_config.piwas.take().unwrap_or_default();
    let piwas = PiwasConfigBuilder::new()
        .short_kmer_length(
            sources
                .piwas
                .short_kmer_length
                .or(piwas_file.short_kmer_length)
                .unwrap_or(defaults.short_kmer_length),
        )
        .long_kmer_length(
            sources
                .piwas
                .long_kmer_length
                .or(piwas_file.long_kmer_length)
                .unwrap_or(defaults.long_kmer_length),
        )
        .window_radius(
            sources
                .piwas
                .window_radius
                .or(piwas_file.window_radius)
                .unwrap_or(defaults.window_radius),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let pie_file = file_config.pie.take().unwrap_or_default();
    let pie = PieConfigBuilder::new()
        .iterations(
            sources
                .pie
                .iterations
                .or(pie_file.iterations)
                .unwrap_or(defaults.iterations),
        )
        .seed(sources.pie.seed.or(pie_file.seed))
        .top_fraction(
            sources
                .pie
                .top_fraction
                .or(pie_file.top_fraction)
                .unwrap_or(defaults.top_fraction),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig { piwas, pie })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "piwas.short-kmer-length" => {
                config
                    .piwas
                    .get_or_insert_with(Default::default)
                    .short_kmer_length = Some(parse_value(key, value, "integer")?);
            }
            "piwas.long-kmer-length" => {
                config
                    .piwas
                    .get_or_insert_with(Default::default)
                    .long_kmer_length = Some(parse_value(key, value, "integer")?);
            }
            "piwas.window-radius" => {
                config.piwas.get_or_insert_with(Default::default).window_radius =
                    Some(parse_value(key, value, "integer")?);
            }
            "pie.iterations" => {
                config.pie.get_or_insert_with(Default::default).iterations =
                    Some(parse_value(key, value, "integer")?);
            }
            "pie.seed" => {
                config.pie.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value, "integer")?);
            }
            "pie.top-fraction" => {
                config.pie.get_or_insert_with(Default::default).top_fraction =
                    Some(parse_value(key, value, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn build(
        config_path: Option<&Path>,
        set_values: &[String],
        piwas: PiwasOverrides,
        pie: PieOverrides,
    ) -> Result<AppConfig> {
        build_config(&ConfigSources {
            config_path,
            set_values,
            piwas: &piwas,
            pie: &pie,
        })
    }

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("epiwas.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let config = build(None, &[], Default::default(), Default::default()).unwrap();
        let defaults = DefaultsConfig::default();
        assert_eq!(config.piwas.short_kmer_length, defaults.short_kmer_length);
        assert_eq!(config.piwas.long_kmer_length, defaults.long_kmer_length);
        assert_eq!(config.piwas.window_radius, defaults.window_radius);
        assert_eq!(config.pie.iterations, defaults.iterations);
        assert_eq!(config.pie.top_fraction, defaults.top_fraction);
        assert_eq!(config.pie.seed, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[piwas]\nwindow-radius = 8\n\n[pie]\niterations = 250\nseed = 9\n",
        );
        let config = build(Some(&path), &[], Default::default(), Default::default()).unwrap();
        assert_eq!(config.piwas.window_radius, 8);
        assert_eq!(config.pie.iterations, 250);
        assert_eq!(config.pie.seed, Some(9));
    }

    #[test]
    fn set_values_override_file_and_flags_override_set_values() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[pie]\niterations = 250\ntop-fraction = 0.2\n");
        let set_values = vec![
            "pie.iterations=400".to_string(),
            "pie.top-fraction=0.1".to_string(),
            "piwas.window-radius=2".to_string(),
        ];
        let pie = PieOverrides {
            iterations: Some(800),
            ..Default::default()
        };

        let config = build(Some(&path), &set_values, Default::default(), pie).unwrap();
        assert_eq!(config.pie.iterations, 800);
        assert_eq!(config.pie.top_fraction, 0.1);
        assert_eq!(config.piwas.window_radius, 2);
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let result = build(
            None,
            &["pie.permutations=10".to_string()],
            Default::default(),
            Default::default(),
        );
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("pie.permutations")));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        for bad in ["pie.iterations", "pie.iterations=many", "pie.top-fraction=high"] {
            let result = build(None, &[bad.to_string()], Default::default(), Default::default());
            assert!(matches!(result, Err(CliError::Config(_))), "accepted {bad}");
        }
    }

    #[test]
    fn invalid_combination_is_reported_as_config_error() {
        let piwas = PiwasOverrides {
            short_kmer_length: Some(6),
            long_kmer_length: Some(5),
            ..Default::default()
        };
        let result = build(None, &[], piwas, Default::default());
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("long_kmer_length")));
    }
}
