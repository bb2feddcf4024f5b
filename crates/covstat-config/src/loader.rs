//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "COVSTAT_CONFIG_PATH";

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "covstat.yaml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Name of the offending variable
        var: String,
        /// Why the value was rejected
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for covstat_common::CovstatError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::parse(&content)?;
        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        info!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Parse YAML content; absent sections and fields take their defaults.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Resolve and load the configuration.
    ///
    /// Lookup order: the explicit path, `COVSTAT_CONFIG_PATH`, then
    /// `covstat.yaml` in the working directory, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> covstat_common::Result<Config> {
        let config = match Self::resolve_path(explicit) {
            Some(path) => Self::load_config(&path)?,
            None => {
                debug!("no configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config)?;
                config.validate_all().map_err(ConfigError::ValidationError)?;
                config
            }
        };

        Ok(config)
    }

    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        local.exists().then(|| local.to_path_buf())
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`, so callers can supply a
    /// source other than the process environment.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("COVSTAT_URL") {
            crate::validation::validate_url(&url).map_err(|e| ConfigError::EnvParseError {
                var: "COVSTAT_URL".to_string(),
                source: Box::new(e),
            })?;
            config.dashboard.url = url;
        }

        if let Some(timeout) = lookup("COVSTAT_TIMEOUT") {
            config.dashboard.timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "COVSTAT_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(dir) = lookup("COVSTAT_OUTPUT_DIR") {
            config.output.directory = dir;
        }

        if let Some(area_type) = lookup("COVSTAT_AREA_TYPE") {
            config.stats_api.area_type = area_type;
        }

        if let Some(area_name) = lookup("COVSTAT_AREA_NAME") {
            config.stats_api.area_name = area_name;
        }

        if let Some(level) = lookup("COVSTAT_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Create a temporary YAML config file for testing
    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_parse_partial_yaml_keeps_defaults() {
        let yaml = "dashboard:\n  timeout_seconds: 30\noutput:\n  directory: \"charts\"\n";
        let config = ConfigLoader::parse(yaml).expect("Failed to parse config");

        assert_eq!(config.dashboard.timeout_seconds, 30);
        assert_eq!(config.dashboard.url, crate::defaults::DEFAULT_DASHBOARD_URL);
        assert_eq!(config.output.directory, "charts");
        assert_eq!(config.stats_api.area_name, "sheffield");
    }

    #[test]
    fn test_parse_empty_yaml_is_default() {
        let config = ConfigLoader::parse("  \n").unwrap();
        assert_eq!(config.dashboard.timeout_seconds, 10);
    }

    #[test]
    fn test_load_valid_yaml_file() {
        let yaml = "dashboard:\n  url: \"https://example.org/stats/\"\n  day_first: true\nstats_api:\n  area_name: \"leeds\"\n  structure:\n    date: date\n    newCases: newCasesByPublishDate\n";
        let temp_file = create_test_config_file(yaml);
        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let config = ConfigLoader::parse(&content).unwrap();

        assert_eq!(config.dashboard.url, "https://example.org/stats/");
        assert!(config.dashboard.day_first);
        assert_eq!(config.stats_api.area_name, "leeds");
        assert_eq!(
            config.stats_api.structure["newCases"],
            serde_json::json!("newCasesByPublishDate")
        );
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_file = create_test_config_file("dashboard:\n  url: [unclosed");
        let result = ConfigLoader::load_config(temp_file.path());

        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error() {
        let config = ConfigLoader::parse("dashboard:\n  url: \"not_a_url\"\n").unwrap();
        let result = config.validate_all();
        assert!(result.is_err(), "Expected validation error for a bad URL");
    }

    #[test]
    fn test_overrides_replace_values() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("COVSTAT_URL", "https://mirror.example.org/stats/"),
            ("COVSTAT_TIMEOUT", "25"),
            ("COVSTAT_OUTPUT_DIR", "/tmp/covstat"),
            ("COVSTAT_AREA_NAME", "rotherham"),
            ("COVSTAT_LOG_LEVEL", "debug"),
        ]);
        ConfigLoader::apply_overrides_from(&mut config, lookup).unwrap();

        assert_eq!(config.dashboard.url, "https://mirror.example.org/stats/");
        assert_eq!(config.dashboard.timeout_seconds, 25);
        assert_eq!(config.output.directory, "/tmp/covstat");
        assert_eq!(config.stats_api.area_name, "rotherham");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = Config::default();
        let result = ConfigLoader::apply_overrides_from(
            &mut config,
            lookup_from(&[("COVSTAT_TIMEOUT", "soon")]),
        );
        assert!(matches!(result.unwrap_err(), ConfigError::EnvParseError { ref var, .. } if var == "COVSTAT_TIMEOUT"));
    }

    #[test]
    fn test_bad_url_override_rejected() {
        let mut config = Config::default();
        let result = ConfigLoader::apply_overrides_from(
            &mut config,
            lookup_from(&[("COVSTAT_URL", "::nope::")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config("/nonexistent/path/covstat.yaml");
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_explicit_path_wins() {
        let temp_file = create_test_config_file("output:\n  width: 640\n");
        let resolved = ConfigLoader::resolve_path(Some(temp_file.path()));
        assert_eq!(resolved.as_deref(), Some(temp_file.path()));
    }
}
