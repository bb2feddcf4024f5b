//! Configuration schema definitions using serde with validation attributes.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main configuration structure for covstat.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Dashboard fetch settings
    #[validate]
    pub dashboard: DashboardConfig,

    /// Public statistics API settings
    #[validate]
    pub stats_api: StatsApiConfig,

    /// Chart output settings
    #[validate]
    pub output: OutputConfig,

    /// Logging settings
    #[validate]
    pub logging: LoggingSettings,
}

/// Dashboard page configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page holding the statistics table
    #[validate(url(message = "Dashboard URL must be a valid URL"))]
    pub url: String,

    /// Request timeout in seconds, applied to every network call
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,

    /// User agent sent with requests
    #[validate(length(min = 1, message = "User agent cannot be empty"))]
    pub user_agent: String,

    /// Read ambiguous numeric dates such as `11/10/2020` day first
    pub day_first: bool,
}

/// Statistics API query configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StatsApiConfig {
    /// API endpoint
    #[validate(url(message = "Statistics endpoint must be a valid URL"))]
    pub endpoint: String,

    /// Area type filter, e.g. `utla`
    #[validate(length(min = 1, message = "Area type cannot be empty"))]
    pub area_type: String,

    /// Area name filter, e.g. `sheffield`
    #[validate(length(min = 1, message = "Area name cannot be empty"))]
    pub area_name: String,

    /// Metric used to pick the latest entry
    #[validate(length(min = 1, message = "latestBy metric cannot be empty"))]
    pub latest_by: String,

    /// Output field names mapped to upstream metric names
    pub structure: serde_json::Value,
}

impl StatsApiConfig {
    /// Filters as `key=value` pairs, in the order the API documents them.
    pub fn filters(&self) -> Vec<String> {
        vec![
            format!("areaType={}", self.area_type),
            format!("areaName={}", self.area_name),
        ]
    }
}

/// Chart output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the chart images
    #[validate(custom(function = "crate::validation::validate_directory", message = "Output directory is not a usable path"))]
    pub directory: String,

    /// Image width in pixels
    #[validate(range(min = 100, max = 8000, message = "Width must be between 100 and 8000 pixels"))]
    pub width: u32,

    /// Image height in pixels
    #[validate(range(min = 100, max = 8000, message = "Height must be between 100 and 8000 pixels"))]
    pub height: u32,

    /// Bar color for staff cases (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Staff color must be a hex color such as #1f77b4"))]
    pub staff_color: String,

    /// Bar color for student cases (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Student color must be a hex color such as #ff7f0e"))]
    pub student_color: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(function = "crate::validation::validate_log_level", message = "Log level must be one of: trace, debug, info, warn, error"))]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;

        let mut errors = validator::ValidationErrors::new();
        if let Err(err) = crate::validation::validate_structure(&self.stats_api.structure) {
            errors.add("structure", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<&LoggingSettings> for covstat_common::LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.json,
            ..Self::default()
        }
    }
}
