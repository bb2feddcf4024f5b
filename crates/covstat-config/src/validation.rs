//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Validate log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate output directory (basic check for valid path characters)
pub fn validate_directory(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_directory"));
    }

    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_directory_characters"));
    }

    Ok(())
}

/// The statistics API expects `structure` to be a non-empty JSON object
pub fn validate_structure(structure: &serde_json::Value) -> Result<(), ValidationError> {
    match structure.as_object() {
        Some(map) if !map.is_empty() => Ok(()),
        Some(_) => Err(ValidationError::new("empty_structure")),
        None => Err(ValidationError::new("structure_not_an_object")),
    }
}

/// Validate a URL string
pub fn validate_url(value: &str) -> Result<(), ValidationError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_url"))
}
