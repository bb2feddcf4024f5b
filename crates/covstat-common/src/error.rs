//! Error types and utilities for covstat

use thiserror::Error;

/// Result type alias for covstat operations
pub type Result<T> = std::result::Result<T, CovstatError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for covstat operations.
///
/// Every variant is fatal to a run: there is no partial-output mode.
#[derive(Error, Debug)]
pub enum CovstatError {
    /// The dashboard or statistics API could not be reached, or answered
    /// with a non-success status
    #[error("Network error: {message}")]
    Network {
        /// Human readable description
        message: String,
        /// HTTP status, when a response was received
        status: Option<u16>,
        /// Underlying transport error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A header row did not carry the expected labels
    #[error("Schema error: {message}")]
    Schema {
        /// Human readable description
        message: String,
        /// Zero-based index of the offending row in the extracted table
        row: Option<usize>,
    },

    /// A cell could not be parsed as a date or an integer
    #[error("Format error: {message}")]
    Format {
        /// Human readable description
        message: String,
        /// The raw cell value that failed to parse
        value: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },

    /// Chart rendering errors
    #[error("Graph error: {message}")]
    Graph {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV output errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CovstatError {
    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            status: None,
            source: None,
        }
    }

    /// Create a new network error for a non-success HTTP status
    pub fn network_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Network {
            message: msg.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            row: None,
        }
    }

    /// Create a new schema error pointing at a row
    pub fn schema_at_row(msg: impl Into<String>, row: usize) -> Self {
        Self::Schema {
            message: msg.into(),
            row: Some(row),
        }
    }

    /// Create a new format error
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format {
            message: msg.into(),
            value: None,
        }
    }

    /// Create a new format error carrying the rejected value
    pub fn format_value(msg: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Format {
            message: msg.into(),
            value: Some(value.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status attached to a network error, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }
}

// Error conversion implementations for external types

/// Convert from reqwest::Error to CovstatError
impl From<reqwest::Error> for CovstatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err)
        } else if err.is_status() {
            let status = err.status().map(|s| s.as_u16());
            Self::Network {
                message: format!("HTTP error: {}", status.unwrap_or(0)),
                status,
                source: Some(Box::new(err)),
            }
        } else {
            Self::network_with_source("Network request failed", err)
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to CovstatError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for CovstatError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}
