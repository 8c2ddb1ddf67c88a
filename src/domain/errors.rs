//! Domain error types
//!
//! This module defines the error hierarchy for Pindica.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Pindica error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PindicaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Statistics API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Range discovery failed, so no fetch plan exists
    #[error("Range discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Records don't have the shape the transform expects
    #[error("Schema error: {0}")]
    Schema(String),

    /// Read, write or directory failures
    #[error("Filesystem error: {0}")]
    Filesystem(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Statistics API errors
///
/// Errors that occur when talking to the indicator API.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server answered with something other than 200
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Body was not JSON or lacked an expected field
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while working out which years to request
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The probe request failed
    #[error("probe request failed: {0}")]
    Request(#[from] ApiError),

    /// The reported last year could not be read as a year
    #[error("invalid last available year '{0}'")]
    InvalidLastYear(String),

    /// The reported last year precedes the start year
    #[error("last available year {last_year} is before start year {start_year}")]
    EmptyRange { start_year: u16, last_year: u16 },
}

// Conversion from std::io::Error
impl From<std::io::Error> for PindicaError {
    fn from(err: std::io::Error) -> Self {
        PindicaError::Filesystem(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PindicaError {
    fn from(err: serde_json::Error) -> Self {
        PindicaError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for PindicaError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            PindicaError::Filesystem(err.to_string())
        } else {
            PindicaError::Serialization(format!("CSV error: {err}"))
        }
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PindicaError {
    fn from(err: toml::de::Error) -> Self {
        PindicaError::Configuration(format!("TOML parse error: {err}"))
    }
}
