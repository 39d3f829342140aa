//! Error types for apibind
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for apibind
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Client-Side Binding Errors
    // ============================================================================
    #[error("Too many arguments supplied: endpoint accepts at most {accepted}")]
    TooManyArguments { accepted: usize },

    #[error("Parameter '{name}' already supplied")]
    DuplicateParameter { name: String },

    #[error("No parameter value found for path variable: {name}")]
    MissingPathParameter { name: String },

    // ============================================================================
    // Remote-Reported Failures
    // ============================================================================
    #[error("({status_code}) {error_type}: {error_message}")]
    Api {
        status_code: u16,
        error_type: String,
        error_message: String,
    },

    #[error("Unable to parse response: {message}")]
    MalformedResponse { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Unknown endpoint: {name}")]
    UnknownEndpoint { name: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a too-many-arguments error
    pub fn too_many_arguments(accepted: usize) -> Self {
        Self::TooManyArguments { accepted }
    }

    /// Create a duplicate-parameter error
    pub fn duplicate_parameter(name: impl Into<String>) -> Self {
        Self::DuplicateParameter { name: name.into() }
    }

    /// Create a missing-path-parameter error
    pub fn missing_path_parameter(name: impl Into<String>) -> Self {
        Self::MissingPathParameter { name: name.into() }
    }

    /// Create an API error from an envelope's meta section
    pub fn api(
        status_code: u16,
        error_type: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self::Api {
            status_code,
            error_type: error_type.into(),
            error_message: error_message.into(),
        }
    }

    /// Create the rate-limit translation of a 429/503 transport status
    pub fn rate_limited(status_code: u16) -> Self {
        Self::Api {
            status_code,
            error_type: "Rate limited".to_string(),
            error_message: "Your client is making too many requests per second".to_string(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an unknown-endpoint error
    pub fn unknown_endpoint(name: impl Into<String>) -> Self {
        Self::UnknownEndpoint { name: name.into() }
    }

    /// Check if this error is local misuse, raised before any request is built.
    /// Client errors are never worth retrying.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::TooManyArguments { .. }
                | Error::DuplicateParameter { .. }
                | Error::MissingPathParameter { .. }
        )
    }
}

/// Result type alias for apibind
pub type Result<T> = std::result::Result<T, Error>;
