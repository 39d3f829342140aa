//! Endpoint configuration
//!
//! The static descriptor of one remote operation. Built once at
//! registration time (in code or from a catalog file) and never
//! mutated afterwards.

use crate::types::{Method, ResponseShape};
use serde::{Deserialize, Serialize};

/// Static descriptor of one remote operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EndpointConfig {
    /// Path template with `{name}` tokens
    pub path: String,
    /// HTTP method
    #[serde(default)]
    pub method: Method,
    /// Accepted parameter names, in positional-argument order
    #[serde(default)]
    pub accepts_parameters: Vec<String>,
    /// Require an explicit target-user parameter (disables the `user_id` default)
    #[serde(default)]
    pub requires_target_user: bool,
    /// Whether the endpoint returns paginated results
    #[serde(default)]
    pub paginates: bool,
    /// Domain-specific cursor field name in the pagination section
    #[serde(default = "default_pagination_key")]
    pub pagination_key: String,
    /// Shape of the envelope's `data` section
    #[serde(default)]
    pub response_shape: ResponseShape,
    /// Send the client secret with requests to this endpoint
    #[serde(default)]
    pub include_secret: bool,
    /// Build objects from `data` (false = return the decoded envelope verbatim)
    #[serde(default = "default_objectify")]
    pub objectify_response: bool,
}

fn default_pagination_key() -> String {
    "max_id".to_string()
}

fn default_objectify() -> bool {
    true
}

impl EndpointConfig {
    /// Create a config for the given path template, with defaults for
    /// everything else (GET, no parameters, list shape, no pagination)
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::default(),
            accepts_parameters: Vec::new(),
            requires_target_user: false,
            paginates: false,
            pagination_key: default_pagination_key(),
            response_shape: ResponseShape::default(),
            include_secret: false,
            objectify_response: true,
        }
    }

    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the accepted parameter names, in positional order
    #[must_use]
    pub fn accepts_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepts_parameters = names.into_iter().map(Into::into).collect();
        self
    }

    /// Require an explicit target-user parameter
    #[must_use]
    pub fn requires_target_user(mut self) -> Self {
        self.requires_target_user = true;
        self
    }

    /// Mark the endpoint as paginated
    #[must_use]
    pub fn paginates(mut self) -> Self {
        self.paginates = true;
        self
    }

    /// Set the domain-specific cursor field name
    #[must_use]
    pub fn pagination_key(mut self, key: impl Into<String>) -> Self {
        self.pagination_key = key.into();
        self
    }

    /// Set the response shape
    #[must_use]
    pub fn response_shape(mut self, shape: ResponseShape) -> Self {
        self.response_shape = shape;
        self
    }

    /// Send the client secret with requests to this endpoint
    #[must_use]
    pub fn include_secret(mut self) -> Self {
        self.include_secret = true;
        self
    }

    /// Return the decoded envelope verbatim instead of built objects
    #[must_use]
    pub fn raw_envelope(mut self) -> Self {
        self.objectify_response = false;
        self
    }
}
