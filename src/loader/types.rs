//! Loader types
//!
//! Declarative endpoint catalog definitions for YAML parsing.

use crate::config::EndpointConfig;
use crate::types::StringMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Definition
// ============================================================================

/// Top-level endpoint catalog definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogDefinition {
    /// Catalog name
    pub name: String,
    /// Catalog version
    #[serde(default = "default_version")]
    pub version: String,
    /// Base URL for all requests
    pub base_url: String,
    /// Response format suffix appended to every resolved path
    #[serde(default = "default_format")]
    pub format: String,
    /// Global headers
    #[serde(default)]
    pub headers: StringMap,
    /// Endpoint definitions
    pub endpoints: Vec<EndpointDefinition>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

// ============================================================================
// Endpoint Definition
// ============================================================================

/// A named endpoint entry in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EndpointDefinition {
    /// Endpoint name, unique within the catalog
    pub name: String,
    /// The endpoint configuration itself
    #[serde(flatten)]
    pub config: EndpointConfig,
}
