//! Endpoint catalog loader
//!
//! Loads the declarative YAML catalogs that register endpoint
//! configurations, validates them, and exposes a lookup registry.

mod types;


pub use types::{CatalogDefinition, EndpointDefinition};

use crate::config::EndpointConfig;
use crate::error::{Error, Result};
use crate::method::{bind_method, BoundMethod};
use crate::path;
use crate::types::StringMap;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use url::Url;

/// Load a catalog from a YAML file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    load_catalog_from_str(&raw)
}

/// Load a catalog from a YAML string
pub fn load_catalog_from_str(raw: &str) -> Result<Catalog> {
    let definition: CatalogDefinition = serde_yaml::from_str(raw)?;
    Catalog::from_definition(definition)
}

/// A validated endpoint registry
#[derive(Debug, Clone)]
pub struct Catalog {
    definition: CatalogDefinition,
    endpoints: HashMap<String, EndpointConfig>,
}

impl Catalog {
    /// Build a catalog from a parsed definition, validating it first
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self> {
        validate(&definition)?;

        let endpoints = definition
            .endpoints
            .iter()
            .map(|endpoint| (endpoint.name.clone(), endpoint.config.clone()))
            .collect();

        Ok(Self {
            definition,
            endpoints,
        })
    }

    /// Catalog name
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Base URL for all requests
    pub fn base_url(&self) -> &str {
        &self.definition.base_url
    }

    /// Response format suffix
    pub fn format(&self) -> &str {
        &self.definition.format
    }

    /// Global headers
    pub fn headers(&self) -> &StringMap {
        &self.definition.headers
    }

    /// The parsed definition
    pub fn definition(&self) -> &CatalogDefinition {
        &self.definition
    }

    /// Look up an endpoint configuration by name
    pub fn endpoint(&self, name: &str) -> Result<&EndpointConfig> {
        self.endpoints
            .get(name)
            .ok_or_else(|| Error::unknown_endpoint(name))
    }

    /// Endpoint names, sorted
    pub fn endpoint_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.endpoints.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Bind a named endpoint into a callable method
    pub fn bind<T: DeserializeOwned>(&self, name: &str) -> Result<BoundMethod<T>> {
        Ok(bind_method(self.endpoint(name)?.clone()))
    }
}

fn validate(definition: &CatalogDefinition) -> Result<()> {
    if definition.name.is_empty() {
        return Err(Error::missing_field("name"));
    }
    if definition.base_url.is_empty() {
        return Err(Error::missing_field("base_url"));
    }
    Url::parse(&definition.base_url)?;
    if definition.endpoints.is_empty() {
        return Err(Error::config("catalog defines no endpoints"));
    }

    let mut seen = HashSet::new();
    for endpoint in &definition.endpoints {
        if endpoint.name.is_empty() {
            return Err(Error::missing_field("endpoints[].name"));
        }
        if !seen.insert(endpoint.name.as_str()) {
            return Err(Error::config(format!(
                "duplicate endpoint name: {}",
                endpoint.name
            )));
        }
        if endpoint.config.path.is_empty() {
            return Err(Error::missing_field(format!(
                "endpoints[{}].path",
                endpoint.name
            )));
        }
        if endpoint.config.paginates && endpoint.config.pagination_key.is_empty() {
            return Err(Error::missing_field(format!(
                "endpoints[{}].pagination_key",
                endpoint.name
            )));
        }

        // Every path token must be a bindable parameter
        for variable in path::template_variables(&endpoint.config.path) {
            if !endpoint.config.accepts_parameters.contains(&variable) {
                return Err(Error::config(format!(
                    "endpoint '{}': path variable '{variable}' is not an accepted parameter",
                    endpoint.name
                )));
            }
        }
    }

    Ok(())
}
