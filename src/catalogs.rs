//! Built-in catalog definitions embedded in the binary
//!
//! This module embeds the bundled catalog YAML files directly into the
//! binary, allowing users to pass `--catalog photogram` instead of a
//! file path.

use crate::error::{Error, Result};
use crate::loader::{load_catalog_from_str, Catalog};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in catalog YAML definitions
pub static BUILTIN_CATALOGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("photogram", include_str!("../catalogs/photogram.yaml"));
        m
    });

/// Look up the raw YAML of a built-in catalog
pub fn builtin(name: &str) -> Option<&'static str> {
    BUILTIN_CATALOGS.get(name).copied()
}

/// Names of all built-in catalogs, sorted
pub fn builtin_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTIN_CATALOGS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Load a built-in catalog by name
pub fn load_builtin(name: &str) -> Result<Catalog> {
    let raw = builtin(name)
        .ok_or_else(|| Error::config(format!("no built-in catalog named '{name}'")))?;
    load_catalog_from_str(raw)
}
