//! Path template resolution
//!
//! Substitutes `{name}` tokens in an endpoint path template from the
//! bound parameter map. Consumed parameters are removed so they are not
//! also sent as query or body parameters.

use crate::error::{Error, Result};
use crate::types::ParamMap;
use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching path template tokens: {name}
static PATH_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Characters left unescaped in substituted path values
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Resolve a path template against the bound parameters.
///
/// Each `{name}` token is replaced by the percent-encoded value bound
/// under `name`, and that key is removed from the map. The configured
/// response-format suffix is appended to the final path. Token order
/// does not affect the result.
pub fn resolve(template: &str, parameters: &mut ParamMap, format: &str) -> Result<String> {
    let mut path = template.to_string();

    for cap in PATH_TOKEN_REGEX.captures_iter(template) {
        let token = cap.get(0).unwrap().as_str();
        let name = cap.get(1).unwrap().as_str();

        // A repeated token was already substituted by the replace below
        if !path.contains(token) {
            continue;
        }

        let value = parameters
            .remove(name)
            .ok_or_else(|| Error::missing_path_parameter(name))?;
        let escaped = percent_encode(&value, PATH_VALUE).to_string();
        path = path.replace(token, &escaped);
    }

    Ok(format!("{path}.{format}"))
}

/// Extract all token names from a path template
pub fn template_variables(template: &str) -> Vec<String> {
    PATH_TOKEN_REGEX
        .captures_iter(template)
        .map(|cap| cap.get(1).unwrap().as_str().to_string())
        .collect()
}
