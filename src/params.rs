//! Parameter binding
//!
//! Turns call-time positional/keyword arguments into a validated
//! named-parameter map. Runs before any request is built; every failure
//! here is a client error.

use crate::error::{Error, Result};
use crate::types::{JsonValue, ParamMap};

// ============================================================================
// Parameter Values
// ============================================================================

/// A call-time argument value, normalized to encoded bytes on binding.
///
/// Byte values pass through untouched; everything else is stringified
/// and UTF-8 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Raw bytes, passed through as-is
    Bytes(Vec<u8>),
    /// Text, UTF-8 encoded on binding
    Text(String),
}

impl ParamValue {
    /// Encode the value into its wire byte form
    pub fn encode(&self) -> Vec<u8> {
        match self {
            ParamValue::Bytes(bytes) => bytes.clone(),
            ParamValue::Text(text) => text.clone().into_bytes(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(value: Vec<u8>) -> Self {
        ParamValue::Bytes(value)
    }
}

impl From<&[u8]> for ParamValue {
    fn from(value: &[u8]) -> Self {
        ParamValue::Bytes(value.to_vec())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<JsonValue> for ParamValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::String(s) => ParamValue::Text(s),
            JsonValue::Number(n) => ParamValue::Text(n.to_string()),
            JsonValue::Bool(b) => ParamValue::Text(b.to_string()),
            JsonValue::Null => ParamValue::Text(String::new()),
            // For complex types, use JSON serialization
            other => ParamValue::Text(serde_json::to_string(&other).unwrap_or_default()),
        }
    }
}

macro_rules! param_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Text(value.to_string())
                }
            }
        )*
    };
}

param_value_from_int!(i32, i64, u32, u64, usize);

// ============================================================================
// Call Arguments
// ============================================================================

/// Positional and keyword arguments for one invocation.
///
/// `None` entries are skipped during binding, so optional arguments can
/// be threaded through without branching at the call site.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    positional: Vec<Option<ParamValue>>,
    keyword: Vec<(String, Option<ParamValue>)>,
}

impl CallArgs {
    /// Create an empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    #[must_use]
    pub fn arg(mut self, value: impl Into<ParamValue>) -> Self {
        self.positional.push(Some(value.into()));
        self
    }

    /// Append an optional positional argument (None is skipped, the slot still advances)
    #[must_use]
    pub fn arg_opt<V: Into<ParamValue>>(mut self, value: Option<V>) -> Self {
        self.positional.push(value.map(Into::into));
        self
    }

    /// Append a keyword argument
    #[must_use]
    pub fn kw(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.keyword.push((name.into(), Some(value.into())));
        self
    }

    /// Append an optional keyword argument (None is skipped)
    #[must_use]
    pub fn kw_opt<V: Into<ParamValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.keyword.push((name.into(), value.map(Into::into)));
        self
    }

    /// Whether no arguments were supplied at all
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    pub(crate) fn positional(&self) -> &[Option<ParamValue>] {
        &self.positional
    }

    pub(crate) fn keyword(&self) -> &[(String, Option<ParamValue>)] {
        &self.keyword
    }
}

// ============================================================================
// Binding
// ============================================================================

/// The slice of an endpoint configuration the binder needs
#[derive(Debug, Clone)]
pub struct BindSpec<'a> {
    /// Accepted parameter names, in positional order
    pub accepted: &'a [String],
    /// When set, `user_id` gets no implicit default
    pub requires_target_user: bool,
    /// Whether the endpoint paginates (enables cursor seeding)
    pub paginates: bool,
    /// Effective cursor key for this invocation
    pub cursor_key: &'a str,
}

/// Bind call arguments into a validated parameter map.
///
/// Invariant: a parameter name binds at most once per invocation; a
/// duplicate is an error, never an overwrite.
pub fn bind(
    spec: &BindSpec<'_>,
    args: &CallArgs,
    pagination_seed: Option<&ParamValue>,
) -> Result<ParamMap> {
    let mut parameters = ParamMap::new();

    for (index, value) in args.positional().iter().enumerate() {
        let Some(value) = value else { continue };
        let name = spec
            .accepted
            .get(index)
            .ok_or_else(|| Error::too_many_arguments(spec.accepted.len()))?;
        parameters.insert(name.clone(), value.encode());
    }

    for (name, value) in args.keyword() {
        let Some(value) = value else { continue };
        if parameters.contains_key(name) {
            return Err(Error::duplicate_parameter(name));
        }
        parameters.insert(name.clone(), value.encode());
    }

    // The pagination seed is an alias for the effective cursor key
    if spec.paginates && !parameters.contains_key(spec.cursor_key) {
        if let Some(seed) = pagination_seed {
            parameters.insert(spec.cursor_key.to_string(), seed.encode());
        }
    }

    if spec.accepted.iter().any(|name| name == "user_id")
        && !parameters.contains_key("user_id")
        && !spec.requires_target_user
    {
        parameters.insert("user_id".to_string(), b"self".to_vec());
    }

    Ok(parameters)
}
