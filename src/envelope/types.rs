//! Envelope types
//!
//! Typed views over the wire envelope:
//! `{meta: {...}, data: ..., pagination?: {...}}`.

use crate::types::{JsonObject, JsonValue};
use serde::Deserialize;

// ============================================================================
// Meta Section
// ============================================================================

/// Status metadata section of the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    /// Application-level status code (200 = success)
    pub code: u16,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

// ============================================================================
// Pagination Section
// ============================================================================

/// Pagination section of the envelope.
///
/// `next_url` is the generic continuation cursor; domain-specific
/// cursors arrive as `next_<key>` fields and are kept verbatim.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PageInfo {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(flatten)]
    pub cursors: JsonObject,
}

impl PageInfo {
    /// Look up the continuation cursor for the given key.
    ///
    /// The key `url` resolves to `next_url`; any other key resolves to
    /// the envelope field `next_<key>`.
    pub fn next_cursor(&self, cursor_key: &str) -> Option<JsonValue> {
        if cursor_key == "url" {
            return self.next_url.clone().map(JsonValue::String);
        }
        self.cursors
            .get(&format!("next_{cursor_key}"))
            .filter(|value| !value.is_null())
            .cloned()
    }

    /// Whether the section carries no continuation data at all
    pub fn is_empty(&self) -> bool {
        self.next_url.is_none() && self.cursors.is_empty()
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Decoded payload of one successful response
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// Ordered sequence of entries (`list` shape)
    List(Vec<T>),
    /// A single entry (`entry` shape, or the verbatim envelope)
    Entry(T),
    /// No payload value (`empty` shape)
    Empty,
}

impl<T> Payload<T> {
    /// Number of entries carried
    pub fn len(&self) -> usize {
        match self {
            Payload::List(items) => items.len(),
            Payload::Entry(_) => 1,
            Payload::Empty => 0,
        }
    }

    /// Whether the payload carries no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a vector of entries
    pub fn into_list(self) -> Vec<T> {
        match self {
            Payload::List(items) => items,
            Payload::Entry(item) => vec![item],
            Payload::Empty => Vec::new(),
        }
    }

    /// Borrow the entries of a `list` payload
    pub fn as_list(&self) -> Option<&[T]> {
        match self {
            Payload::List(items) => Some(items),
            _ => None,
        }
    }

    /// Take the single entry, if there is one
    pub fn into_entry(self) -> Option<T> {
        match self {
            Payload::Entry(item) => Some(item),
            _ => None,
        }
    }
}

impl Payload<JsonValue> {
    /// Collapse a raw payload back into a single JSON value
    pub fn into_value(self) -> JsonValue {
        match self {
            Payload::List(items) => JsonValue::Array(items),
            Payload::Entry(item) => item,
            Payload::Empty => JsonValue::Null,
        }
    }
}
