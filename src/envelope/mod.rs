//! Response decoding
//!
//! Interprets the wire envelope: translates rate-limit transport
//! statuses, parses JSON, gates on `meta.code`, materializes the
//! payload per the configured response shape, and extracts the
//! pagination section.

mod types;

#[cfg(test)]
mod tests;

pub use types::{Meta, PageInfo, Payload};

use crate::error::{Error, Result};
use crate::types::{JsonValue, ResponseShape};
use serde::de::DeserializeOwned;

/// Transport statuses translated to a rate-limit error before JSON parsing
const RATE_LIMITED_STATUSES: [u16; 2] = [429, 503];

/// Decode one transport response into a payload and its pagination section.
///
/// With `objectify` disabled the decoded envelope is returned verbatim
/// as a single entry, with an empty pagination section.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    shape: ResponseShape,
    objectify: bool,
) -> Result<(Payload<T>, PageInfo)> {
    if RATE_LIMITED_STATUSES.contains(&status) {
        return Err(Error::rate_limited(status));
    }

    let mut envelope: JsonValue =
        serde_json::from_str(body).map_err(|e| Error::malformed(format!("not valid JSON: {e}")))?;

    let meta = parse_meta(&envelope)?;
    if meta.code != 200 {
        return Err(Error::api(
            meta.code,
            meta.error_type.unwrap_or_else(|| "UnknownError".to_string()),
            meta.error_message.unwrap_or_default(),
        ));
    }

    if !objectify {
        let entry = serde_json::from_value(envelope)
            .map_err(|e| Error::malformed(format!("failed to build object from envelope: {e}")))?;
        return Ok((Payload::Entry(entry), PageInfo::default()));
    }

    let pagination = match envelope.get_mut("pagination") {
        Some(section) => serde_json::from_value(section.take())
            .map_err(|e| Error::malformed(format!("invalid pagination section: {e}")))?,
        None => PageInfo::default(),
    };

    let data = envelope
        .get_mut("data")
        .map_or(JsonValue::Null, JsonValue::take);
    let payload = materialize(data, shape)?;

    Ok((payload, pagination))
}

/// Materialize the `data` section per the configured shape
pub fn materialize<T: DeserializeOwned>(data: JsonValue, shape: ResponseShape) -> Result<Payload<T>> {
    match shape {
        ResponseShape::List => {
            let JsonValue::Array(entries) = data else {
                return Err(Error::malformed("expected data section to be an array"));
            };
            let mut items = Vec::with_capacity(entries.len());
            for entry in entries {
                items.push(build_object(entry)?);
            }
            Ok(Payload::List(items))
        }
        ResponseShape::Entry => Ok(Payload::Entry(build_object(data)?)),
        ResponseShape::Empty => Ok(Payload::Empty),
    }
}

fn build_object<T: DeserializeOwned>(entry: JsonValue) -> Result<T> {
    serde_json::from_value(entry)
        .map_err(|e| Error::malformed(format!("failed to build object from entry: {e}")))
}

fn parse_meta(envelope: &JsonValue) -> Result<Meta> {
    let section = envelope
        .get("meta")
        .ok_or_else(|| Error::malformed("missing meta section"))?;
    serde_json::from_value(section.clone())
        .map_err(|e| Error::malformed(format!("invalid meta section: {e}")))
}
