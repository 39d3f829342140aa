//! Tests for response decoding

use super::*;
use crate::types::{JsonValue, ResponseShape};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Media {
    id: String,
    caption: Option<String>,
}

fn list_body() -> String {
    json!({
        "meta": {"code": 200},
        "data": [
            {"id": "m1", "caption": "first"},
            {"id": "m2", "caption": null},
            {"id": "m3", "caption": "third"}
        ],
        "pagination": {
            "next_url": "https://api.example.com/v1/users/self/media/recent.json?max_id=m3",
            "next_max_id": "m3"
        }
    })
    .to_string()
}

#[test]
fn test_list_decode_preserves_length_and_order() {
    let (payload, _) =
        decode_response::<Media>(200, &list_body(), ResponseShape::List, true).unwrap();

    let items = payload.into_list();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, "m1");
    assert_eq!(items[1].id, "m2");
    assert_eq!(items[2].id, "m3");
}

#[test]
fn test_list_decode_raw_values() {
    let (payload, _) =
        decode_response::<JsonValue>(200, &list_body(), ResponseShape::List, true).unwrap();

    let items = payload.as_list().unwrap();
    assert_eq!(items[0]["id"], "m1");
}

#[test]
fn test_pagination_section_extracted() {
    let (_, pagination) =
        decode_response::<Media>(200, &list_body(), ResponseShape::List, true).unwrap();

    assert_eq!(
        pagination.next_url.as_deref(),
        Some("https://api.example.com/v1/users/self/media/recent.json?max_id=m3")
    );
    assert_eq!(pagination.next_cursor("max_id"), Some(json!("m3")));
    assert_eq!(
        pagination.next_cursor("url"),
        Some(json!(
            "https://api.example.com/v1/users/self/media/recent.json?max_id=m3"
        ))
    );
    assert_eq!(pagination.next_cursor("cursor"), None);
}

#[test]
fn test_pagination_absent_yields_empty_section() {
    let body = json!({"meta": {"code": 200}, "data": []}).to_string();
    let (_, pagination) =
        decode_response::<Media>(200, &body, ResponseShape::List, true).unwrap();

    assert!(pagination.is_empty());
    assert_eq!(pagination.next_cursor("url"), None);
}

#[test]
fn test_entry_decode() {
    let body = json!({
        "meta": {"code": 200},
        "data": {"id": "m9", "caption": "solo"}
    })
    .to_string();

    let (payload, _) = decode_response::<Media>(200, &body, ResponseShape::Entry, true).unwrap();
    let entry = payload.into_entry().unwrap();
    assert_eq!(entry.id, "m9");
}

#[test]
fn test_empty_decode() {
    let body = json!({"meta": {"code": 200}, "data": null}).to_string();
    let (payload, _) = decode_response::<Media>(200, &body, ResponseShape::Empty, true).unwrap();
    assert_eq!(payload, Payload::Empty);
    assert!(payload.is_empty());
}

#[test]
fn test_error_envelope_carries_exact_fields() {
    let body = json!({
        "meta": {
            "code": 400,
            "error_type": "APINotAllowedError",
            "error_message": "you cannot view this resource"
        }
    })
    .to_string();

    let err = decode_response::<Media>(200, &body, ResponseShape::List, true).unwrap_err();
    match err {
        Error::Api {
            status_code,
            error_type,
            error_message,
        } => {
            assert_eq!(status_code, 400);
            assert_eq!(error_type, "APINotAllowedError");
            assert_eq!(error_message, "you cannot view this resource");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_rate_limited_before_json_parse() {
    // Deliberately not JSON: the translation must happen first
    let err =
        decode_response::<Media>(429, "<html>slow down</html>", ResponseShape::List, true)
            .unwrap_err();
    match err {
        Error::Api {
            status_code,
            error_type,
            ..
        } => {
            assert_eq!(status_code, 429);
            assert_eq!(error_type, "Rate limited");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err =
        decode_response::<Media>(503, "unavailable", ResponseShape::List, true).unwrap_err();
    assert!(matches!(err, Error::Api { status_code: 503, .. }));
}

#[test]
fn test_malformed_json() {
    let err = decode_response::<Media>(200, "{not json", ResponseShape::List, true).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_missing_meta_is_malformed() {
    let body = json!({"data": []}).to_string();
    let err = decode_response::<Media>(200, &body, ResponseShape::List, true).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_verbatim_envelope_mode() {
    let (payload, pagination) =
        decode_response::<JsonValue>(200, &list_body(), ResponseShape::List, false).unwrap();

    let envelope = payload.into_entry().unwrap();
    assert_eq!(envelope["meta"]["code"], 200);
    assert_eq!(envelope["data"].as_array().unwrap().len(), 3);
    // Verbatim mode keeps the pagination data inside the envelope only
    assert!(pagination.is_empty());
    assert_eq!(envelope["pagination"]["next_max_id"], "m3");
}

#[test]
fn test_verbatim_mode_still_gates_on_meta() {
    let body = json!({
        "meta": {"code": 500, "error_type": "ServerError", "error_message": "boom"}
    })
    .to_string();

    let err = decode_response::<JsonValue>(200, &body, ResponseShape::List, false).unwrap_err();
    assert!(matches!(err, Error::Api { status_code: 500, .. }));
}

#[test]
fn test_list_shape_requires_array_data() {
    let body = json!({"meta": {"code": 200}, "data": {"id": "m1"}}).to_string();
    let err = decode_response::<Media>(200, &body, ResponseShape::List, true).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_payload_accessors() {
    let payload = Payload::List(vec![1, 2, 3]);
    assert_eq!(payload.len(), 3);
    assert_eq!(payload.as_list(), Some(&[1, 2, 3][..]));
    assert_eq!(payload.clone().into_entry(), None);
    assert_eq!(payload.into_list(), vec![1, 2, 3]);

    let entry = Payload::Entry(7);
    assert_eq!(entry.len(), 1);
    assert_eq!(entry.into_entry(), Some(7));

    let raw = Payload::List(vec![json!(1), json!(2)]);
    assert_eq!(raw.into_value(), json!([1, 2]));
    assert_eq!(Payload::Empty.into_value(), JsonValue::Null);
}
