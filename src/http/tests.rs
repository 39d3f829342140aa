//! Tests for the HTTP executor

use super::*;
use crate::types::{Method, ParamMap};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params(pairs: &[(&str, &str)]) -> ParamMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.as_bytes().to_vec()))
        .collect()
}

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_empty());
    assert!(config.access_token.is_none());
    assert!(config.user_agent.starts_with("apibind/"));
}

#[test]
fn test_http_config_builder() {
    let config = HttpConfig::builder()
        .base_url("https://api.example.com/v1")
        .access_token("token-123")
        .client_id("client-abc")
        .client_secret("hush")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://api.example.com/v1");
    assert_eq!(config.access_token, Some("token-123".to_string()));
    assert_eq!(config.client_id, Some("client-abc".to_string()));
    assert_eq!(config.client_secret, Some("hush".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_prepare_get_puts_parameters_in_query() {
    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url("https://api.example.com/v1")
            .build(),
    );

    let request = executor
        .prepare(
            Method::GET,
            "users/self/media/recent.json",
            &params(&[("count", "10")]),
            false,
        )
        .unwrap();

    assert_eq!(request.method, Method::GET);
    assert!(request.body.is_none());

    let url = Url::parse(&request.url).unwrap();
    assert_eq!(url.path(), "/v1/users/self/media/recent.json");
    let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert!(query.contains(&("count".to_string(), "10".to_string())));
}

#[test]
fn test_prepare_attaches_credentials() {
    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url("https://api.example.com/v1")
            .access_token("token-123")
            .client_id("client-abc")
            .build(),
    );

    let request = executor
        .prepare(Method::GET, "media/popular.json", &ParamMap::new(), false)
        .unwrap();

    let url = Url::parse(&request.url).unwrap();
    let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert!(query.contains(&("access_token".to_string(), "token-123".to_string())));
    assert!(query.contains(&("client_id".to_string(), "client-abc".to_string())));
    assert!(!query.iter().any(|(k, _)| k == "client_secret"));
}

#[test]
fn test_prepare_include_secret() {
    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url("https://api.example.com/v1")
            .client_secret("hush")
            .build(),
    );

    let request = executor
        .prepare(Method::POST, "media/1/likes.json", &ParamMap::new(), true)
        .unwrap();

    let url = Url::parse(&request.url).unwrap();
    let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert!(query.contains(&("client_secret".to_string(), "hush".to_string())));
}

#[test]
fn test_prepare_include_secret_without_secret_fails() {
    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url("https://api.example.com/v1")
            .build(),
    );

    let err = executor
        .prepare(Method::POST, "media/1/likes.json", &ParamMap::new(), true)
        .unwrap_err();
    assert!(matches!(
        err,
        crate::error::Error::MissingConfigField { .. }
    ));
}

#[test]
fn test_prepare_post_puts_parameters_in_body() {
    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url("https://api.example.com/v1")
            .build(),
    );

    let request = executor
        .prepare(
            Method::POST,
            "media/1/comments.json",
            &params(&[("text", "nice shot")]),
            false,
        )
        .unwrap();

    let body = request.body.unwrap();
    assert_eq!(body, "text=nice+shot");
    assert_eq!(
        request.headers.get("Content-Type"),
        Some(&"application/x-www-form-urlencoded".to_string())
    );

    // Parameters must not leak into the query string
    let url = Url::parse(&request.url).unwrap();
    assert!(url.query().is_none());
}

#[test]
fn test_prepare_no_parameters_leaves_query_clean() {
    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url("https://api.example.com/v1")
            .build(),
    );

    let request = executor
        .prepare(Method::GET, "media/popular.json", &ParamMap::new(), false)
        .unwrap();
    assert_eq!(request.url, "https://api.example.com/v1/media/popular.json");
}

#[test]
fn test_prepare_accepts_absolute_url() {
    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url("https://api.example.com/v1")
            .build(),
    );

    let request = executor
        .prepare(
            Method::GET,
            "https://other.example.com/next-page.json",
            &ParamMap::new(),
            false,
        )
        .unwrap();
    assert_eq!(request.url, "https://other.example.com/next-page.json");
}

#[tokio::test]
async fn test_execute_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/media/popular.json"))
        .and(query_param("access_token", "token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"code": 200},
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url(format!("{}/v1", mock_server.uri()))
            .access_token("token-123")
            .build(),
    );

    let request = executor
        .prepare(Method::GET, "media/popular.json", &ParamMap::new(), false)
        .unwrap();
    let response = executor.execute(&request).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.contains("\"code\":200"));
}

#[tokio::test]
async fn test_execute_post_sends_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/media/1/comments.json"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("text=hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"code": 200},
            "data": null
        })))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url(format!("{}/v1", mock_server.uri()))
            .build(),
    );

    let request = executor
        .prepare(
            Method::POST,
            "media/1/comments.json",
            &params(&[("text", "hello")]),
            false,
        )
        .unwrap();
    let response = executor.execute(&request).await.unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_execute_reports_transport_status_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/media/popular.json"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::new(
        HttpConfig::builder()
            .base_url(format!("{}/v1", mock_server.uri()))
            .build(),
    );

    let request = executor
        .prepare(Method::GET, "media/popular.json", &ParamMap::new(), false)
        .unwrap();
    let response = executor.execute(&request).await.unwrap();

    // No interpretation at this layer
    assert_eq!(response.status, 429);
    assert_eq!(response.body, "slow down");
}

#[test]
fn test_api_client_format() {
    let client = ApiClient::new(HttpConfig::default());
    assert_eq!(client.format(), "json");

    let client = client.with_format("xml");
    assert_eq!(client.format(), "xml");
}

#[test]
fn test_debug_impls() {
    let executor = HttpExecutor::new(HttpConfig::default());
    assert!(format!("{executor:?}").contains("HttpExecutor"));

    let client = ApiClient::new(HttpConfig::default());
    assert!(format!("{client:?}").contains("ApiClient"));
}
