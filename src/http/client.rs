//! Request execution
//!
//! The `RequestExecutor` boundary owns request preparation (URL, query
//! string, body, credentials) and dispatch. `HttpExecutor` is the
//! reqwest-backed implementation; tests substitute their own executor
//! behind the trait.

use crate::error::{Error, Result};
use crate::types::{Method, ParamMap, StringMap};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

// ============================================================================
// Executor Boundary
// ============================================================================

/// A fully prepared request, ready for dispatch
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Absolute URL including query parameters
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Form-encoded body for methods that carry one
    pub body: Option<String>,
    /// Request headers
    pub headers: StringMap,
}

/// Raw transport response: status code and body text
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Prepares and dispatches signed requests.
///
/// `prepare` performs no I/O; `execute` performs exactly one blocking
/// round trip and reports the transport status verbatim, leaving all
/// interpretation to the response decoder.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Build the URL, body, and headers for one request
    fn prepare(
        &self,
        method: Method,
        path: &str,
        parameters: &ParamMap,
        include_secret: bool,
    ) -> Result<PreparedRequest>;

    /// Dispatch a prepared request
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse>;
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// Configuration for the reqwest-backed executor
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL prepended to every resolved path
    pub base_url: String,
    /// OAuth access token, sent as a query parameter
    pub access_token: Option<String>,
    /// Client id credential, sent as a query parameter
    pub client_id: Option<String>,
    /// Client secret, sent only for endpoints that require it
    pub client_secret: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            access_token: None,
            client_id: None,
            client_secret: None,
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("apibind/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// Create a new config builder
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

/// Builder for HTTP executor config
#[derive(Default)]
pub struct HttpConfigBuilder {
    config: HttpConfig,
}

impl HttpConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    /// Set the client id credential
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.config.client_id = Some(id.into());
        self
    }

    /// Set the client secret credential
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.client_secret = Some(secret.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpConfig {
        self.config
    }
}

// ============================================================================
// Reqwest Executor
// ============================================================================

/// Reqwest-backed request executor
pub struct HttpExecutor {
    client: reqwest::Client,
    config: HttpConfig,
}

impl HttpExecutor {
    /// Create a new executor from configuration
    pub fn new(config: HttpConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Join the base URL and a resolved path
    fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Credential query pairs for one request
    fn credential_pairs(&self, include_secret: bool) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        if let Some(token) = &self.config.access_token {
            pairs.push(("access_token".to_string(), token.clone()));
        }
        if let Some(id) = &self.config.client_id {
            pairs.push(("client_id".to_string(), id.clone()));
        }
        if include_secret {
            let secret = self
                .config
                .client_secret
                .as_ref()
                .ok_or_else(|| Error::missing_field("client_secret"))?;
            pairs.push(("client_secret".to_string(), secret.clone()));
        }
        Ok(pairs)
    }
}

impl std::fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("base_url", &self.config.base_url)
            .field("has_access_token", &self.config.access_token.is_some())
            .field("has_client_secret", &self.config.client_secret.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    fn prepare(
        &self,
        method: Method,
        path: &str,
        parameters: &ParamMap,
        include_secret: bool,
    ) -> Result<PreparedRequest> {
        let mut url = self.build_url(path)?;

        let mut query_pairs = self.credential_pairs(include_secret)?;
        if !method.carries_body() {
            for (name, value) in parameters {
                query_pairs.push((name.clone(), String::from_utf8_lossy(value).into_owned()));
            }
        }
        if !query_pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in &query_pairs {
                query.append_pair(name, value);
            }
        }

        let body = if method.carries_body() {
            let mut form = url::form_urlencoded::Serializer::new(String::new());
            for (name, value) in parameters {
                form.append_pair(name, &String::from_utf8_lossy(value));
            }
            Some(form.finish())
        } else {
            None
        };

        let mut headers = self.config.default_headers.clone();
        if body.is_some() {
            headers.insert(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            );
        }

        Ok(PreparedRequest {
            url: url.to_string(),
            method,
            body,
            headers,
        })
    }

    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse> {
        debug!("{} {}", request.method, request.url);

        let mut req = self.client.request(request.method.into(), &request.url);
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// API Client
// ============================================================================

/// The handle bound methods are invoked against: an executor plus the
/// response format suffix appended to every resolved path.
#[derive(Clone)]
pub struct ApiClient {
    executor: Arc<dyn RequestExecutor>,
    format: String,
}

impl ApiClient {
    /// Create a client backed by the reqwest executor
    pub fn new(config: HttpConfig) -> Self {
        Self::with_executor(Arc::new(HttpExecutor::new(config)))
    }

    /// Create a client with a custom executor
    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            executor,
            format: "json".to_string(),
        }
    }

    /// Override the response format suffix
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Response format suffix
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The underlying request executor
    pub fn executor(&self) -> &dyn RequestExecutor {
        self.executor.as_ref()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
