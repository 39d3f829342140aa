//! Method factory
//!
//! Turns an `EndpointConfig` into a bound, callable method. Each
//! invocation binds arguments, resolves the path template, asks the
//! executor to prepare the signed request, and either performs one
//! request/decode cycle or hands back a lazy pager.

use crate::config::EndpointConfig;
use crate::envelope::{decode_response, PageInfo, Payload};
use crate::error::Result;
use crate::http::{ApiClient, PreparedRequest};
use crate::pagination::Pager;
use crate::params::{self, BindSpec, CallArgs, ParamValue};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Default hard cap on pages fetched per pager run
pub const DEFAULT_MAX_PAGES: usize = 3;

// ============================================================================
// Call Options
// ============================================================================

/// Recognized per-call control options.
///
/// The remaining dynamic switches of the binding surface map to
/// method and type choice: generator mode is [`BoundMethod::pages`],
/// raw JSON mode is `BoundMethod<serde_json::Value>`.
#[derive(Debug, Clone)]
pub struct CallOptions {
    /// Emit the endpoint's domain cursor (`next_<pagination_key>`)
    /// instead of the generic URL cursor
    pub return_pagination_id: bool,
    /// Hard cap on pages fetched per pager run
    pub max_pages: usize,
    /// Seed value for the cursor parameter
    pub pagination_id: Option<ParamValue>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            return_pagination_id: false,
            max_pages: DEFAULT_MAX_PAGES,
            pagination_id: None,
        }
    }
}

impl CallOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the domain cursor instead of the URL cursor
    #[must_use]
    pub fn return_pagination_id(mut self) -> Self {
        self.return_pagination_id = true;
        self
    }

    /// Set the page cap
    #[must_use]
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Seed the cursor parameter
    #[must_use]
    pub fn pagination_id(mut self, seed: impl Into<ParamValue>) -> Self {
        self.pagination_id = Some(seed.into());
        self
    }
}

// ============================================================================
// Bound Method
// ============================================================================

/// Result of a single bound-method invocation
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded payload
    pub payload: Payload<T>,
    /// Continuation cursor, present only for paginated endpoints
    pub next_cursor: Option<JsonValue>,
}

/// A callable produced from an `EndpointConfig`.
///
/// `T` is the domain object type built from each payload entry; use
/// `serde_json::Value` to skip object construction.
pub struct BoundMethod<T = JsonValue> {
    config: Arc<EndpointConfig>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for BoundMethod<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for BoundMethod<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundMethod")
            .field("path", &self.config.path)
            .field("method", &self.config.method)
            .finish_non_exhaustive()
    }
}

/// Produce a bound method from an endpoint configuration
pub fn bind_method<T: DeserializeOwned>(config: EndpointConfig) -> BoundMethod<T> {
    BoundMethod::new(config)
}

impl<T: DeserializeOwned> BoundMethod<T> {
    /// Create a bound method from an endpoint configuration
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            config: Arc::new(config),
            _marker: PhantomData,
        }
    }

    /// The endpoint configuration behind this method
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// The cursor key emitted for continuation under these options
    fn effective_cursor_key(&self, options: &CallOptions) -> &str {
        if options.return_pagination_id {
            &self.config.pagination_key
        } else {
            "url"
        }
    }

    /// Bind arguments, resolve the path, and prepare the request.
    /// Performs no I/O; every failure here is raised before a request
    /// exists.
    fn prepare(
        &self,
        api: &ApiClient,
        args: &CallArgs,
        options: &CallOptions,
    ) -> Result<PreparedRequest> {
        let spec = BindSpec {
            accepted: &self.config.accepts_parameters,
            requires_target_user: self.config.requires_target_user,
            paginates: self.config.paginates,
            cursor_key: self.effective_cursor_key(options),
        };
        let mut parameters = params::bind(&spec, args, options.pagination_id.as_ref())?;
        let path = crate::path::resolve(&self.config.path, &mut parameters, api.format())?;
        debug!(%path, parameters = parameters.len(), "bound invocation");

        api.executor()
            .prepare(self.config.method, &path, &parameters, self.config.include_secret)
    }

    /// Invoke the method once with default options
    pub async fn call(&self, api: &ApiClient, args: &CallArgs) -> Result<ApiResponse<T>> {
        self.call_with(api, args, &CallOptions::default()).await
    }

    /// Invoke the method once: exactly one request/decode cycle
    pub async fn call_with(
        &self,
        api: &ApiClient,
        args: &CallArgs,
        options: &CallOptions,
    ) -> Result<ApiResponse<T>> {
        let request = self.prepare(api, args, options)?;
        let response = api.executor().execute(&request).await?;
        let (payload, pagination) = decode_response(
            response.status,
            &response.body,
            self.config.response_shape,
            self.config.objectify_response,
        )?;

        let next_cursor = self.continuation_cursor(&pagination, options);
        Ok(ApiResponse {
            payload,
            next_cursor,
        })
    }

    /// Build the lazy page sequence. No network I/O happens until the
    /// first pull.
    pub fn pages<'a>(
        &self,
        api: &'a ApiClient,
        args: &CallArgs,
        options: &CallOptions,
    ) -> Result<Pager<'a, T>> {
        let request = self.prepare(api, args, options)?;
        Ok(Pager::new(
            api,
            request,
            self.config.response_shape,
            self.config.objectify_response,
            self.effective_cursor_key(options).to_string(),
            options.max_pages,
        ))
    }

    fn continuation_cursor(
        &self,
        pagination: &PageInfo,
        options: &CallOptions,
    ) -> Option<JsonValue> {
        if self.config.paginates {
            pagination.next_cursor(self.effective_cursor_key(options))
        } else {
            None
        }
    }
}
