//! # apibind
//!
//! A declarative REST API method binder. Given an endpoint
//! configuration (path template, HTTP method, accepted parameters,
//! pagination behavior, response shape), apibind produces a bound
//! method that validates arguments, builds the request, executes it,
//! and decodes the JSON envelope into typed objects or raw data,
//! optionally as a bounded lazy page sequence.
//!
//! ## Features
//!
//! - **Argument binding**: positional/keyword arguments mapped onto a
//!   named parameter set with arity and conflict checks
//! - **Path templating**: `{name}` tokens substituted and consumed
//!   from the bound parameters
//! - **Envelope decoding**: `meta`/`data`/`pagination` interpretation
//!   with typed error surfacing
//! - **Cursor pagination**: pull-based lazy page sequence, bounded by
//!   a per-call page cap
//! - **YAML catalogs**: endpoint registries loaded from declarative
//!   files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use apibind::{bind_method, ApiClient, CallArgs, EndpointConfig, HttpConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = ApiClient::new(
//!         HttpConfig::builder()
//!             .base_url("https://api.example.com/v1")
//!             .access_token("...")
//!             .build(),
//!     );
//!
//!     let config = EndpointConfig::new("users/{user_id}/media/recent")
//!         .accepts_parameters(["user_id", "count", "max_id", "min_id"])
//!         .paginates();
//!     let recent_media = bind_method::<serde_json::Value>(config);
//!
//!     // One request/decode cycle
//!     let response = recent_media.call(&api, &CallArgs::new().kw("count", 10)).await?;
//!
//!     // Or a lazy page sequence
//!     let mut pager = recent_media.pages(&api, &CallArgs::new(), &Default::default())?;
//!     while let Some(page) = pager.next_page().await? {
//!         // Process page.payload
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Method Factory                           │
//! │  bind_method(config) → BoundMethod: call() / pages()            │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Params  │   Path    │   Executor    │  Envelope │  Pagination │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Arity    │ {tokens}  │ prepare       │ meta gate │ Ready/Done  │
//! │ Conflict │ Escaping  │ execute       │ Payload   │ next_url    │
//! │ Defaults │ Suffix    │ Credentials   │ PageInfo  │ max_pages   │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Parameter binding
pub mod params;

/// Path template resolution
pub mod path;

/// Response envelope decoding
pub mod envelope;

/// HTTP executor boundary
pub mod http;

/// Pagination driver
pub mod pagination;

/// Endpoint configuration
pub mod config;

/// Method factory
pub mod method;

/// Endpoint catalog loader
pub mod loader;

/// Built-in catalog definitions
pub mod catalogs;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::EndpointConfig;
pub use envelope::{PageInfo, Payload};
pub use http::{ApiClient, HttpConfig, HttpExecutor, PreparedRequest, RawResponse, RequestExecutor};
pub use loader::{load_catalog, load_catalog_from_str, Catalog};
pub use method::{bind_method, ApiResponse, BoundMethod, CallOptions, DEFAULT_MAX_PAGES};
pub use pagination::{Page, Pager};
pub use params::{CallArgs, ParamValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
