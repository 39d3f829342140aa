//! HTTP executor boundary
//!
//! Request preparation and dispatch behind the `RequestExecutor` trait,
//! with a reqwest-backed implementation.

mod client;

#[cfg(test)]
mod tests;

pub use client::{
    ApiClient, HttpConfig, HttpConfigBuilder, HttpExecutor, PreparedRequest, RawResponse,
    RequestExecutor,
};
