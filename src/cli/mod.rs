//! CLI module
//!
//! Command-line interface over a catalog of endpoint configurations.
//!
//! # Commands
//!
//! - `validate` - Parse and validate a catalog file
//! - `endpoints` - List endpoints in the catalog
//! - `call` - Bind and invoke an endpoint, printing JSON

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
