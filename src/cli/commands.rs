//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// apibind — declarative REST API method binder
#[derive(Parser, Debug)]
#[command(name = "apibind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Endpoint catalog: YAML file path or built-in name
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a catalog definition
    Validate,

    /// List endpoints in the catalog
    Endpoints,

    /// Invoke an endpoint and print the decoded payload as JSON
    Call {
        /// Endpoint name from the catalog
        endpoint: String,

        /// Request parameter as name=value (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// OAuth access token, sent as a query parameter
        #[arg(long)]
        access_token: Option<String>,

        /// Client id credential
        #[arg(long)]
        client_id: Option<String>,

        /// Client secret credential (for endpoints that require it)
        #[arg(long)]
        client_secret: Option<String>,

        /// Follow pagination and print every page
        #[arg(long)]
        follow: bool,

        /// Hard cap on pages fetched with --follow
        #[arg(long, default_value_t = 3)]
        max_pages: usize,

        /// Emit the endpoint's domain cursor instead of the URL cursor
        #[arg(long)]
        return_pagination_id: bool,

        /// Seed value for the cursor parameter
        #[arg(long)]
        pagination_id: Option<String>,
    },
}
