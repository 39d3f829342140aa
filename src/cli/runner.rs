//! CLI command execution

use super::commands::{Cli, Commands};
use crate::catalogs;
use crate::error::{Error, Result};
use crate::http::{ApiClient, HttpConfig};
use crate::loader::{self, Catalog};
use crate::method::{BoundMethod, CallOptions};
use crate::params::CallArgs;
use crate::types::JsonValue;
use serde_json::json;
use tracing::info;

/// Executes parsed CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Validate => self.validate(),
            Commands::Endpoints => self.endpoints(),
            Commands::Call {
                endpoint,
                params,
                access_token,
                client_id,
                client_secret,
                follow,
                max_pages,
                return_pagination_id,
                pagination_id,
            } => {
                self.call(
                    endpoint,
                    params,
                    access_token.as_deref(),
                    client_id.as_deref(),
                    client_secret.as_deref(),
                    *follow,
                    *max_pages,
                    *return_pagination_id,
                    pagination_id.as_deref(),
                )
                .await
            }
        }
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let path = self
            .cli
            .catalog
            .as_ref()
            .ok_or_else(|| Error::config("no catalog given (use --catalog)"))?;

        if path.exists() {
            return loader::load_catalog(path);
        }
        // Fall back to built-in catalogs by name
        if let Some(name) = path.to_str() {
            if let Some(raw) = catalogs::builtin(name) {
                return loader::load_catalog_from_str(raw);
            }
        }
        Err(Error::config(format!(
            "catalog '{}' is neither a file nor one of the built-ins ({})",
            path.display(),
            catalogs::builtin_names().join(", ")
        )))
    }

    fn validate(&self) -> Result<()> {
        let catalog = self.load_catalog()?;
        println!(
            "Catalog '{}' is valid ({} endpoints)",
            catalog.name(),
            catalog.endpoint_names().len()
        );
        Ok(())
    }

    fn endpoints(&self) -> Result<()> {
        let catalog = self.load_catalog()?;
        for name in catalog.endpoint_names() {
            let config = catalog.endpoint(name)?;
            let paginated = if config.paginates { " [paginated]" } else { "" };
            println!("{name}  {} {}{paginated}", config.method, config.path);
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    async fn call(
        &self,
        endpoint: &str,
        params: &[String],
        access_token: Option<&str>,
        client_id: Option<&str>,
        client_secret: Option<&str>,
        follow: bool,
        max_pages: usize,
        return_pagination_id: bool,
        pagination_id: Option<&str>,
    ) -> Result<()> {
        let catalog = self.load_catalog()?;
        let api = build_client(&catalog, access_token, client_id, client_secret);
        let method: BoundMethod<JsonValue> = catalog.bind(endpoint)?;

        let args = parse_params(params)?;
        let mut options = CallOptions::new().max_pages(max_pages);
        if return_pagination_id {
            options = options.return_pagination_id();
        }
        if let Some(seed) = pagination_id {
            options = options.pagination_id(seed);
        }

        if follow {
            let mut pager = method.pages(&api, &args, &options)?;
            while let Some(page) = pager.next_page().await? {
                print_json(&json!({
                    "payload": page.payload.into_value(),
                    "next_cursor": page.next_cursor,
                }))?;
            }
            info!(pages = pager.pages_read(), "pagination run complete");
        } else {
            let response = method.call_with(&api, &args, &options).await?;
            print_json(&json!({
                "payload": response.payload.into_value(),
                "next_cursor": response.next_cursor,
            }))?;
        }

        Ok(())
    }
}

fn build_client(
    catalog: &Catalog,
    access_token: Option<&str>,
    client_id: Option<&str>,
    client_secret: Option<&str>,
) -> ApiClient {
    let mut builder = HttpConfig::builder().base_url(catalog.base_url());
    for (key, value) in catalog.headers() {
        builder = builder.header(key, value);
    }
    if let Some(token) = access_token {
        builder = builder.access_token(token);
    }
    if let Some(id) = client_id {
        builder = builder.client_id(id);
    }
    if let Some(secret) = client_secret {
        builder = builder.client_secret(secret);
    }

    ApiClient::new(builder.build()).with_format(catalog.format())
}

fn parse_params(params: &[String]) -> Result<CallArgs> {
    let mut args = CallArgs::new();
    for param in params {
        let (name, value) = param
            .split_once('=')
            .ok_or_else(|| Error::config(format!("invalid parameter '{param}', expected NAME=VALUE")))?;
        args = args.kw(name, value);
    }
    Ok(args)
}

fn print_json(value: &JsonValue) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Other(format!("failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let args = parse_params(&["count=10".to_string(), "max_id=m3".to_string()]).unwrap();
        assert!(!args.is_empty());
    }

    #[test]
    fn test_parse_params_allows_equals_in_value() {
        let args = parse_params(&["q=a=b".to_string()]).unwrap();
        assert!(!args.is_empty());
    }

    #[test]
    fn test_parse_params_rejects_bare_name() {
        let err = parse_params(&["count".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
