//! CLI command implementations.

pub mod catalog;
pub mod orders;

use std::env;

use thiserror::Error;
use url::Url;

use sphaerostyle_admin::backend::BackendClient;

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid BACKEND_API_URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Backend(#[from] sphaerostyle_admin::backend::BackendError),
}

/// Build a backend client from `BACKEND_API_URL`.
pub fn client() -> Result<BackendClient, CliError> {
    let _ = dotenvy::dotenv();
    let base_url = env::var("BACKEND_API_URL")
        .map_err(|_| CliError::MissingEnvVar("BACKEND_API_URL"))?
        .parse::<Url>()?;
    Ok(BackendClient::new(&base_url))
}

/// Read the staff bearer token for authenticated commands.
pub fn staff_token() -> Result<String, CliError> {
    env::var("STAFF_BEARER_TOKEN").map_err(|_| CliError::MissingEnvVar("STAFF_BEARER_TOKEN"))
}

/// Check that the commerce backend is reachable.
#[allow(clippy::print_stdout)]
pub async fn health() -> Result<(), CliError> {
    let client = client()?;
    let products = client.products().await?;
    println!("backend reachable ({} products)", products.len());
    Ok(())
}
