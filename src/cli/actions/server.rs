use crate::{api, cli::telemetry, strapi::StrapiClient};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Args {
    pub port: u16,
    pub api_url: String,
    pub upstream_timeout: Duration,
    pub frontend_url: String,
}

/// Run the proxy until shutdown, then flush spans.
///
/// # Errors
/// Returns an error if the upstream client cannot be built or the server fails.
pub async fn execute(args: Args) -> Result<()> {
    let strapi = StrapiClient::new(&args.api_url, args.upstream_timeout)
        .with_context(|| format!("Failed to configure upstream client for {}", args.api_url))?;

    info!(
        "Starting djevents {} ({})",
        env!("CARGO_PKG_VERSION"),
        crate::GIT_COMMIT_HASH
    );

    let result = api::new(args.port, strapi, &args.frontend_url).await;

    telemetry::shutdown_tracer();

    result
}
