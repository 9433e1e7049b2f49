//! Price Comparison MCP Server
//!
//! Compares product prices across Amazon and Indian quick-commerce platforms
//! via the Serper Google Shopping API.
//!
//! # Configuration
//! Set `SERPER_API_KEY`, `AUTH_TOKEN`, `MY_NUMBER` and optionally `PORT`
//! (default 8080). Serves health endpoints plus MCP over streamable HTTP;
//! set `MCP_TRANSPORT=stdio` to speak MCP over stdio instead.

use std::sync::Arc;

use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use price_compare_mcp::{web, Config, PriceCompareMcpServer, SerperClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    tracing::info!("Starting Price Comparison MCP Server");

    let config = Config::from_env();
    if config.serper_api_key.is_none() {
        tracing::warn!("SERPER_API_KEY is not set; comparisons will return no results");
    }
    if !config.auth_configured() {
        tracing::warn!("AUTH_TOKEN or MY_NUMBER is not set; the validate tool will fail");
    }

    let search = Arc::new(SerperClient::new(config.serper_api_key.clone()));
    let server = PriceCompareMcpServer::new(search, config.clone());

    if config.stdio_transport {
        let service = server.serve(stdio()).await?;

        tracing::info!("Server running on stdio, waiting for requests...");
        service.waiting().await?;

        tracing::info!("Server shutting down");
        return Ok(());
    }

    web::serve(&config, server).await
}

/// Initialize tracing to stderr (stdout is reserved for MCP protocol on
/// stdio), with environment-based filtering via RUST_LOG
///
/// Set `LOG_FORMAT=json` for structured JSON output.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("price_compare_mcp=info".parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}
