//! HTTP serving: health endpoints plus the MCP mount
//!
//! Hosting platforms probe `GET /` and `GET /validate` for liveness while
//! MCP clients speak streamable HTTP under `/mcp`, all on one port.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use serde::Serialize;

use crate::config::Config;
use crate::server::PriceCompareMcpServer;

const SERVICE_NAME: &str = "Price Comparison MCP Server";

/// Health endpoint payload
#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: String,
    auth_configured: bool,
    search_enabled: bool,
}

/// Root endpoint payload, points probes at the real endpoints
#[derive(Debug, Clone, Serialize)]
struct RootResponse {
    message: &'static str,
    status: &'static str,
    mcp_endpoint: &'static str,
    health_check: &'static str,
    timestamp: String,
}

/// Static facts the health endpoints report
#[derive(Clone)]
struct AppState {
    auth_configured: bool,
    search_enabled: bool,
}

/// Serve the health routes and the MCP service on `0.0.0.0:<port>`
///
/// Runs until the process is stopped.
pub async fn serve(config: &Config, server: PriceCompareMcpServer) -> Result<()> {
    let state = AppState {
        auth_configured: config.auth_configured(),
        search_enabled: server.search_available(),
    };

    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let app = Router::new()
        .route("/", get(root))
        .route("/validate", get(health_check))
        .nest_service("/mcp", mcp_service)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Health checks on http://{}/validate, MCP endpoint at http://{}/mcp", addr, addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Liveness endpoint the deployment platform polls
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Utc::now().to_rfc3339(),
        auth_configured: state.auth_configured,
        search_enabled: state.search_enabled,
    })
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_NAME,
        status: "running",
        mcp_endpoint: "/mcp",
        health_check: "/validate",
        timestamp: Utc::now().to_rfc3339(),
    })
}
