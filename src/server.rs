//! MCP Server implementation for price comparison
//!
//! This module defines the main MCP server that exposes the price
//! comparison tools backed by a pluggable shopping search provider.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::pipeline;
use crate::search::ShoppingSearch;

/// The main Price Comparison MCP Server
#[derive(Clone)]
pub struct PriceCompareMcpServer {
    search: Arc<dyn ShoppingSearch>,
    config: Config,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ComparePricesParams {
    /// The product to compare prices for
    #[schemars(
        description = "Product to compare prices for, e.g. 'amul milk 500ml' or 'coke 1.25 l'"
    )]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct QuickPriceCheckParams {
    /// The grocery or daily-essential item to check
    #[schemars(description = "Grocery or daily essential to check, e.g. 'milk', 'bread', 'eggs'")]
    pub item: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ValidateParams {
    /// The bearer token to check
    #[schemars(description = "Bearer token to validate against the server's configured secret")]
    pub token: String,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl PriceCompareMcpServer {
    pub fn new(search: Arc<dyn ShoppingSearch>, config: Config) -> Self {
        if !search.is_available() {
            tracing::warn!(
                "Search provider '{}' is not configured; comparisons will return no results",
                search.name()
            );
        }

        Self {
            search,
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Whether the underlying search provider is usable
    pub fn search_available(&self) -> bool {
        self.search.is_available()
    }

    // ========================================================================
    // Price Tools
    // ========================================================================

    #[tool(
        description = "Compare prices for a product across Amazon and Indian quick-commerce platforms (Blinkit, Zepto, Swiggy Instamart, JioMart, BigBasket). Returns offers ranked by price plus the best deal."
    )]
    async fn compare_prices(
        &self,
        Parameters(params): Parameters<ComparePricesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Comparing prices for: {}", params.query);

        let result = pipeline::compare(self.search.as_ref(), &params.query).await;

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(
        description = "Quick price check for groceries and daily essentials on quick-commerce platforms. Same comparison as compare_prices, phrased for simple items."
    )]
    async fn quick_price_check(
        &self,
        Parameters(params): Parameters<QuickPriceCheckParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Quick price check for: {}", params.item);

        let result = pipeline::compare(self.search.as_ref(), &params.item).await;

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // ========================================================================
    // Validation Tool
    // ========================================================================

    #[tool(
        description = "Validate a bearer token against the configured secret and return the operator's phone number."
    )]
    async fn validate(
        &self,
        Parameters(params): Parameters<ValidateParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(expected) = self.config.auth_token.as_deref() else {
            return Err(McpError::internal_error("AUTH_TOKEN is not configured", None));
        };

        if params.token != expected {
            tracing::warn!("validate called with a non-matching token");
            return Err(McpError::invalid_params(
                "token does not match the configured secret",
                None,
            ));
        }

        let Some(owner) = self.config.owner_number.as_deref() else {
            return Err(McpError::internal_error("MY_NUMBER is not configured", None));
        };

        Ok(CallToolResult::success(vec![Content::text(
            normalize_owner_number(owner),
        )]))
    }
}

/// Reduce an operator identifier to bare digits, with the Indian country
/// code prepended to ten-digit numbers
pub fn normalize_owner_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if !digits.starts_with("91") && digits.len() == 10 {
        return format!("91{}", digits);
    }
    digits
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for PriceCompareMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Price Comparison MCP Server - compares product prices across \
                 Amazon and Indian quick-commerce platforms (Blinkit, Zepto, \
                 Swiggy Instamart, JioMart, BigBasket) using Google Shopping \
                 data. Free-text queries are normalized, offers are filtered \
                 to comparable pack sizes and ranked by price with a best-deal \
                 summary."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
