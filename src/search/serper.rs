//! Serper shopping search provider
//!
//! Calls the Serper Google Shopping API (https://serper.dev) with the locale
//! pinned to India. One POST per comparison.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{RawProduct, SearchError, ShoppingSearch};

/// Endpoint for Google Shopping queries
const SHOPPING_ENDPOINT: &str = "https://google.serper.dev/shopping";

/// Hard cap on one provider round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Country and language hints sent with every query
const COUNTRY: &str = "in";
const LANGUAGE: &str = "en";

/// Serper-backed shopping search
pub struct SerperClient {
    client: Client,
    api_key: Option<String>,
}

/// Top-level Serper shopping response
#[derive(Debug, Deserialize)]
struct ShoppingResponse {
    #[serde(default)]
    shopping: Vec<RawProduct>,
}

impl SerperClient {
    /// Create a new Serper client
    ///
    /// A `None` API key yields a permanently disabled client whose searches
    /// fail with [`SearchError::NotConfigured`].
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .user_agent("price-compare-mcp/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }
}

#[async_trait]
impl ShoppingSearch for SerperClient {
    fn name(&self) -> &str {
        "serper"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, query: &str) -> Result<Vec<RawProduct>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::NotConfigured)?;

        let body = serde_json::json!({
            "q": query,
            "gl": COUNTRY,
            "hl": LANGUAGE,
        });

        let response = self
            .client
            .post(SHOPPING_ENDPOINT)
            .header("X-API-KEY", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let decoded: ShoppingResponse = response.json().await?;
        tracing::debug!("serper returned {} shopping results for '{}'", decoded.shopping.len(), query);

        Ok(decoded.shopping)
    }
}
