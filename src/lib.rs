//! Price Comparison MCP Library
//!
//! Compares product prices across Amazon and Indian quick-commerce platforms
//! (Blinkit, Zepto, Swiggy Instamart, JioMart, BigBasket): one Google
//! Shopping search via Serper, then a pure filtering and ranking pipeline.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use price_compare_mcp::{Config, PriceCompareMcpServer, SerperClient};
//!
//! let config = Config::from_env();
//! let search = Arc::new(SerperClient::new(config.serper_api_key.clone()));
//! let server = PriceCompareMcpServer::new(search, config);
//! // Serve via stdio or mount over streamable HTTP
//! ```
//!
//! - Queries are normalized (filler phrases stripped, pack size extracted)
//! - Offers are resolved against a closed platform allow-list
//! - Variant and quantity filters narrow but never empty the result set

pub mod config;
pub mod pipeline;
pub mod search;
pub mod server;
pub mod types;
pub mod web;

// Re-export the main entry points
pub use config::Config;
pub use search::serper::SerperClient;
pub use server::PriceCompareMcpServer;
pub use types::{Platform, PriceComparisonResult, PriceResult};
