//! Shopping search providers
//!
//! This module provides a trait-based abstraction over shopping search
//! providers. Currently supports Serper (Google Shopping API).

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod serper;

/// Errors a provider call can surface
///
/// The comparison pipeline downgrades every one of these to an empty result
/// set; the typed variants exist so the cause stays visible in the logs.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API key is configured, so the search capability is disabled
    #[error("shopping search is not configured (missing API key)")]
    NotConfigured,

    /// Transport failure: connect error, timeout, or an undecodable body
    #[error("shopping search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("shopping search returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// One raw record from a shopping search response
///
/// Field names vary between provider payloads, so every field is defaulted
/// and the serde aliases absorb the known alternative spellings. Records
/// that are missing fields entirely still decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    /// Product title
    #[serde(default, alias = "name")]
    pub title: String,
    /// Price text, e.g. "₹1,999.00"
    #[serde(default, alias = "priceText")]
    pub price: Option<String>,
    /// Primary link for the offer
    #[serde(default, alias = "url")]
    pub link: Option<String>,
    /// Secondary product link some payloads carry
    #[serde(default, alias = "productLink")]
    pub product_link: Option<String>,
    /// Merchant name as reported by the provider
    #[serde(default, alias = "merchant", alias = "seller")]
    pub source: Option<String>,
    /// Delivery hint, e.g. "Free delivery"
    #[serde(default)]
    pub delivery: Option<String>,
    /// Nested per-seller entries some records carry instead of top-level fields
    #[serde(default, alias = "offers")]
    pub sellers: Option<Vec<RawSeller>>,
}

/// A nested seller entry inside a raw product record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeller {
    /// Seller name
    #[serde(default, alias = "seller")]
    pub name: Option<String>,
    /// Seller-specific product link
    #[serde(default, alias = "url")]
    pub link: Option<String>,
    /// Seller-specific price text
    #[serde(default)]
    pub price: Option<String>,
}

/// Trait for shopping search providers
///
/// The pipeline only ever sees this interface, which keeps query handling
/// and ranking testable without network access.
#[async_trait]
pub trait ShoppingSearch: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Check if this provider is configured and available
    fn is_available(&self) -> bool;

    /// Run one shopping search for an already-normalized query
    async fn search(&self, query: &str) -> Result<Vec<RawProduct>, SearchError>;
}
