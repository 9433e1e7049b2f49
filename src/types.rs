//! Common types for price comparison results
//!
//! These types form the wire shape of every comparison tool response, so
//! field names and sentinel strings stay stable for MCP clients.

use serde::{Deserialize, Serialize};

/// Summary line used when the pipeline ends with no offers
pub const NOT_FOUND_SUMMARY: &str =
    "Couldn't find the requested product on online quick commerce sites";

/// Best-deal sentinel when no offer carries a parseable price
pub const BEST_DEAL_NONE: &str = "No results found";

/// Best-deal sentinel for an empty result set
pub const BEST_DEAL_UNAVAILABLE: &str = "No results available";

/// Timestamp format stamped on every offer (UTC, minute precision)
pub const FETCHED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Canonical vendor identities offers may be attributed to
///
/// The list is closed on purpose: offers from any merchant outside it are
/// dropped during platform resolution, trading raw coverage for a curated
/// set of Indian quick-commerce vendors plus Amazon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Amazon,
    Blinkit,
    Zepto,
    #[serde(rename = "Swiggy Instamart")]
    SwiggyInstamart,
    #[serde(rename = "JioMart Grocery")]
    JioMartGrocery,
    BigBasket,
}

impl Platform {
    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Blinkit => "Blinkit",
            Platform::Zepto => "Zepto",
            Platform::SwiggyInstamart => "Swiggy Instamart",
            Platform::JioMartGrocery => "JioMart Grocery",
            Platform::BigBasket => "BigBasket",
        }
    }

    /// Storefront home page, used as the last-resort offer link
    pub fn home_url(&self) -> &'static str {
        match self {
            Platform::Amazon => "https://www.amazon.in",
            Platform::Blinkit => "https://blinkit.com",
            Platform::Zepto => "https://www.zeptonow.com",
            Platform::SwiggyInstamart => "https://www.swiggy.com/instamart",
            Platform::JioMartGrocery => "https://www.jiomart.com",
            Platform::BigBasket => "https://www.bigbasket.com",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single matched vendor offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResult {
    /// The platform the offer belongs to
    pub platform: Platform,
    /// Product title as returned by the search provider
    pub title: String,
    /// Raw price text; may carry a currency symbol and separators, may be empty
    pub price: String,
    /// Best available link to the product on the vendor's site
    pub url: String,
    /// Pack size such as "500 ml" or "2 L" (if one was detected in the title)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Delivery hint reported by the provider (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,
    /// When this offer was fetched, `YYYY-MM-DD HH:MM` in UTC
    ///
    /// This is a fetch timestamp, not price history.
    pub last_updated: String,
}

/// The outcome of one comparison call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceComparisonResult {
    /// The original query, before normalization
    pub query: String,
    /// Offers sorted ascending by parsed price; offers whose price could not
    /// be parsed follow at the tail in their original relative order
    pub results: Vec<PriceResult>,
    /// Human-readable outcome line
    pub summary: String,
    /// `"<platform> - ₹<amount>"` for the cheapest offer, or a sentinel
    pub best_deal: String,
}

impl PriceComparisonResult {
    /// The fixed "nothing matched" outcome
    pub fn not_found(query: &str) -> Self {
        Self {
            query: query.to_string(),
            results: Vec::new(),
            summary: NOT_FOUND_SUMMARY.to_string(),
            best_deal: BEST_DEAL_UNAVAILABLE.to_string(),
        }
    }
}
