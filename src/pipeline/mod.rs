//! The price comparison pipeline
//!
//! [`compare`] is the single entry point: normalize the query, run one
//! provider search, resolve each raw record against the platform allow-list,
//! narrow by variant and quantity, then rank what is left. Every stage
//! degrades toward "fewer results", never toward a failed call.

pub mod filters;
pub mod platform;
pub mod query;
pub mod rank;

use chrono::Utc;

use crate::search::{RawProduct, ShoppingSearch};
use crate::types::{PriceComparisonResult, PriceResult, FETCHED_AT_FORMAT};

/// Runs one full comparison for a free-text query
pub async fn compare(search: &dyn ShoppingSearch, raw_query: &str) -> PriceComparisonResult {
    let normalized = query::normalize_query(raw_query);
    tracing::info!("comparing prices for '{}' (normalized: '{}')", raw_query, normalized);

    let raw_products = match search.search(&normalized).await {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!("shopping search failed, treating as empty: {}", err);
            Vec::new()
        }
    };

    let fetched_at = Utc::now().format(FETCHED_AT_FORMAT).to_string();
    let offers: Vec<PriceResult> = raw_products
        .iter()
        .filter_map(|raw| build_offer(raw, &fetched_at))
        .collect();
    tracing::debug!(
        "{} of {} raw results matched the platform allow-list",
        offers.len(),
        raw_products.len()
    );

    let offers = filters::filter_variants(offers, &normalized);
    let offers = match query::extract_quantity(&normalized) {
        Some(target) => filters::filter_explicit_quantity(offers, &target),
        None => filters::filter_mode_quantity(offers),
    };

    if offers.is_empty() {
        return PriceComparisonResult::not_found(raw_query);
    }

    let (results, best_deal) = rank::rank_offers(offers);
    let summary = rank::build_summary(&results);

    PriceComparisonResult {
        query: raw_query.to_string(),
        results,
        summary,
        best_deal,
    }
}

/// Builds an allow-listed offer from one raw provider record
///
/// `None` when the record cannot be attributed to a known platform.
fn build_offer(raw: &RawProduct, fetched_at: &str) -> Option<PriceResult> {
    let primary = platform::primary_link(raw).unwrap_or_default();
    let resolved = platform::resolve_platform(primary, raw.source.as_deref())?;
    let url = platform::choose_link(resolved, raw, resolved.home_url());

    Some(PriceResult {
        platform: resolved,
        title: raw.title.clone(),
        price: raw.price.clone().unwrap_or_default(),
        url,
        quantity: query::extract_quantity(&raw.title),
        delivery: raw.delivery.clone(),
        last_updated: fetched_at.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchError;
    use crate::types::{Platform, BEST_DEAL_UNAVAILABLE, NOT_FOUND_SUMMARY};
    use async_trait::async_trait;

    struct FixedSearch {
        products: Vec<RawProduct>,
    }

    #[async_trait]
    impl ShoppingSearch for FixedSearch {
        fn name(&self) -> &str {
            "fixed"
        }

        fn is_available(&self) -> bool {
            true
        }

        async fn search(&self, _query: &str) -> Result<Vec<RawProduct>, SearchError> {
            Ok(self.products.clone())
        }
    }

    struct FailingSearch;

    #[async_trait]
    impl ShoppingSearch for FailingSearch {
        fn name(&self) -> &str {
            "failing"
        }

        fn is_available(&self) -> bool {
            false
        }

        async fn search(&self, _query: &str) -> Result<Vec<RawProduct>, SearchError> {
            Err(SearchError::Status(reqwest::StatusCode::BAD_GATEWAY))
        }
    }

    fn raw(title: &str, price: &str, link: &str, source: &str) -> RawProduct {
        RawProduct {
            title: title.to_string(),
            price: Some(price.to_string()),
            link: Some(link.to_string()),
            source: Some(source.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_compare_ranks_across_platforms() {
        let search = FixedSearch {
            products: vec![
                raw(
                    "Coca-Cola 2 L Bottle",
                    "₹95",
                    "https://www.amazon.in/dp/B0COKE",
                    "Amazon.in",
                ),
                raw(
                    "Coca-Cola Soft Drink 2l",
                    "₹82",
                    "https://www.zeptonow.com/pn/coca-cola",
                    "Zepto",
                ),
                raw(
                    "Coca-Cola 750 ml",
                    "₹40",
                    "https://blinkit.com/prn/coca-cola",
                    "Blinkit",
                ),
            ],
        };

        let result = compare(&search, "find me cheapest coke 2l").await;

        // Explicit "2 L" in the query drops the 750 ml offer
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0].platform, Platform::Zepto);
        assert_eq!(result.results[1].platform, Platform::Amazon);
        assert_eq!(result.best_deal, "Zepto - ₹82");
        assert_eq!(result.summary, "Found 2 results across 2 platforms");
        assert_eq!(result.query, "find me cheapest coke 2l");
    }

    #[tokio::test]
    async fn test_compare_variant_filter_protects_generic_queries() {
        let search = FixedSearch {
            products: vec![
                raw(
                    "Coca-Cola Zero 750 ml",
                    "₹40",
                    "https://blinkit.com/prn/coke-zero",
                    "Blinkit",
                ),
                raw(
                    "Coca-Cola 750 ml",
                    "₹45",
                    "https://www.zeptonow.com/pn/coke",
                    "Zepto",
                ),
            ],
        };

        let result = compare(&search, "coke").await;

        // The cheaper Zero variant must not win a generic query
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].platform, Platform::Zepto);
        assert_eq!(result.best_deal, "Zepto - ₹45");
    }

    #[tokio::test]
    async fn test_compare_mode_filter_without_explicit_quantity() {
        let search = FixedSearch {
            products: vec![
                raw(
                    "Amul Taaza Milk 500ml",
                    "₹28",
                    "https://blinkit.com/prn/amul-taaza",
                    "Blinkit",
                ),
                raw(
                    "Amul Gold Milk 1l",
                    "₹75",
                    "https://www.zeptonow.com/pn/amul-gold",
                    "Zepto",
                ),
                raw(
                    "Amul Taaza Pouch 500 ml",
                    "₹30",
                    "https://www.jiomart.com/p/amul-taaza",
                    "JioMart",
                ),
            ],
        };

        let result = compare(&search, "amul milk").await;

        assert_eq!(result.results.len(), 2);
        assert!(result
            .results
            .iter()
            .all(|o| o.quantity.as_deref() == Some("500 ml")));
        assert_eq!(result.best_deal, "Blinkit - ₹28");
    }

    #[tokio::test]
    async fn test_compare_drops_unlisted_merchants() {
        let search = FixedSearch {
            products: vec![raw(
                "Coca-Cola 2 L",
                "₹89",
                "https://www.flipkart.com/p/coke",
                "Flipkart",
            )],
        };

        let result = compare(&search, "coke 2l").await;

        assert!(result.results.is_empty());
        assert_eq!(result.summary, NOT_FOUND_SUMMARY);
        assert_eq!(result.best_deal, BEST_DEAL_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_compare_degrades_on_provider_failure() {
        let result = compare(&FailingSearch, "amul butter").await;

        assert!(result.results.is_empty());
        assert_eq!(result.query, "amul butter");
        assert_eq!(result.summary, NOT_FOUND_SUMMARY);
        assert_eq!(result.best_deal, BEST_DEAL_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_compare_is_deterministic_for_identical_responses() {
        let products = vec![
            raw(
                "Maggi Noodles 70 g",
                "₹14",
                "https://www.zeptonow.com/pn/maggi",
                "Zepto",
            ),
            raw(
                "Maggi Noodles 70g Pack",
                "₹14",
                "https://blinkit.com/prn/maggi",
                "Blinkit",
            ),
            raw(
                "Maggi 2-Minute Noodles 70 g",
                "₹15",
                "https://www.amazon.in/dp/B0MAGGI",
                "Amazon.in",
            ),
        ];

        let search = FixedSearch {
            products: products.clone(),
        };
        let first = compare(&search, "maggi").await;
        let second = compare(&search, "maggi").await;

        let order = |r: &PriceComparisonResult| {
            r.results
                .iter()
                .map(|o| (o.platform, o.title.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(order(&first), order(&second));
        assert_eq!(first.best_deal, second.best_deal);
        assert_eq!(first.best_deal, "Zepto - ₹14");
    }

    #[tokio::test]
    async fn test_compare_stamps_fetch_timestamp() {
        let search = FixedSearch {
            products: vec![raw(
                "Amul Butter 500 g",
                "₹275",
                "https://www.amazon.in/dp/B0BUTTER",
                "Amazon.in",
            )],
        };

        let result = compare(&search, "amul butter 500g").await;

        assert_eq!(result.results.len(), 1);
        // YYYY-MM-DD HH:MM
        let stamp = &result.results[0].last_updated;
        assert_eq!(stamp.len(), 16);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
    }
}
