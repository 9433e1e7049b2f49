//! Price parsing, ranking, and summary lines

use std::collections::HashSet;

use crate::types::{PriceResult, BEST_DEAL_NONE};

/// Parses raw price text by keeping only digits and dots
///
/// `"₹1,999.00"` parses to `1999.0`. Text that yields nothing numeric (or
/// an ambiguous shape like `"1.2.3"`) is `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Formats a rupee amount with thousands separators and no decimals
fn format_rupees(amount: f64) -> String {
    let digits = format!("{:.0}", amount);
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Sorts offers ascending by parsed price and names the best deal
///
/// Offers without a parseable price keep their relative order at the tail.
/// When no offer has a parseable price the input order is preserved whole
/// and the best deal is the [`BEST_DEAL_NONE`] sentinel.
pub fn rank_offers(offers: Vec<PriceResult>) -> (Vec<PriceResult>, String) {
    let mut priced: Vec<(f64, PriceResult)> = Vec::new();
    let mut unpriced: Vec<PriceResult> = Vec::new();

    for offer in offers {
        match parse_price(&offer.price) {
            Some(value) => priced.push((value, offer)),
            None => unpriced.push(offer),
        }
    }

    if priced.is_empty() {
        return (unpriced, BEST_DEAL_NONE.to_string());
    }

    priced.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let best_deal = {
        let (value, offer) = &priced[0];
        format!("{} - ₹{}", offer.platform, format_rupees(*value))
    };

    let mut ranked: Vec<PriceResult> = priced.into_iter().map(|(_, offer)| offer).collect();
    ranked.extend(unpriced);

    (ranked, best_deal)
}

/// Builds the "Found N results across M platforms" summary line
pub fn build_summary(offers: &[PriceResult]) -> String {
    let platforms: HashSet<_> = offers.iter().map(|o| o.platform).collect();
    format!(
        "Found {} results across {} platforms",
        offers.len(),
        platforms.len()
    )
}
