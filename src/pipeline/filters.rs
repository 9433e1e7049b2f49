//! Variant and quantity filters
//!
//! Three sequential filters narrow the offer list. Each one is fail-open:
//! a filter that would leave nothing returns its input unchanged, so the
//! pipeline can narrow a result set but never empty it.

use crate::types::PriceResult;

/// Flavor and variant markers that tag an offer as a niche variant
///
/// Checked as lowercase substrings of the offer title.
const VARIANT_TOKENS: &[&str] = &[
    "zero",
    "diet",
    "sugar free",
    "sugar-free",
    "lite",
    "mango",
    "orange",
    "lemon",
    "lime",
    "strawberry",
    "mixed fruit",
    "chocolate",
    "vanilla",
    "masala",
    "jeera",
    "elaichi",
    "kesar",
    "badam",
    "rose",
];

/// Drops niche-variant offers when the query itself is generic
///
/// A query that names a variant token keeps everything, because the caller
/// asked for that variant. Reverts to the full list rather than return
/// nothing.
pub fn filter_variants(offers: Vec<PriceResult>, normalized_query: &str) -> Vec<PriceResult> {
    if VARIANT_TOKENS.iter().any(|t| normalized_query.contains(t)) {
        return offers;
    }

    let filtered: Vec<PriceResult> = offers
        .iter()
        .filter(|offer| {
            let title = offer.title.to_lowercase();
            !VARIANT_TOKENS.iter().any(|t| title.contains(t))
        })
        .cloned()
        .collect();

    if filtered.is_empty() {
        offers
    } else {
        filtered
    }
}

/// Keeps only offers whose quantity matches the one named in the query
///
/// Comparison ignores ASCII case so "2 L" and "2 l" reconcile. Reverts to
/// the full list when nothing matches.
pub fn filter_explicit_quantity(offers: Vec<PriceResult>, target: &str) -> Vec<PriceResult> {
    let filtered: Vec<PriceResult> = offers
        .iter()
        .filter(|offer| {
            offer
                .quantity
                .as_deref()
                .map_or(false, |q| q.eq_ignore_ascii_case(target))
        })
        .cloned()
        .collect();

    if filtered.is_empty() {
        offers
    } else {
        filtered
    }
}

/// Collapses the list to its most common quantity
///
/// Ties keep the first-encountered quantity, so repeated runs over the same
/// provider output stay deterministic. Offers pass through untouched when
/// none of them carry a quantity.
pub fn filter_mode_quantity(offers: Vec<PriceResult>) -> Vec<PriceResult> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for offer in &offers {
        if let Some(quantity) = offer.quantity.as_deref() {
            match tally.iter_mut().find(|(q, _)| *q == quantity) {
                Some((_, count)) => *count += 1,
                None => tally.push((quantity, 1)),
            }
        }
    }

    let mut mode: Option<(&str, usize)> = None;
    for &(quantity, count) in &tally {
        match mode {
            Some((_, best)) if best >= count => {}
            _ => mode = Some((quantity, count)),
        }
    }

    let Some((mode, _)) = mode else {
        return offers;
    };
    let mode = mode.to_string();

    offers
        .iter()
        .filter(|offer| {
            offer
                .quantity
                .as_deref()
                .map_or(false, |q| q.eq_ignore_ascii_case(&mode))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;

    fn offer(title: &str, quantity: Option<&str>) -> PriceResult {
        PriceResult {
            platform: Platform::Blinkit,
            title: title.to_string(),
            price: "₹100".to_string(),
            url: "https://blinkit.com/prn/x".to_string(),
            quantity: quantity.map(str::to_string),
            delivery: None,
            last_updated: "2026-08-23 10:15".to_string(),
        }
    }

    #[test]
    fn test_variants_dropped_for_generic_query() {
        let offers = vec![
            offer("Coca-Cola 750 ml", None),
            offer("Coca-Cola Zero 750 ml", None),
            offer("Coca-Cola Diet Can", None),
        ];
        let kept = filter_variants(offers, "coca-cola");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Coca-Cola 750 ml");
    }

    #[test]
    fn test_variants_kept_when_query_names_one() {
        let offers = vec![
            offer("Coca-Cola 750 ml", None),
            offer("Coca-Cola Zero 750 ml", None),
        ];
        let kept = filter_variants(offers, "coca-cola zero");
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_variants_filter_fails_open_in_original_order() {
        let offers = vec![
            offer("Maaza Mango 600 ml", None),
            offer("Slice Mango Zero Sugar", None),
        ];
        let kept = filter_variants(offers, "cold drink");
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title, "Maaza Mango 600 ml");
    }

    #[test]
    fn test_explicit_quantity_keeps_matches_case_insensitively() {
        let offers = vec![
            offer("Coke 2 l bottle", Some("2 l")),
            offer("Coke 750 ml", Some("750 ml")),
            offer("Coke 2 L party pack", Some("2 L")),
        ];
        let kept = filter_explicit_quantity(offers, "2 L");
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|o| o.quantity.as_deref().unwrap().eq_ignore_ascii_case("2 L")));
    }

    #[test]
    fn test_explicit_quantity_fails_open() {
        let offers = vec![
            offer("Coke 750 ml", Some("750 ml")),
            offer("Coke 300 ml can", Some("300 ml")),
        ];
        let kept = filter_explicit_quantity(offers, "2 L");
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_mode_quantity_keeps_majority() {
        let offers = vec![
            offer("Amul Taaza 500 ml", Some("500 ml")),
            offer("Amul Gold 1 L", Some("1 L")),
            offer("Amul Taaza Pouch 500 ml", Some("500 ml")),
            offer("Amul Butter", None),
        ];
        let kept = filter_mode_quantity(offers);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|o| o.quantity.as_deref() == Some("500 ml")));
    }

    #[test]
    fn test_mode_quantity_tie_keeps_first_encountered() {
        let offers = vec![
            offer("Amul Taaza 500 ml", Some("500 ml")),
            offer("Amul Gold 1 L", Some("1 L")),
        ];
        let kept = filter_mode_quantity(offers);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].quantity.as_deref(), Some("500 ml"));
    }

    #[test]
    fn test_mode_quantity_passes_through_without_quantities() {
        let offers = vec![offer("Amul Butter", None), offer("Amul Cheese", None)];
        let kept = filter_mode_quantity(offers);
        assert_eq!(kept.len(), 2);
    }
}
