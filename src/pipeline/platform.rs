//! Platform resolution and vendor link selection
//!
//! Maps raw provider records onto the closed platform allow-list. Anything
//! that cannot be attributed to a known vendor is dropped by the caller.

use crate::search::RawProduct;
use crate::types::Platform;

/// Source-hint substrings in resolution priority order
///
/// "instamart" sits before "swiggy" so both spellings land on the same
/// platform; the first matching hint wins.
const SOURCE_HINTS: &[(&str, Platform)] = &[
    ("amazon", Platform::Amazon),
    ("blinkit", Platform::Blinkit),
    ("zepto", Platform::Zepto),
    ("instamart", Platform::SwiggyInstamart),
    ("swiggy", Platform::SwiggyInstamart),
];

/// URL fragments per platform, checked in this order after source hints
///
/// Swiggy Instamart is handled separately because a swiggy.com URL only
/// counts when it also mentions instamart (swiggy.com alone is food delivery).
const BLINKIT_DOMAINS: &[&str] = &["blinkit.com", "blinkit.app.link", "grofers.com"];
const ZEPTO_DOMAINS: &[&str] = &["zeptonow.com", "zepto.app.link"];
const JIOMART_DOMAINS: &[&str] = &["jiomart.com"];
const BIGBASKET_DOMAINS: &[&str] = &["bigbasket.com"];
const AMAZON_DOMAINS: &[&str] = &["amazon.in", "amazon.com", "amzn.in", "amzn.to"];

/// Maps a raw offer's URL and reported source onto the allow-list
///
/// Returns `None` when the offer belongs to no known platform.
pub fn resolve_platform(url: &str, source: Option<&str>) -> Option<Platform> {
    if let Some(source) = source {
        let source = source.to_lowercase();
        for (needle, platform) in SOURCE_HINTS {
            if source.contains(needle) {
                return Some(*platform);
            }
        }
    }

    let url = url.to_lowercase();
    if url.contains("swiggy.com") && url.contains("instamart") {
        return Some(Platform::SwiggyInstamart);
    }
    if BLINKIT_DOMAINS.iter().any(|d| url.contains(d)) {
        return Some(Platform::Blinkit);
    }
    if ZEPTO_DOMAINS.iter().any(|d| url.contains(d)) {
        return Some(Platform::Zepto);
    }
    if JIOMART_DOMAINS.iter().any(|d| url.contains(d)) {
        return Some(Platform::JioMartGrocery);
    }
    if BIGBASKET_DOMAINS.iter().any(|d| url.contains(d)) {
        return Some(Platform::BigBasket);
    }
    if AMAZON_DOMAINS.iter().any(|d| url.contains(d)) {
        return Some(Platform::Amazon);
    }

    None
}

/// Fragment that marks a link as pointing directly at the vendor's own site
fn domain_hint(platform: Platform) -> &'static str {
    match platform {
        Platform::Amazon => "amazon.",
        Platform::Blinkit => "blinkit.",
        Platform::Zepto => "zepto",
        Platform::SwiggyInstamart => "swiggy.com",
        Platform::JioMartGrocery => "jiomart.",
        Platform::BigBasket => "bigbasket.",
    }
}

/// Collects candidate links from a raw record in field priority order:
/// top-level link, product link, then nested seller links
fn link_candidates(raw: &RawProduct) -> Vec<&str> {
    let mut candidates: Vec<&str> = Vec::new();
    for link in [raw.link.as_deref(), raw.product_link.as_deref()] {
        if let Some(link) = link {
            if !link.is_empty() {
                candidates.push(link);
            }
        }
    }
    if let Some(sellers) = &raw.sellers {
        for seller in sellers {
            if let Some(link) = seller.link.as_deref() {
                if !link.is_empty() {
                    candidates.push(link);
                }
            }
        }
    }
    candidates
}

/// First usable link on a raw record, used as the resolution input
pub fn primary_link(raw: &RawProduct) -> Option<&str> {
    link_candidates(raw).into_iter().next()
}

/// Picks the most direct vendor link for an already-resolved platform
///
/// Prefers the first candidate on the platform's own domain, then the first
/// candidate of any kind, then `fallback` (normally the storefront home).
pub fn choose_link(platform: Platform, raw: &RawProduct, fallback: &str) -> String {
    let candidates = link_candidates(raw);
    let hint = domain_hint(platform);

    if let Some(direct) = candidates.iter().find(|c| c.to_lowercase().contains(hint)) {
        return (*direct).to_string();
    }

    candidates
        .first()
        .map(|c| (*c).to_string())
        .unwrap_or_else(|| fallback.to_string())
}
