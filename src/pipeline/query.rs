//! Query normalization and quantity extraction

use std::sync::OnceLock;

use regex::Regex;

/// Filler phrases stripped from free-text queries, applied in this order
///
/// "find me" must come before "find" so no stray "me" fragment survives.
/// Replacement is substring-based, matching each phrase anywhere it occurs.
const FILLER_PHRASES: &[&str] = &[
    "find me",
    "find",
    "cheapest",
    "lowest price",
    "price of",
    "buy",
    "for",
    "please",
    "best price",
];

/// Lower-cases a query, strips filler phrases, and collapses whitespace
///
/// The result is what actually gets sent to the shopping search provider.
pub fn normalize_query(text: &str) -> String {
    let mut query = text.trim().to_lowercase();
    for phrase in FILLER_PHRASES {
        if query.contains(phrase) {
            query = query.replace(phrase, " ");
        }
    }
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pack-size pattern: a number, an optional single space, and a known unit
///
/// Longer units come before their prefixes ("kg" before "g", "packet" before
/// "pack", "pcs" before "pc") so alternation picks the full unit.
fn quantity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s?(ml|l|kg|g|pcs|pc|packet|pack|tablets|capsules)\b")
            .expect("quantity pattern is valid")
    })
}

/// Extracts the first pack-size mention from text, e.g. `"500 ml"` or `"2 L"`
///
/// Units are lower-cased except liters, which render as uppercase `L` so
/// they read distinctly from `ml` and from the digit 1.
pub fn extract_quantity(text: &str) -> Option<String> {
    let captures = quantity_pattern().captures(text)?;
    let value = captures.get(1)?.as_str();
    let unit = captures.get(2)?.as_str();
    let unit = match unit.to_lowercase().as_str() {
        "l" => "L".to_string(),
        other => other.to_string(),
    };
    Some(format!("{} {}", value, unit))
}
