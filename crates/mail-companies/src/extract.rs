//! Text extraction from repaired message markup.

use crate::error::{Result, TallyError};
use scraper::{Html, Selector};

/// Compile a CSS selector, keeping the parse error readable.
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| TallyError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Text of every element matching `selector`, in document order.
///
/// Each entry is the concatenation of all descendant text nodes, untrimmed.
/// Nested matches are reported once for every matching element.
pub fn extract_fragments(html: &str, selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}
