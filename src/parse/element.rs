//! Shared element helpers for the extractors.
//!
//! Class-name heuristics work on the raw class tokens of an element, compared
//! in lowercase. Nothing here looks at computed styles.

use std::collections::BTreeMap;

use scraper::ElementRef;

/// Class tokens of an element in attribute order (empty if no `class`).
pub fn class_list(element: &ElementRef) -> Vec<String> {
    element
        .value()
        .attr("class")
        .map(|classes| classes.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// True if any class token, lowercased, contains any of `needles`.
///
/// `needles` must already be lowercase.
pub fn any_class_contains(classes: &[String], needles: &[&str]) -> bool {
    classes.iter().any(|class| {
        let class = class.to_lowercase();
        needles.iter().any(|needle| class.contains(needle))
    })
}

/// Concatenated text of the element subtree, trimmed.
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Verbatim serialization of the element subtree.
pub fn outer_markup(element: &ElementRef) -> String {
    element.html()
}

/// Owned copy of an attribute value.
pub fn attr_owned(element: &ElementRef, name: &str) -> Option<String> {
    element.value().attr(name).map(str::to_string)
}

/// Inline `style` attribute, verbatim.
pub fn inline_style(element: &ElementRef) -> Option<String> {
    attr_owned(element, "style")
}

/// Tag name as parsed (lowercase for HTML elements).
pub fn tag_name(element: &ElementRef) -> String {
    element.value().name().to_string()
}

/// Splits an inline style declaration list into property -> value.
///
/// Segments are split on `;`, then on the first `:`; both sides are trimmed.
/// Segments without a `:` are skipped. Later duplicates overwrite earlier ones.
pub fn parse_style_props(style: &str) -> BTreeMap<String, String> {
    style
        .split(';')
        .filter_map(|segment| segment.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
