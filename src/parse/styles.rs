//! Typography and color inventory.
//!
//! This is a regex scan over raw style text, not a CSS parser. It reads the
//! text of every `<style>` block and every `style` attribute, and it matches
//! declarations by property name up to the next `;` or `}`. Shorthands
//! (`font:`), custom properties and the cascade are not resolved.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

const FONT_FAMILY_PATTERN: &str = r"font-family:\s*([^;}]+)";
const COLOR_PATTERN: &str = r"(?:color|background-color|border-color):\s*([^;}]+)";

const STYLE_BLOCK_SELECTOR_STR: &str = "style";
const STYLED_ELEMENT_SELECTOR_STR: &str = "[style]";
const STYLESHEET_LINK_SELECTOR_STR: &str = r#"link[rel~="stylesheet"]"#;

/// `href` substring that marks a stylesheet link as a font reference
const FONT_LINK_MARKER: &str = "fonts";

static FONT_FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FONT_FAMILY_PATTERN, "FONT_FAMILY_RE"));
static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(COLOR_PATTERN, "COLOR_RE"));

static STYLE_BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(STYLE_BLOCK_SELECTOR_STR, "STYLE_BLOCK_SELECTOR")
});
static STYLED_ELEMENT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(STYLED_ELEMENT_SELECTOR_STR, "STYLED_ELEMENT_SELECTOR")
});
static STYLESHEET_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(STYLESHEET_LINK_SELECTOR_STR, "STYLESHEET_LINK_SELECTOR")
});

/// Adds every trimmed, non-empty first capture of `re` in `text` to `out`.
fn collect_declarations(re: &Regex, text: &str, out: &mut BTreeSet<String>) {
    for caps in re.captures_iter(text) {
        if let Some(value) = caps.get(1) {
            let value = value.as_str().trim();
            if !value.is_empty() {
                out.insert(value.to_string());
            }
        }
    }
}

/// Text content of every `<style>` block, in document order.
fn style_blocks(document: &Html) -> impl Iterator<Item = String> + '_ {
    document
        .select(&STYLE_BLOCK_SELECTOR)
        .map(|style| style.text().collect::<String>())
}

/// Non-empty `style` attributes, in document order.
fn inline_styles(document: &Html) -> impl Iterator<Item = &str> + '_ {
    document
        .select(&STYLED_ELEMENT_SELECTOR)
        .filter_map(|element| element.value().attr("style"))
        .filter(|style| !style.is_empty())
}

/// Extracts font references from a document.
///
/// Collects:
/// - `font-family` values from `<style>` blocks
/// - raw `href` of stylesheet links whose href contains "fonts"
/// - `font-family` values from `style` attributes
///
/// Values are raw declaration text (trimmed); equivalent spellings stay distinct.
pub fn extract_fonts(document: &Html) -> BTreeSet<String> {
    let mut fonts = BTreeSet::new();

    for block in style_blocks(document) {
        collect_declarations(&FONT_FAMILY_RE, &block, &mut fonts);
    }

    for link in document.select(&STYLESHEET_LINK_SELECTOR) {
        if let Some(href) = link.value().attr("href") {
            if href.contains(FONT_LINK_MARKER) {
                fonts.insert(href.to_string());
            }
        }
    }

    for style in inline_styles(document).filter(|style| style.contains("font-family")) {
        collect_declarations(&FONT_FAMILY_RE, style, &mut fonts);
    }

    log::debug!("Extracted {} font references", fonts.len());
    fonts
}

/// Extracts color values from `style` attributes and `<style>` blocks.
///
/// Matches `color`, `background-color` and `border-color` declarations. The
/// bare `color:` alternative also matches the tail of any other `*-color:`
/// property.
pub fn extract_colors(document: &Html) -> BTreeSet<String> {
    let mut colors = BTreeSet::new();

    for style in inline_styles(document) {
        collect_declarations(&COLOR_RE, style, &mut colors);
    }

    for block in style_blocks(document) {
        collect_declarations(&COLOR_RE, &block, &mut colors);
    }

    log::debug!("Extracted {} color values", colors.len());
    colors
}
