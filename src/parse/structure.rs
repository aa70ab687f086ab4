//! Landmark flags and layout-container candidates.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::element::{any_class_contains, class_list, inline_style, outer_markup, tag_name};
use crate::models::{LayoutRecord, StructureFlags};
use crate::utils::parse_selector_unsafe;

const SIDEBAR_CANDIDATE_SELECTOR_STR: &str = "aside, div";
const LAYOUT_CANDIDATE_SELECTOR_STR: &str = "div, section, article";

const SIDEBAR_MARKERS: &[&str] = &["sidebar"];
const LAYOUT_MARKERS: &[&str] = &["container", "wrapper", "section", "grid", "flex"];

static SIDEBAR_CANDIDATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(SIDEBAR_CANDIDATE_SELECTOR_STR, "SIDEBAR_CANDIDATE_SELECTOR")
});
static LAYOUT_CANDIDATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(LAYOUT_CANDIDATE_SELECTOR_STR, "LAYOUT_CANDIDATE_SELECTOR")
});
static HEADER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("header", "HEADER_SELECTOR"));
static NAV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("nav", "NAV_SELECTOR"));
static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("main", "MAIN_SELECTOR"));
static FOOTER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("footer", "FOOTER_SELECTOR"));
static SECTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("section", "SECTION_SELECTOR"));

fn has_any(document: &Html, selector: &Selector) -> bool {
    document.select(selector).next().is_some()
}

/// Derives the landmark flags of a document.
///
/// `header`, `nav`, `main` and `footer` are tested by tag name. `sidebar` is
/// set when an `aside` or `div` has a class token containing "sidebar" (any
/// case). `section_count` counts every `section` element.
pub fn extract_structure(document: &Html) -> StructureFlags {
    let sidebar = document
        .select(&SIDEBAR_CANDIDATE_SELECTOR)
        .any(|element| any_class_contains(&class_list(&element), SIDEBAR_MARKERS));

    StructureFlags {
        header: has_any(document, &HEADER_SELECTOR),
        nav: has_any(document, &NAV_SELECTOR),
        main: has_any(document, &MAIN_SELECTOR),
        footer: has_any(document, &FOOTER_SELECTOR),
        sidebar,
        section_count: document.select(&SECTION_SELECTOR).count(),
    }
}

/// Collects layout-container candidates in document order.
///
/// A `div`, `section` or `article` qualifies when it has at least one class
/// token and some token contains "container", "wrapper", "section", "grid" or
/// "flex" (any case).
pub fn extract_layout(document: &Html) -> Vec<LayoutRecord> {
    let layout: Vec<LayoutRecord> = document
        .select(&LAYOUT_CANDIDATE_SELECTOR)
        .filter_map(|element| {
            let classes = class_list(&element);
            if !any_class_contains(&classes, LAYOUT_MARKERS) {
                return None;
            }
            Some(LayoutRecord {
                tag_name: tag_name(&element),
                classes,
                inline_style: inline_style(&element),
                raw_markup: outer_markup(&element),
            })
        })
        .collect();

    log::debug!("Found {} layout containers", layout.len());
    layout
}
