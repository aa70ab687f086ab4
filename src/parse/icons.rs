//! Icon elements and their icon system.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::element::{any_class_contains, attr_owned, class_list, inline_style, outer_markup};
use crate::models::{IconRecord, IconSystem, SvgDetails};
use crate::utils::parse_selector_unsafe;

const ICON_CANDIDATE_SELECTOR_STR: &str = "i, span, svg";
const PATH_SELECTOR_STR: &str = "path";

const ICON_MARKERS: &[&str] = &["icon", "fa-"];
const FONT_AWESOME_MARKER: &str = "fa-";

/// Stand-in for `pathMarkup` when an svg has no `path` descendant
const MISSING_PATH_MARKUP: &str = "None";

static ICON_CANDIDATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(ICON_CANDIDATE_SELECTOR_STR, "ICON_CANDIDATE_SELECTOR")
});
static PATH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PATH_SELECTOR_STR, "PATH_SELECTOR"));

/// Font Awesome if any class token contains "fa-" (case-sensitive).
fn icon_system(classes: &[String]) -> IconSystem {
    if classes.iter().any(|class| class.contains(FONT_AWESOME_MARKER)) {
        IconSystem::FontAwesome
    } else {
        IconSystem::Other
    }
}

fn svg_details(svg: &ElementRef) -> SvgDetails {
    SvgDetails {
        view_box: attr_owned(svg, "viewBox"),
        path_markup: svg
            .select(&PATH_SELECTOR)
            .next()
            .map(|path| path.html())
            .unwrap_or_else(|| MISSING_PATH_MARKUP.to_string()),
    }
}

/// Extracts icon-like elements in document order.
///
/// An `i`, `span` or `svg` qualifies when some class token contains "icon" or
/// "fa-", compared case-insensitively. The icon system check itself is
/// case-sensitive, so `FA-home` is an icon of system `other`.
pub fn extract_icons(document: &Html) -> Vec<IconRecord> {
    let icons: Vec<IconRecord> = document
        .select(&ICON_CANDIDATE_SELECTOR)
        .filter_map(|element| {
            let classes = class_list(&element);
            if !any_class_contains(&classes, ICON_MARKERS) {
                return None;
            }
            let svg = (element.value().name() == "svg").then(|| svg_details(&element));
            Some(IconRecord {
                raw_markup: outer_markup(&element),
                icon_system: icon_system(&classes),
                classes,
                inline_style: inline_style(&element),
                svg,
            })
        })
        .collect();

    log::debug!("Found {} icons", icons.len());
    icons
}
