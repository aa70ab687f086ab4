//! Buttons and navigation structures.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::element::{
    any_class_contains, attr_owned, class_list, element_text, inline_style, outer_markup,
    parse_style_props, tag_name,
};
use crate::models::{ButtonRecord, NavItem, NavRecord};
use crate::utils::parse_selector_unsafe;

const BUTTON_CANDIDATE_SELECTOR_STR: &str = "button, a";
const NAV_CONTAINER_SELECTOR_STR: &str = "nav, header";
const NAV_ITEM_SELECTOR_STR: &str = "a, li";
const ANCHOR_SELECTOR_STR: &str = "a";

const BUTTON_MARKERS: &[&str] = &["btn", "button"];

static BUTTON_CANDIDATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(BUTTON_CANDIDATE_SELECTOR_STR, "BUTTON_CANDIDATE_SELECTOR")
});
static NAV_CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(NAV_CONTAINER_SELECTOR_STR, "NAV_CONTAINER_SELECTOR")
});
static NAV_ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(NAV_ITEM_SELECTOR_STR, "NAV_ITEM_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// `href` of an anchor; `None` for any other element.
fn anchor_href(element: &ElementRef) -> Option<String> {
    if element.value().name() == "a" {
        attr_owned(element, "href")
    } else {
        None
    }
}

/// Extracts button-like elements in document order.
///
/// A `button` or `a` qualifies when some class token contains "btn" or
/// "button", compared case-insensitively. `"Btn-primary"` and
/// `"submitbutton"` qualify, `"but"` does not.
pub fn extract_buttons(document: &Html) -> Vec<ButtonRecord> {
    let buttons: Vec<ButtonRecord> = document
        .select(&BUTTON_CANDIDATE_SELECTOR)
        .filter_map(|element| {
            let classes = class_list(&element);
            if !any_class_contains(&classes, BUTTON_MARKERS) {
                return None;
            }
            let style_props = element
                .value()
                .attr("style")
                .map(parse_style_props)
                .unwrap_or_default();
            Some(ButtonRecord {
                raw_markup: outer_markup(&element),
                text: element_text(&element),
                classes,
                style_props,
                tag_name: tag_name(&element),
                on_click: attr_owned(&element, "onclick"),
                href: anchor_href(&element),
            })
        })
        .collect();

    log::debug!("Found {} buttons", buttons.len());
    buttons
}

/// Anchors are always items; an `li` only when it holds no anchor of its own,
/// so a `li > a` link is reported once, through the anchor.
fn is_nav_item(element: &ElementRef) -> bool {
    element.value().name() == "a" || element.select(&ANCHOR_SELECTOR).next().is_none()
}

fn nav_item(element: &ElementRef) -> NavItem {
    NavItem {
        text: element_text(element),
        href: anchor_href(element),
        classes: class_list(element),
        raw_markup: outer_markup(element),
    }
}

/// Extracts every `nav` and `header` element with its items.
///
/// Items are descendant `a` and `li` elements at any depth, in document
/// order. An `li` that contains an `a` is skipped, so `ul > li > a` gives one
/// item per link rather than two (see `is_nav_item`). A `header` wrapping a
/// `nav` yields two records that share items.
pub fn extract_navigation(document: &Html) -> Vec<NavRecord> {
    let navigation: Vec<NavRecord> = document
        .select(&NAV_CONTAINER_SELECTOR)
        .map(|nav| NavRecord {
            raw_markup: outer_markup(&nav),
            tag_name: tag_name(&nav),
            classes: class_list(&nav),
            inline_style: inline_style(&nav),
            items: nav
                .select(&NAV_ITEM_SELECTOR)
                .filter(is_nav_item)
                .map(|item| nav_item(&item))
                .collect(),
        })
        .collect();

    log::debug!("Found {} navigation elements", navigation.len());
    navigation
}
