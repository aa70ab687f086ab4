//! Image inventory (markup side).
//!
//! Builds one record per `img` with its source resolved against the page URL.
//! Inline data is only filled here for sources that already are `data:` URIs;
//! everything else is fetched later by `fetch::inline_images`.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::element::{attr_owned, class_list, inline_style, outer_markup};
use crate::models::ImageRecord;
use crate::resource_url::resolve_resource_url;
use crate::utils::parse_selector_unsafe;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));

/// Collects every `img` element in document order.
///
/// A missing `src` is treated as an empty reference and resolved like any
/// other relative reference.
pub fn collect_images(document: &Html, page_url: &str) -> Vec<ImageRecord> {
    let images: Vec<ImageRecord> = document
        .select(&IMG_SELECTOR)
        .map(|img| {
            let src = img.value().attr("src").unwrap_or("");
            let inline_data = src.starts_with("data:").then(|| src.to_string());
            ImageRecord {
                raw_markup: outer_markup(&img),
                resolved_src: resolve_resource_url(src, page_url),
                alt: img.value().attr("alt").unwrap_or("").to_string(),
                classes: class_list(&img),
                inline_style: inline_style(&img),
                width: attr_owned(&img, "width"),
                height: attr_owned(&img, "height"),
                loading_hint: attr_owned(&img, "loading"),
                inline_data,
            }
        })
        .collect();

    log::debug!("Found {} images", images.len());
    images
}
