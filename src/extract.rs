//! Report assembly.
//!
//! One extraction request runs start to finish here:
//! 1. Fetch the page (all-or-nothing)
//! 2. Parse it once and run every extractor over the same document
//! 3. Inline image bytes (each image fails independently)

use log::{debug, info, warn};
use scraper::Html;

use crate::config::Config;
use crate::fetch::{fetch_page, inline_images};
use crate::initialization::init_client;
use crate::models::{ExtractionOutcome, ExtractionReport};
use crate::parse::{
    collect_images, extract_buttons, extract_colors, extract_fonts, extract_icons,
    extract_layout, extract_navigation, extract_structure,
};

/// Builds a report from markup alone, without any network access.
///
/// Image sources are resolved against `page_url` but never fetched, so only
/// images whose source is already a `data:` URI carry inline data.
pub fn build_report(body: &str, page_url: &str) -> ExtractionReport {
    let document = Html::parse_document(body);

    let structure = extract_structure(&document);
    debug!("Extracted structure for {page_url}: {structure:?}");

    let report = ExtractionReport {
        structure,
        fonts: extract_fonts(&document),
        colors: extract_colors(&document),
        buttons: extract_buttons(&document),
        navigation: extract_navigation(&document),
        layout: extract_layout(&document),
        icons: extract_icons(&document),
        images: collect_images(&document, page_url),
    };

    debug!(
        "Extracted from {page_url}: {} fonts, {} colors, {} buttons, {} nav, {} layout, {} icons, {} images",
        report.fonts.len(),
        report.colors.len(),
        report.buttons.len(),
        report.navigation.len(),
        report.layout.len(),
        report.icons.len(),
        report.images.len()
    );
    report
}

/// Runs one extraction with an existing HTTP client.
///
/// Returns the report, or the error record if the page itself could not be
/// fetched. Image fetch failures never turn into the error record.
pub async fn extract_with_client(
    client: &reqwest::Client,
    page_url: &str,
    config: &Config,
) -> ExtractionOutcome {
    info!("Extracting design elements from {page_url}");

    let body = match fetch_page(client, page_url).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Page fetch failed for {} ({}): {}", page_url, e.error_type(), e);
            return ExtractionOutcome::Failed {
                error: e.to_string(),
            };
        }
    };

    // The parsed document is dropped inside build_report, before any await
    let mut report = build_report(&body, page_url);

    if config.inline_images {
        let images = std::mem::take(&mut report.images);
        report.images =
            inline_images(client, images, config.effective_image_concurrency()).await;
    }

    let inlined = report
        .images
        .iter()
        .filter(|image| image.inline_data.is_some())
        .count();
    info!(
        "Finished {page_url}: {} buttons, {} icons, {} images ({} inlined)",
        report.buttons.len(),
        report.icons.len(),
        report.images.len(),
        inlined
    );

    report.into()
}

/// Extracts the design inventory of the page at `page_url`.
///
/// `page_url` must be absolute; see `normalize_page_url` for callers that
/// accept scheme-less input. A fresh HTTP client is built from `config` for
/// each call, so nothing is shared between extractions.
///
/// # Example
///
/// ```no_run
/// use design_inventory::{extract_design_elements, Config};
///
/// # async fn example() {
/// let outcome = extract_design_elements("https://example.com", &Config::default()).await;
/// println!("{}", serde_json::to_string(&outcome).unwrap());
/// # }
/// ```
pub async fn extract_design_elements(page_url: &str, config: &Config) -> ExtractionOutcome {
    let client = match init_client(config) {
        Ok(client) => client,
        Err(e) => {
            warn!("{e}");
            return ExtractionOutcome::Failed {
                error: e.to_string(),
            };
        }
    };
    extract_with_client(&client, page_url, config).await
}
