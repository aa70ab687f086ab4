//! Page URL normalization and resource reference resolution.

use log::warn;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ExtractionError;

/// Validates and normalizes the page URL handed in by a caller.
///
/// Adds an `https://` prefix if the URL has no http(s) scheme, then checks that
/// the result parses and stays under `MAX_URL_LENGTH`.
///
/// # Errors
///
/// Returns `ExtractionError::InvalidUrl` if the URL is empty, too long, or
/// does not parse as an http/https URL.
pub fn normalize_page_url(url: &str) -> Result<String, ExtractionError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ExtractionError::InvalidUrl("empty URL".to_string()));
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return Err(ExtractionError::InvalidUrl(format!(
            "URL exceeds maximum length of {MAX_URL_LENGTH} characters"
        )));
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Ok(normalized),
            other => Err(ExtractionError::InvalidUrl(format!(
                "unsupported scheme '{other}' in {url}"
            ))),
        },
        Err(e) => Err(ExtractionError::InvalidUrl(format!("{url}: {e}"))),
    }
}

/// Turns a resource reference found in markup into a fetchable URL.
///
/// Rules, first match wins:
/// 1. `data:` URIs are returned unchanged.
/// 2. `http://` / `https://` URLs are returned unchanged.
/// 3. Protocol-relative `//host/...` gets an `https:` prefix.
/// 4. Root-relative `/path` is appended to the page origin (the first three
///    `/`-separated segments of `page_url`).
/// 5. Anything else is appended, after a `/`, to `page_url` with its last
///    `/`-separated segment removed.
///
/// This is plain string joining. `.`/`..` segments are not collapsed, query
/// strings and fragments on `page_url` are not stripped, and nothing is
/// percent-encoded or decoded.
pub fn resolve_resource_url(reference: &str, page_url: &str) -> String {
    if reference.starts_with("data:")
        || reference.starts_with("http://")
        || reference.starts_with("https://")
    {
        return reference.to_string();
    }

    if reference.starts_with("//") {
        return format!("https:{reference}");
    }

    let segments: Vec<&str> = page_url.split('/').collect();

    if reference.starts_with('/') {
        let origin = segments[..segments.len().min(3)].join("/");
        return format!("{origin}{reference}");
    }

    let directory = segments[..segments.len().saturating_sub(1)].join("/");
    format!("{directory}/{reference}")
}
