//! Page fetch.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use log::debug;
use regex::Regex;
use reqwest::header::CONTENT_TYPE;

use crate::error_handling::ExtractionError;
use crate::utils::compile_regex_unsafe;

/// Bytes scanned for a `<meta>` charset declaration.
const META_SNIFF_LIMIT: usize = 1024;

// Covers both <meta charset="..."> and <meta http-equiv content="...; charset=...">
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_\-:.]+)"#,
        "META_CHARSET_RE",
    )
});

/// Returns the `charset` parameter of a Content-Type header value.
fn header_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c| c == '"' || c == '\''))
    })
}

fn meta_charset(bytes: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(META_SNIFF_LIMIT)]);
    META_CHARSET_RE
        .captures(&head)
        .map(|caps| caps[1].to_string())
}

/// Decodes a page body.
///
/// The encoding comes from, in order: a byte order mark, the Content-Type
/// `charset`, a `<meta>` declaration near the top of the document, UTF-8.
/// Unknown labels are skipped. Malformed sequences become U+FFFD.
pub fn decode_page_body(content_type: Option<&str>, bytes: &[u8]) -> String {
    let encoding = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| {
            meta_charset(bytes).and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!("Page body had malformed {} sequences", used.name());
    }
    text.into_owned()
}

/// Fetches the page body as text.
///
/// This is the all-or-nothing step of an extraction: any request failure or
/// non-success status is returned as an `ExtractionError` and nothing else
/// is attempted. There are no retries.
///
/// # Errors
///
/// - `ExtractionError::Request` if the request could not be completed
/// - `ExtractionError::Status` if the server answered with a non-2xx status
/// - `ExtractionError::Body` if the body could not be read
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, ExtractionError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(ExtractionError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractionError::Status {
            status,
            url: url.to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes().await.map_err(ExtractionError::Body)?;
    let body = decode_page_body(content_type.as_deref(), &bytes);
    debug!("Fetched {} ({} bytes, status {})", url, bytes.len(), status);
    Ok(body)
}
