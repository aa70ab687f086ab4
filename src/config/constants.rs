//! Configuration constants.
//!
//! This module defines the fixed values used by the extraction engine and its
//! HTTP client. None of them change after process start.

/// Default User-Agent string for every outbound request.
///
/// The page fetch and every image fetch carry this same desktop-browser header.
/// No other headers, cookies, or credentials are sent.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request HTTP client timeout in seconds.
///
/// The engine imposes no deadline of its own; this only bounds how long the
/// client waits on a single page or image request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of image fetches allowed in flight at once.
///
/// 1 keeps fetches strictly sequential in document order.
pub const DEFAULT_IMAGE_CONCURRENCY: usize = 1;

/// Upper bound accepted for `image_concurrency`.
pub const MAX_IMAGE_CONCURRENCY: usize = 16;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Content type assumed for a fetched image whose response has none.
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Default address the HTTP surface binds to.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
