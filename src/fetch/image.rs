//! Image fetching and data URI construction.
//!
//! Each image is fetched at most once, with the same client (and therefore the
//! same User-Agent) as the page. A failure only affects the image it belongs to.

use base64::Engine;
use futures::stream::{self, StreamExt};
use log::debug;
use reqwest::header::CONTENT_TYPE;

use crate::config::DEFAULT_IMAGE_CONTENT_TYPE;
use crate::error_handling::ResourceError;
use crate::models::ImageRecord;

/// Body and declared content type of a fetched resource.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fetches a resource, treating any non-2xx status as an error.
///
/// Redirects reqwest does not follow (`304`, a `300` without `Location`)
/// are failures too.
pub async fn fetch_resource(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchedResource, ResourceError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResourceError::Status {
            status,
            url: url.to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let bytes = response.bytes().await?.to_vec();
    Ok(FetchedResource {
        content_type,
        bytes,
    })
}

/// Builds a `data:` URI, defaulting the content type to `image/jpeg`.
pub fn to_data_uri(content_type: Option<&str>, bytes: &[u8]) -> String {
    let content_type = content_type.unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE);
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{content_type};base64,{encoded}")
}

/// Fetches one image and returns it as a data URI.
///
/// Every failure (network error, timeout, non-2xx status, body error) maps
/// to `None` here and goes no further.
pub async fn inline_image(client: &reqwest::Client, url: &str) -> Option<String> {
    match fetch_resource(client, url).await {
        Ok(resource) => Some(to_data_uri(
            resource.content_type.as_deref(),
            &resource.bytes,
        )),
        Err(e) => {
            debug!(
                "Image fetch failed for {} ({}): {}",
                url,
                e.error_type(),
                e
            );
            None
        }
    }
}

/// Fills `inline_data` for every image that still needs fetching.
///
/// At most `concurrency` fetches are in flight; the output keeps the input
/// order regardless of completion order. With `concurrency == 1` images are
/// fetched one at a time in document order.
pub async fn inline_images(
    client: &reqwest::Client,
    images: Vec<ImageRecord>,
    concurrency: usize,
) -> Vec<ImageRecord> {
    stream::iter(images.into_iter().map(move |mut image| async move {
        if image.needs_fetch() {
            image.inline_data = inline_image(client, &image.resolved_src).await;
        }
        image
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await
}
