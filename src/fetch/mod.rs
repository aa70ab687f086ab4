//! Resource fetching.
//!
//! This module performs every outbound request of an extraction:
//! - The page fetch (page-level: failure aborts the extraction)
//! - Image fetches (resource-level: failure only clears that image's data)

mod image;
mod page;

pub use image::{fetch_resource, inline_image, inline_images, to_data_uri, FetchedResource};
pub use page::{decode_page_body, fetch_page};
