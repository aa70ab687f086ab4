//! HTML parsing and design-element extraction.
//!
//! This module extracts the design inventory from a parsed document:
//! - Fonts and colors from style blocks and `style` attributes
//! - Landmark flags and layout containers
//! - Buttons and navigation
//! - Icons
//! - Images (sources resolved; fetching happens in `fetch`)
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Every
//! extractor reads the same document and returns its own fresh values.

mod element;
mod icons;
mod images;
mod interactive;
mod structure;
mod styles;

// Re-export public API
pub use element::parse_style_props;
pub use icons::extract_icons;
pub use images::collect_images;
pub use interactive::{extract_buttons, extract_navigation};
pub use structure::{extract_layout, extract_structure};
pub use styles::{extract_colors, extract_fonts};
