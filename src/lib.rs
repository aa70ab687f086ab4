//! design_inventory library: visual-design element extraction
//!
//! This library fetches a web page and extracts a structured inventory of its
//! visual-design elements: landmark regions, fonts, colors, buttons,
//! navigation, layout containers, icons and images (inlined as data URIs).
//!
//! # Example
//!
//! ```no_run
//! use design_inventory::{extract_design_elements, Config};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let outcome = extract_design_elements("https://example.com", &Config::default()).await;
//! match outcome.report() {
//!     Some(report) => println!("{} buttons, {} images", report.buttons.len(), report.images.len()),
//!     None => eprintln!("extraction failed: {}", outcome.error().unwrap_or_default()),
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
mod extract;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
mod resource_url;
pub mod server;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::ExtractionError;
pub use extract::{build_report, extract_design_elements, extract_with_client};
pub use models::{
    ButtonRecord, ExtractionOutcome, ExtractionReport, IconRecord, IconSystem, ImageRecord,
    LayoutRecord, NavItem, NavRecord, StructureFlags, SvgDetails,
};
pub use resource_url::{normalize_page_url, resolve_resource_url};
