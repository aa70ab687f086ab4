//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization and page-level extraction failures)
//! - Categorization of HTTP client errors for logging
//!
//! Failures fall into two tiers:
//! - **Page-level**: the page could not be fetched; surfaces as the error record
//! - **Resource-level**: a single image could not be fetched; its record carries no inline data

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status};
pub use types::{ErrorType, ExtractionError, InitializationError, ResourceError};
