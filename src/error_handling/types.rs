//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::{categorize_reqwest_error, categorize_status};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Page-level extraction failures.
///
/// Any of these aborts the extraction before a single extractor runs. The
/// `Display` output is what ends up in the `error` field of the report.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The page URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    /// The page request could not be sent or completed (DNS, connect, timeout, ...).
    #[error("Page request failed: {0}")]
    Request(#[source] ReqwestError),

    /// The page answered with a non-success status.
    #[error("HTTP status {status} for url ({url})")]
    Status {
        /// Status code returned by the server
        status: StatusCode,
        /// URL that was requested
        url: String,
    },

    /// The page body could not be read.
    #[error("Failed to read page body: {0}")]
    Body(#[source] ReqwestError),
}

impl ExtractionError {
    /// Categorizes this failure for logging.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ExtractionError::InvalidUrl(_) => ErrorType::HttpRequestBuilderError,
            ExtractionError::Request(e) => categorize_reqwest_error(e),
            ExtractionError::Status { status, .. } => categorize_status(*status),
            ExtractionError::Body(_) => ErrorType::HttpRequestBodyError,
        }
    }
}

/// Resource-level fetch failures (images).
///
/// These never leave the record they belong to.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The request could not be sent or its body could not be read.
    #[error("{0}")]
    Request(#[from] ReqwestError),

    /// The server answered with anything other than 2xx, redirects included.
    #[error("HTTP status {status} for url ({url})")]
    Status { status: StatusCode, url: String },
}

impl ResourceError {
    /// Categorizes this failure for logging.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ResourceError::Request(e) => categorize_reqwest_error(e),
            ResourceError::Status { status, .. } => categorize_status(*status),
        }
    }
}

/// Categories of HTTP failures, for page and image fetches alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    // Specific HTTP status code errors
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
        }
    }
}
