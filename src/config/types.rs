//! Configuration types.
//!
//! This module defines the library configuration struct and the logging enums
//! shared with the command-line front end.

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_IMAGE_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_IMAGE_CONCURRENCY,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use design_inventory::Config;
///
/// let config = Config {
///     image_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP User-Agent header value sent with every request
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Maximum image fetches in flight (1 = sequential)
    pub image_concurrency: usize,

    /// Fetch non-inline images and embed them as data URIs
    pub inline_images: bool,
}

impl Config {
    /// Image concurrency clamped to `1..=MAX_IMAGE_CONCURRENCY`.
    pub fn effective_image_concurrency(&self) -> usize {
        self.image_concurrency.clamp(1, MAX_IMAGE_CONCURRENCY)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            image_concurrency: DEFAULT_IMAGE_CONCURRENCY,
            inline_images: true,
        }
    }
}
