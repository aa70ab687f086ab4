//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `design_inventory` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the report as JSON, or serving the HTTP surface
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use design_inventory::config::{
    DEFAULT_IMAGE_CONCURRENCY, DEFAULT_SERVER_HOST, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use design_inventory::initialization::init_logger_with;
use design_inventory::server::start_server;
use design_inventory::{
    extract_design_elements, normalize_page_url, Config, ExtractionOutcome, LogFormat, LogLevel,
};

/// Extract the visual-design inventory of a web page as JSON.
#[derive(Debug, Parser)]
#[command(name = "design_inventory", version, about)]
struct Cli {
    /// Page URL (https:// is assumed when no scheme is given)
    #[arg(required_unless_present = "serve")]
    url: Option<String>,

    /// Serve POST /extract on this port instead of extracting a single URL
    #[arg(long, value_name = "PORT", conflicts_with = "url")]
    serve: Option<u16>,

    /// Address to bind when serving
    #[arg(long, default_value = DEFAULT_SERVER_HOST)]
    host: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// Maximum image fetches in flight (1 = sequential, document order)
    #[arg(long, default_value_t = DEFAULT_IMAGE_CONCURRENCY)]
    image_concurrency: usize,

    /// Resolve image sources without fetching them
    #[arg(long)]
    no_inline_images: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            log_level: cli.log_level.clone(),
            log_format: cli.log_format.clone(),
            user_agent: cli.user_agent.clone(),
            timeout_seconds: cli.timeout_seconds,
            image_concurrency: cli.image_concurrency,
            inline_images: !cli.no_inline_images,
        }
    }
}

fn print_outcome(outcome: &ExtractionOutcome, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(outcome)
    } else {
        serde_json::to_string(outcome)
    }
    .context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from(&cli);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Some(port) = cli.serve {
        return start_server(&cli.host, port, config)
            .await
            .context("HTTP server failed");
    }

    let raw_url = cli.url.as_deref().unwrap_or_default();
    let outcome = match normalize_page_url(raw_url) {
        Ok(page_url) => extract_design_elements(&page_url, &config).await,
        Err(e) => ExtractionOutcome::Failed {
            error: e.to_string(),
        },
    };

    print_outcome(&outcome, cli.pretty)?;
    if outcome.is_error() {
        process::exit(1);
    }
    Ok(())
}
