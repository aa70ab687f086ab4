//! HTTP surface for the extraction engine.
//!
//! Provides two endpoints:
//! - `GET /` - plain-text usage line
//! - `POST /extract` - form field `url`; responds with the report or error record as JSON
//!
//! Every request runs its own extraction; nothing is cached between requests.

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;

use crate::config::Config;
use crate::extract::extract_design_elements;
use crate::models::ExtractionOutcome;
use crate::resource_url::normalize_page_url;

const NO_URL_ERROR: &str = "No URL provided";
const USAGE: &str = "POST /extract with form field `url` to extract design elements\n";

#[derive(Debug, Deserialize)]
struct ExtractForm {
    url: Option<String>,
}

async fn index_handler() -> &'static str {
    USAGE
}

async fn extract_handler(
    State(config): State<Arc<Config>>,
    form: Result<Form<ExtractForm>, FormRejection>,
) -> Json<ExtractionOutcome> {
    // A body that is not a urlencoded form carries no url either
    let url = match form {
        Ok(Form(form)) => form.url,
        Err(rejection) => {
            log::debug!("Rejected /extract body: {rejection}");
            None
        }
    };
    let Some(url) = url.filter(|url| !url.trim().is_empty()) else {
        return Json(ExtractionOutcome::Failed {
            error: NO_URL_ERROR.to_string(),
        });
    };

    let outcome = match normalize_page_url(&url) {
        Ok(page_url) => extract_design_elements(&page_url, &config).await,
        Err(e) => ExtractionOutcome::Failed {
            error: e.to_string(),
        },
    };
    Json(outcome)
}

/// Builds the router with its shared configuration.
pub fn router(config: Config) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/extract", post(extract_handler))
        .with_state(Arc::new(config))
}

/// Serves the router on an already-bound listener until it fails.
pub async fn serve(listener: tokio::net::TcpListener, config: Config) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(config))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

/// Binds `host:port` and serves extraction requests.
pub async fn start_server(host: &str, port: u16, config: Config) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}:{}: {}", host, port, e))?;

    log::info!("Listening on http://{}:{}/", host, port);
    log::info!("  - Extract: POST http://{}:{}/extract (form field `url`)", host, port);

    serve(listener, config).await
}
