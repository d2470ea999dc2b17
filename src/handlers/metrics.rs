//! Prometheus scrape endpoint

use axum::{Router, extract::State, http::header, response::IntoResponse, routing::get};

use crate::{error::AppResult, state::AppState};

/// Render the job metrics in the Prometheus text format
async fn metrics_handler(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let body = state
        .metrics()
        .encode()
        .map_err(|e| anyhow::anyhow!("failed to encode metrics: {}", e))?;

    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

/// Metrics routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}
