//! Test utilities

use std::sync::Arc;

use axum::Router;

use crate::{
    benchmark::JobMetrics,
    config::Config,
    services::{LogPublisher, SummaryPublisher},
    state::AppState,
};

/// Create a test application around `publisher`
pub fn create_test_app_with(publisher: Arc<dyn SummaryPublisher>) -> (Router, AppState) {
    let metrics = JobMetrics::new().expect("Failed to create metrics");
    let state = AppState::new(metrics, publisher, Config::default());
    let app = crate::create_router(state.clone());

    (app, state)
}

/// Create a test application that only logs summaries
pub fn create_test_app() -> (Router, AppState) {
    create_test_app_with(Arc::new(LogPublisher))
}
