//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{benchmark::JobMetrics, config::Config, services::SummaryPublisher};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Metrics sink for finished jobs
    metrics: JobMetrics,

    /// Destination for job summaries
    publisher: Arc<dyn SummaryPublisher>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(metrics: JobMetrics, publisher: Arc<dyn SummaryPublisher>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                metrics,
                publisher,
                config,
            }),
        }
    }

    /// Get a reference to the metrics sink
    pub fn metrics(&self) -> &JobMetrics {
        &self.inner.metrics
    }

    /// Get a reference to the summary publisher
    pub fn publisher(&self) -> &dyn SummaryPublisher {
        self.inner.publisher.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
