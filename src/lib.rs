//! SortBench - Instrumented Sort Job Service
//!
//! This library accepts sort jobs (named numeric lines plus a requested
//! algorithm), runs the algorithm on every line and reports per-line timings.
//!
//! # Features
//!
//! - Bubble, insertion, quick and LSD radix sort over `f64` lines
//! - Monotonic per-line timing of the algorithm call only
//! - Per-line fault isolation; an unknown algorithm fails the whole job
//! - Prometheus metrics and a summary message per finished job
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Job orchestration, metrics and summary publishing
//! - **Benchmark**: The sorting engine (algorithms, selector, driver, runner)
//! - **Models**: Domain models

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use axum::{Router, extract::DefaultBodyLimit, middleware as axum_middleware};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult, SortError};
pub use state::AppState;

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config().limits.max_body_bytes;

    Router::new()
        .nest(constants::API_BASE_PATH, handlers::routes())
        .merge(handlers::metrics::routes())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
