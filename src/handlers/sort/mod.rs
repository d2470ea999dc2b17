//! Sort job handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Sort routes; any method other than POST is rejected before a job is parsed
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/sort",
        post(handler::sort_job).fallback(handler::method_not_allowed),
    )
}
