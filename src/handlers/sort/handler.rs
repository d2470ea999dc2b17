//! Sort handler implementations

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::Method,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::SortJob,
    services::SortService,
    state::AppState,
};

use super::{request::SortJobRequest, response::SortResponse};

/// Run a sort job
///
/// Any parsing or job-level failure is reported as a 500. Lines the
/// algorithm rejects do not fail the request.
pub async fn sort_job(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<SortResponse>> {
    let body = body.map_err(|e| AppError::MalformedJob(e.body_text()))?;
    if body.is_empty() {
        return Err(AppError::MalformedJob(
            "Event does not contain body".to_string(),
        ));
    }

    let payload: SortJobRequest = serde_json::from_slice(&body)?;
    payload.validate()?;

    SortService::run_job(state.metrics(), state.publisher(), SortJob::from(payload)).await?;

    Ok(Json(SortResponse::default()))
}

/// Reject every method other than POST
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}
