//! Sort response DTOs

use serde::Serialize;

/// Successful sort response; the body is an empty JSON object
#[derive(Debug, Default, Serialize)]
pub struct SortResponse {}
